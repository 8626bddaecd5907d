pub mod point;
pub mod report;
pub mod selection;
pub mod triangle;

/// Scalar type.
pub type Scalar = f64;

pub mod prelude {
    pub use crate::{point::*, report::settings::*, report::*, selection::*, triangle::*, Scalar};
}
