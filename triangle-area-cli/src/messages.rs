//! User facing texts.
//!
//! Terminal output is UTF-8, so Cyrillic texts need no extra console setup.

use triangle_area_core::prelude::Triangle;

use crate::{
    error::CliError,
    input::{Axis, InputError, Vertex},
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Ukrainian,
}

impl Language {
    pub fn count_prompt(self) -> &'static str {
        match self {
            Self::English => "Enter the number of triangles (n): ",
            Self::Ukrainian => "Введіть кількість трикутників (n): ",
        }
    }

    pub fn triangle_header(self, index: usize) -> String {
        match self {
            Self::English => format!("\n--- Enter data for triangle #{} ---", index),
            Self::Ukrainian => format!("\n--- Введення даних для трикутника #{} ---", index),
        }
    }

    pub fn coordinate_prompt(self, vertex: Vertex, axis: Axis) -> String {
        match self {
            Self::English => format!("Enter {} for vertex {}: ", axis, vertex),
            Self::Ukrainian => format!("Введіть {} для вершини {}: ", axis, vertex),
        }
    }

    pub fn results_header(self) -> &'static str {
        match self {
            Self::English => "\n--- Results ---",
            Self::Ukrainian => "\n--- Результати ---",
        }
    }

    pub fn triangle(self, triangle: &Triangle) -> String {
        match self {
            Self::English => triangle.to_string(),
            Self::Ukrainian => format!(
                "Трикутник [A{}, B{}, C{}]",
                triangle.a(),
                triangle.b(),
                triangle.c()
            ),
        }
    }

    pub fn area_label(self) -> &'static str {
        match self {
            Self::English => "Area",
            Self::Ukrainian => "Площа",
        }
    }

    pub fn largest_label(self) -> &'static str {
        match self {
            Self::English => "Largest by area",
            Self::Ukrainian => "Найбільший за площею",
        }
    }

    pub fn largest_area_label(self) -> &'static str {
        match self {
            Self::English => "Its area",
            Self::Ukrainian => "Його площа",
        }
    }

    /// Message shown to the user before the process exits with failure.
    pub fn error_message(self, error: &CliError) -> String {
        let prefix = match self {
            Self::English => "Error",
            Self::Ukrainian => "Помилка",
        };
        let details = match (self, error) {
            (Self::English, CliError::Input(InputError::InvalidCount(_))) => {
                "enter a valid integer greater than 0.".to_owned()
            }
            (Self::Ukrainian, CliError::Input(InputError::InvalidCount(_))) => {
                "введіть коректне ціле число більше 0.".to_owned()
            }
            (
                Self::Ukrainian,
                CliError::Input(InputError::InvalidCoordinate {
                    vertex, axis, text, ..
                }),
            ) => format!(
                "некоректне значення {} для вершини {}: `{}`.",
                axis, vertex, text
            ),
            (Self::Ukrainian, CliError::Input(InputError::UnexpectedEof)) => {
                "несподіваний кінець введення.".to_owned()
            }
            (Self::Ukrainian, CliError::Input(InputError::InvalidEncoding)) => {
                "введення не є коректним текстом UTF-8.".to_owned()
            }
            (Self::Ukrainian, CliError::Input(InputError::Io(error))) => {
                format!("немає доступу до консолі: {}", error)
            }
            (Self::Ukrainian, CliError::Report(_)) => {
                "немає трикутників для звіту.".to_owned()
            }
            (Self::Ukrainian, CliError::Json(error)) => {
                format!("не вдалося сформувати звіт JSON: {}", error)
            }
            (Self::Ukrainian, CliError::Yaml(error)) => {
                format!("не вдалося сформувати звіт YAML: {}", error)
            }
            (Self::Ukrainian, CliError::Io(error)) => {
                format!("не вдалося записати результат: {}", error)
            }
            (Self::English, error) => error.to_string(),
        };
        format!("{}: {}", prefix, details)
    }
}
