use std::io;

use thiserror::Error;
use triangle_area_core::prelude::AreaReportError;

use crate::{exitcode, input::InputError};

/// Top level error, displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("cannot build area report: {0}")]
    Report(#[from] AreaReportError),

    #[error("cannot serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot serialize YAML report: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(e) => match e {
                InputError::InvalidCount(_)
                | InputError::InvalidCoordinate { .. }
                | InputError::InvalidEncoding => exitcode::DATAERR,
                InputError::UnexpectedEof => exitcode::NOINPUT,
                InputError::Io(_) => exitcode::IOERR,
            },
            CliError::Report(_) | CliError::Json(_) | CliError::Yaml(_) => exitcode::SOFTWARE,
            CliError::Io(_) => exitcode::IOERR,
        }
    }
}
