//! The kinds of failure that abort a generation run.
//!
//! Every one of them is fatal. They travel through the program wrapped in a
//! [`color_eyre::Report`], so callers that care about the concrete kind can
//! recover it with `report.downcast_ref::<GeneratorError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No schema path was supplied on the command line
    #[error("please provide a json schema for the project\n\n{usage}")]
    MissingArgument { usage: String },

    /// The schema path does not reference an existing file
    #[error("the schema file {path:?} does not exist\n\n{usage}")]
    FileNotFound { path: PathBuf, usage: String },

    /// The schema is malformed, or its values are not acceptable
    #[error("invalid project schema: {0}")]
    Parse(String),

    /// A directory or file could not be created or written
    #[error("filesystem operation failed on {path:?}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pre-existing files would be overwritten with different contents
    #[error("refusing to overwrite existing files: {}", display_paths(.0))]
    AlreadyExists(Vec<PathBuf>),

    /// The external build tool could not be launched at all
    #[error("could not launch {program:?}")]
    ExternalToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external build tool ran but reported a failure
    #[error("{program:?} exited with {}", display_exit_code(.code))]
    ExternalToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl GeneratorError {
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{path:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a termination signal".to_owned(),
    }
}
