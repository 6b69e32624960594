use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown report type '{name}'")]
    UnknownReport {
        name: String,
        available: Vec<String>,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, PayrollError>;
