use std::path::PathBuf;

use derive_more::{Display, Error, From};

use crate::models::LOG_FIELDS;

#[derive(Debug, Display, Error, From)]
pub enum FetchError {
    #[display("error downloading the log: {_0}")]
    Transport(reqwest::Error),

    #[display("could not write {}: {source}", path.display())]
    #[from(ignore)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Display, Error)]
pub enum AnalyzeError {
    #[display("the log file {} was not found", path.display())]
    FileNotFound { path: PathBuf },

    #[display("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("line {line}: expected {} fields, found {found}", LOG_FIELDS)]
    MalformedRow { line: usize, found: usize },

    #[display("line {line}: invalid timestamp {value:?}: {source}")]
    Timestamp {
        line: usize,
        value: String,
        source: chrono::ParseError,
    },

    #[display("line {line}: invalid size {value:?}: {source}")]
    Size {
        line: usize,
        value: String,
        source: std::num::ParseIntError,
    },

    #[display("the log contained no data rows")]
    EmptyInput,
}

#[derive(Debug, Display, Error, From)]
pub enum AppError {
    Fetch(FetchError),
    Analyze(AnalyzeError),

    #[display("could not encode the report as JSON: {_0}")]
    Json(serde_json::Error),
}
