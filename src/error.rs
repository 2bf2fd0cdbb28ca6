use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("[{adapter}] raw source not found: {}", path.display())]
    SourceMissing { adapter: &'static str, path: PathBuf },

    #[error("[{adapter}] failed to read {}: {source}", path.display())]
    SourceUnreadable {
        adapter: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("[{adapter}] {} is not valid JSON: {source}", path.display())]
    SourceMalformed {
        adapter: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("[{adapter}] {} must contain an array of records", path.display())]
    NotARecordArray { adapter: &'static str, path: PathBuf },

    #[error("[{adapter}] {} record #{index} is not an object", path.display())]
    RecordNotObject {
        adapter: &'static str,
        path: PathBuf,
        index: usize,
    },

    #[error("[{adapter}] {} record #{index}: missing required field '{field}'", path.display())]
    MissingField {
        adapter: &'static str,
        path: PathBuf,
        index: usize,
        field: String,
    },

    #[error("[{adapter}] {} record #{index}: field '{field}' must be {expected}", path.display())]
    InvalidField {
        adapter: &'static str,
        path: PathBuf,
        index: usize,
        field: String,
        expected: &'static str,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir { path: PathBuf, source: std::io::Error },

    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite { path: PathBuf, source: std::io::Error },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
