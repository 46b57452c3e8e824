use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing one of the output artifacts.
///
/// Each variant keeps the native error of the layer that failed together with
/// the path that was being written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("json error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("xlsx error on {}: {source}", .path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;
