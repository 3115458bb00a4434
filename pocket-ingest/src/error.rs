//! Failures that make a whole export unusable.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("malformed export header: {0}")]
    Csv(#[from] csv::Error),
}
