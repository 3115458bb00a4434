//! pocket-ingest: bank export loading and column validation.

pub mod error;
pub mod parsers;
pub mod types;

pub use error::IngestError;
pub use parsers::{
    load_operations, parse_operations, parse_operations_bytes, parse_operations_str,
    read_operations,
};
pub use types::Column;
