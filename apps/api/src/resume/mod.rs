//! Document ingestion: uploaded resume bytes in, plain text out.

pub mod extract;

pub use extract::{extract_text, IngestError};
