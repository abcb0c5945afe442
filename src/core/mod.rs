//! The literal extractor.
//!
//! ## Module Structure
//!
//! - `data`: ScalarValue and ExportedMapping
//! - `error`: ExtractError
//! - `extract`: default-export discovery and the literal walk
//! - `parsers`: the SourceParser capability (swc)
//! - `scan`: bundle discovery and bulk extraction

pub mod data;
mod error;
pub mod extract;
pub mod parsers;
pub mod scan;

pub use data::{ExportedMapping, KeyAction, ScalarValue};
pub use error::ExtractError;
pub use extract::{
    DefaultExportExtractor, extract_default_export, extract_default_export_from_path,
};
