//! Default-export extraction.
//!
//! Reads the object a message bundle exports by default and turns it into an
//! [`ExportedMapping`](crate::core::ExportedMapping) by inspecting syntax, never
//! by evaluating the module.

mod default_export;


pub use default_export::{
    DefaultExportExtractor, extract_default_export, extract_default_export_from_path,
};
