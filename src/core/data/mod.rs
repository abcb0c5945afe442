//! Data types shared by the extractor and the update handler.
//!
//! - `scalar`: ScalarValue, the closed set of values a bundle entry can hold
//! - `mapping`: ExportedMapping, the ordered key/value object of one bundle

pub mod mapping;
pub mod scalar;

pub use mapping::{ExportedMapping, KeyAction};
pub use scalar::ScalarValue;
