//! Source parsing for message bundles.
//!
//! - `source`: the `SourceParser` capability and its swc implementation

pub mod source;

pub use source::{ParsedSource, SourceParser, SwcParser, syntax_for_path};
