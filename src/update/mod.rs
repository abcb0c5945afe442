//! The update handler: one translation in, one bundle rewritten.
//!
//! ## Module Structure
//!
//! - `request`: UpdateRequest and the locale mapping
//! - `writer`: ModuleWriter, read-merge-write of a single bundle
//! - `handler`: destination resolution and `apply_update`
//! - `error`: UpdateError

mod error;
mod handler;
mod request;
mod writer;

pub use error::UpdateError;
pub use handler::{UpdateOutcome, UpdateSettings, apply_update};
pub use request::{Locale, UpdateRequest};
pub use writer::{ModuleWriter, render_module};
