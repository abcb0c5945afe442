//! i18n-flow - write translation edits back into message bundles
//!
//! A dev-server helper for projects that keep their messages in
//! `export default { ... }` modules. The server accepts
//! `{ key, en, cn, lang }` updates on one route and rewrites the matching
//! bundle; the library side can read any bundle's default-exported mapping.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface
//! - `config`: `.i18nflowrc.json` loading and validation
//! - `core`: default-export extraction and bundle discovery
//! - `logging`: tracing subscriber setup
//! - `server`: dev-server plugin, middleware chain and HTTP surface
//! - `update`: update requests and the bundle writer

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod server;
pub mod update;
