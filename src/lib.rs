/* src/lib.rs */

//!
//! Data-file loading for template rendering.
//!
//! The crate scans configured data directories, parses recognized files, and
//! merges the results into a host-owned [`TemplateData`] mapping keyed by
//! (optionally camel-cased) file base name:
//!
//! - **config**: plugin options and the host configuration mirror.
//! - **format**: extension dispatch to the YAML, JSON, and script-module
//!   parsers.
//! - **cache**: mtime skip cache so unchanged files are not re-read.
//! - **loader**: the directory scan pipeline ([`DataLoader`]).
//! - **hooks**: the lifecycle surface the host generator drives
//!   ([`LifecycleHooks`]).
//!
//! ## Feature Flags
//!
//! - `script` (default): `.js`/`.coffee` data files evaluated in a child
//!   interpreter process. Trusted input only.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod hooks;
pub mod key;
pub mod loader;
pub mod store;

pub use cache::MtimeCache;
pub use config::{Config, HostConfig, Plugins};
pub use error::LoadError;
pub use format::{AnyFormat, Format};
pub use hooks::{DataFilesPlugin, LifecycleHooks};
pub use key::KeyStyle;
pub use loader::DataLoader;
pub use store::{TemplateData, Value};
