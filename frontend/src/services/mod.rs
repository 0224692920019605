//! Browser services.
//!
//! # Services
//!
//! - [`host`] - `postMessage` connection to the host app and DOM measurement

pub mod host;

pub use host::*;
