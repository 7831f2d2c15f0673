//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files, environment variables
//! and command line flags, then validates the result into a
//! [`ResolvedConfig`] the workflow can use directly.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
