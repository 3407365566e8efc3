#![forbid(unsafe_code)]

//! Command-line driver for synchronizing translation dictionaries that
//! live as literals inside source files. The core scanning and splicing
//! primitives come from `langsync-core`; this crate adds the manifest and
//! catalog loading, the per-language sync loop, and console reporting.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod report;
pub mod sync;

pub use cli::run_from_env;
pub use error::{Result, SyncError};
