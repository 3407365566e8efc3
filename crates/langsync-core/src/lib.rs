#![forbid(unsafe_code)]

//! Core primitives for keeping translation dictionaries that live inside
//! source files in sync with a base-language catalog.
//!
//! The crate is split along the same lines as the tool that drives it:
//!
//! - [`catalog`] — in-memory catalogs, the registry of languages, and key
//!   diffing between the base language and everything else.
//! - [`scan`] — the brace-scoped literal locator: finds the closing brace
//!   that matches an embedded dictionary literal without parsing the host
//!   file format.
//! - [`splice`] — byte-precise edits inside a located literal: removing
//!   stale entries and appending placeholder entries.
//!
//! Everything here is pure and deterministic; file I/O and reporting live
//! in the `langsync` binary crate.

pub mod catalog;
pub mod scan;
pub mod splice;

pub use catalog::{Catalog, KeyDiff, Registry, RegistryError, diff_keys};
pub use scan::{LiteralSpan, LocateError, find_closing_brace, locate_literal};
pub use splice::{contains_entry, escape_value, insert_entries, remove_entries};
