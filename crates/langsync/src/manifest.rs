//! Manifest and catalog-source loading.
//!
//! The manifest is a small JSON file naming the base language, the catalog
//! source, and one target per secondary language. The catalog source is a
//! JSON object mapping language code → { key: value }; it is loaded once
//! per run and its absence is fatal. Relative paths resolve against the
//! manifest's own directory so the tool can run from anywhere.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use langsync_core::{Catalog, Registry};

use crate::error::{Result, SyncError};

/// Indent applied to inserted entries when the manifest does not set one.
pub const DEFAULT_INDENT: &str = "    ";

/// One secondary language's target: where its dictionary literal lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Language code this target holds.
    pub lang: String,
    /// File containing the dictionary literal.
    pub file: PathBuf,
    /// Text immediately preceding the literal's opening brace. May include
    /// the brace itself.
    pub marker: String,
}

/// Sync manifest: base language, catalog source, and per-language targets.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Base language code; its key set is the source of truth.
    pub base: String,
    /// Path to the catalog source JSON (language → { key: value }).
    pub catalog: PathBuf,
    /// Indent for inserted entries.
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Secondary-language targets, processed in order.
    pub targets: Vec<Target>,
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

impl Manifest {
    /// Load and validate a manifest, resolving relative paths against the
    /// manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::MissingPath {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let mut manifest: Manifest = serde_json::from_str(&raw)?;

        if manifest.targets.is_empty() {
            return Err(SyncError::InvalidManifest {
                message: "no targets configured".to_string(),
            });
        }
        for target in &manifest.targets {
            if target.lang == manifest.base {
                return Err(SyncError::InvalidManifest {
                    message: format!("base language `{}` listed as a target", manifest.base),
                });
            }
        }

        if let Some(dir) = path.parent() {
            manifest.catalog = resolve(dir, &manifest.catalog);
            for target in &mut manifest.targets {
                target.file = resolve(dir, &target.file);
            }
        }
        Ok(manifest)
    }

    /// Load the catalog source and build the registry.
    pub fn load_registry(&self) -> Result<Registry> {
        if !self.catalog.exists() {
            return Err(SyncError::MissingPath {
                path: self.catalog.clone(),
            });
        }
        let raw = fs::read_to_string(&self.catalog)?;
        let data: HashMap<String, HashMap<String, String>> = serde_json::from_str(&raw)?;
        let catalogs = data
            .into_iter()
            .map(|(lang, entries)| (lang, entries.into_iter().collect::<Catalog>()))
            .collect();
        Registry::new(self.base.clone(), catalogs).map_err(|error| SyncError::InvalidManifest {
            message: error.to_string(),
        })
    }
}

fn resolve(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
