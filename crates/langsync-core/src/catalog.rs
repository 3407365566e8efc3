//! Catalog model and key diffing.
//!
//! A [`Catalog`] is one language's key→string mapping. A [`Registry`]
//! groups catalogs by language code and distinguishes one of them as the
//! base language, whose key set is the single source of truth for what
//! keys should exist everywhere. The registry is built explicitly at
//! startup and passed by reference into the sync driver; it is read-only
//! for the duration of a run.

use std::collections::HashMap;

use thiserror::Error;

/// Language code (e.g., `"en"`, `"fr"`, `"pt-BR"`).
pub type LanguageCode = String;

/// Key→string mapping for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the catalog contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All keys, sorted for deterministic output.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Errors constructing a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The configured base language has no catalog.
    #[error("base language `{0}` has no catalog")]
    UnknownBase(String),
}

/// All loaded catalogs keyed by language code, with one language
/// distinguished as the base.
#[derive(Debug, Clone)]
pub struct Registry {
    base: LanguageCode,
    catalogs: HashMap<LanguageCode, Catalog>,
}

impl Registry {
    /// Build a registry from loaded catalogs.
    ///
    /// Fails if `base` does not name one of the catalogs.
    pub fn new(
        base: impl Into<String>,
        catalogs: HashMap<LanguageCode, Catalog>,
    ) -> Result<Self, RegistryError> {
        let base = base.into();
        if !catalogs.contains_key(&base) {
            return Err(RegistryError::UnknownBase(base));
        }
        Ok(Self { base, catalogs })
    }

    /// The base language code.
    #[must_use]
    pub fn base_code(&self) -> &str {
        &self.base
    }

    /// The base language catalog.
    #[must_use]
    pub fn base(&self) -> &Catalog {
        // Presence is checked in `new`.
        &self.catalogs[&self.base]
    }

    /// Catalog for a language, if loaded.
    #[must_use]
    pub fn catalog(&self, lang: &str) -> Option<&Catalog> {
        self.catalogs.get(lang)
    }

    /// All language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// All non-base language codes, sorted.
    #[must_use]
    pub fn secondary_languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .catalogs
            .keys()
            .map(String::as_str)
            .filter(|code| *code != self.base)
            .collect();
        codes.sort_unstable();
        codes
    }
}

/// Key drift between the base catalog and a secondary catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Keys in the base but not in the secondary, sorted.
    pub missing: Vec<String>,
    /// Keys in the secondary but not in the base, sorted.
    pub unused: Vec<String>,
}

impl KeyDiff {
    /// Whether the secondary catalog's key set matches the base exactly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

/// Compute key drift between two catalogs.
///
/// `missing = base − other`, `unused = other − base`; values never
/// participate. Both sides come back sorted so file edits and reports are
/// reproducible.
#[must_use]
pub fn diff_keys(base: &Catalog, other: &Catalog) -> KeyDiff {
    let mut missing: Vec<String> = base
        .keys()
        .filter(|key| !other.contains_key(key))
        .map(String::from)
        .collect();
    let mut unused: Vec<String> = other
        .keys()
        .filter(|key| !base.contains_key(key))
        .map(String::from)
        .collect();
    missing.sort_unstable();
    unused.sort_unstable();
    KeyDiff { missing, unused }
}
