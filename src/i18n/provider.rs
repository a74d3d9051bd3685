//! Translation providers: the unit that supplies text for one or more locales.
//!
//! A provider answers two questions: "do you serve this locale code?" and
//! "what is the text for this key?". `DictionaryProvider` is the plain
//! data-backed implementation used by every plugin, either from a static table
//! compiled into the binary or from a JSON dictionary file on disk.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Capability contract for a source of translations.
///
/// Implementations must be immutable once registered; the registry is read
/// from many threads without locking.
pub trait TranslateProvider: Send + Sync {
    /// Whether this provider serves the given locale code (exact match).
    fn can_translate(&self, code: &str) -> bool;

    /// Text for `key`, or `None` when this provider has no entry.
    fn translate(&self, key: &str) -> Option<&str>;
}

/// Errors raised while loading dictionary files.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("translation file {path} declares no locale codes")]
    NoCodes { path: PathBuf },
}

/// On-disk shape of a dictionary file.
#[derive(Debug, Serialize, Deserialize)]
struct DictionaryFile {
    codes: Vec<String>,
    translations: HashMap<String, String>,
}

/// Translation provider backed by a fixed key -> text map.
#[derive(Debug, Clone)]
pub struct DictionaryProvider {
    name: String,
    codes: HashSet<String>,
    translations: HashMap<String, String>,
}

impl DictionaryProvider {
    /// Build a provider from borrowed tables, copying every entry.
    ///
    /// # Arguments
    /// * `name` - Label used in logs and validation output
    /// * `codes` - Locale codes this provider serves
    /// * `entries` - `(key, text)` pairs; later duplicates replace earlier ones
    pub fn from_static(
        name: &str,
        codes: &[&str],
        entries: &[(&str, &str)],
    ) -> Self {
        Self {
            name: name.to_string(),
            codes: codes.iter().map(|c| c.to_string()).collect(),
            translations: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Build a provider from owned data.
    pub fn new(
        name: impl Into<String>,
        codes: impl IntoIterator<Item = String>,
        translations: HashMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            codes: codes.into_iter().collect(),
            translations,
        }
    }

    /// Load a provider from a JSON dictionary file.
    ///
    /// Expected format:
    /// ```json
    /// { "codes": ["zh-CN"], "translations": { "Preview": "预览" } }
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self, ProviderError> {
        let data = fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DictionaryFile =
            serde_json::from_str(&data).map_err(|source| ProviderError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if file.codes.is_empty() {
            return Err(ProviderError::NoCodes {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(
            "Loaded {} translations for {:?} from {}",
            file.translations.len(),
            file.codes,
            path.display()
        );

        Ok(Self::new(name, file.codes, file.translations))
    }

    /// Label used in logs and validation output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale codes served, sorted for stable output.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.codes.iter().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// All `(key, text)` entries, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .translations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl TranslateProvider for DictionaryProvider {
    fn can_translate(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    fn translate(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}

/// Load every `*.json` dictionary in `dir`, ordered by file name.
///
/// The ordering makes registration (and therefore conflict resolution between
/// files claiming the same locale) reproducible across machines.
pub fn load_directory(dir: &Path) -> Result<Vec<DictionaryProvider>, ProviderError> {
    let io_err = |source| ProviderError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let providers = paths
        .iter()
        .map(|path| DictionaryProvider::from_json_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Loaded {} translation dictionaries from {}",
        providers.len(),
        dir.display()
    );

    Ok(providers)
}
