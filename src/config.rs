use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::i18n::{load_directory, translates, DictionaryProvider, Locale, TranslationRegistry};

#[derive(Debug, Clone)]
pub struct Config {
    // Locale menus are rendered for
    pub locale: Locale,

    // Extra JSON dictionaries, registered after the built-in ones
    pub translations_dir: Option<PathBuf>,

    // Page sizes offered by the pagination item (None = built-in default)
    pub page_sizes: Option<Vec<u32>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match lookup("MENU_LOCALE") {
            Some(code) => Locale::parse(code.trim()).context("MENU_LOCALE is not a valid locale")?,
            None => Locale::canonical(),
        };

        let translations_dir = lookup("TRANSLATIONS_DIR")
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let page_sizes = match lookup("PAGE_SIZES") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(parse_page_sizes(&raw).context("PAGE_SIZES is invalid")?)
            }
            _ => None,
        };

        Ok(Self {
            locale,
            translations_dir,
            page_sizes,
        })
    }
}

impl Config {
    /// Built-in dictionaries followed by those in `translations_dir`, in
    /// registration order.
    pub fn dictionaries(&self) -> Result<Vec<DictionaryProvider>> {
        let mut providers = translates::builtin();
        if let Some(dir) = &self.translations_dir {
            let loaded = load_directory(dir)
                .with_context(|| format!("Failed to load translations from {}", dir.display()))?;
            providers.extend(loaded);
        }
        Ok(providers)
    }

    /// Registry with every dictionary from `dictionaries()` registered.
    pub fn translation_registry(&self) -> Result<TranslationRegistry> {
        let mut registry = TranslationRegistry::new();
        for provider in self.dictionaries()? {
            registry.register(provider);
        }
        Ok(registry)
    }
}

/// Parse a comma-separated list of positive page sizes, keeping order.
fn parse_page_sizes(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let size: u32 = part
                .parse()
                .with_context(|| format!("'{}' is not a number", part))?;
            if size == 0 {
                bail!("page size must be positive");
            }
            Ok(size)
        })
        .collect()
}
