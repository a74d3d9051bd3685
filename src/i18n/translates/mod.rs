//! Built-in dictionaries shipped with the plugins.
//!
//! Keys are the canonical (en-US) display text; each table maps them to the
//! localized text for the locales listed in its `CODES`.

pub mod cms_article;
pub mod common_base;
pub mod pingpp;

use crate::i18n::{DictionaryProvider, TranslationRegistry};

/// Shared admin UI strings.
pub fn common_base() -> DictionaryProvider {
    DictionaryProvider::from_static("common_base", common_base::CODES, common_base::ZH_CN)
}

/// Article management plugin strings.
pub fn cms_article() -> DictionaryProvider {
    DictionaryProvider::from_static("cms_article", cms_article::CODES, cms_article::ZH_CN)
}

/// Ping++ payment plugin strings.
pub fn pingpp() -> DictionaryProvider {
    DictionaryProvider::from_static("pingpp", pingpp::CODES, pingpp::ZH_CN)
}

/// All built-in dictionaries in registration order.
pub fn builtin() -> Vec<DictionaryProvider> {
    vec![common_base(), cms_article(), pingpp()]
}

/// Register every built-in dictionary, in `builtin()` order.
pub fn register_builtin(registry: &mut TranslationRegistry) {
    for provider in builtin() {
        registry.register(provider);
    }
}
