//! Translation registry: ordered set of providers answering "text for key in
//! locale".
//!
//! Providers are registered during startup through `&mut self`; afterwards the
//! registry is shared by reference (or `Arc`) and only read. Because
//! registration needs exclusive access, the borrow checker rules out adding a
//! provider while another thread is resolving.

use std::fmt;

use tracing::{debug, trace};

use crate::i18n::{TranslateProvider, TranslationMetrics};

/// Ordered collection of translation providers.
#[derive(Default)]
pub struct TranslationRegistry {
    providers: Vec<Box<dyn TranslateProvider>>,
    metrics: TranslationMetrics,
}

impl TranslationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider. Earlier registrations win when several providers
    /// serve the same locale and key.
    pub fn register<P>(&mut self, provider: P)
    where
        P: TranslateProvider + 'static,
    {
        self.providers.push(Box::new(provider));
        debug!("Registered translation provider #{}", self.providers.len());
    }

    /// Append an already boxed provider.
    pub fn register_boxed(&mut self, provider: Box<dyn TranslateProvider>) {
        self.providers.push(provider);
        debug!("Registered translation provider #{}", self.providers.len());
    }

    /// Resolve `key` for the locale code `code`.
    ///
    /// Providers are consulted in registration order; those that do not serve
    /// `code` are skipped. The first present value wins. When nobody has a
    /// value, `key` itself is returned: keys are written in the canonical
    /// locale, so the untranslated key is the display text.
    ///
    /// Locale codes match exactly; "zh-CN" never falls back to "zh".
    pub fn resolve<'a>(&'a self, code: &str, key: &'a str) -> &'a str {
        let found = self
            .providers
            .iter()
            .filter(|provider| provider.can_translate(code))
            .find_map(|provider| provider.translate(key));

        match found {
            Some(text) => {
                self.metrics.record_hit();
                text
            }
            None => {
                self.metrics.record_fallback();
                trace!(locale = code, key, "No translation found, using key");
                key
            }
        }
    }

    /// Whether any provider serves the locale code.
    pub fn supports(&self, code: &str) -> bool {
        self.providers.iter().any(|p| p.can_translate(code))
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Lookup counters for this registry.
    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }
}

impl fmt::Debug for TranslationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationRegistry")
            .field("providers", &self.providers.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}
