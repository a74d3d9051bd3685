//! Internationalization (i18n): translation providers and the registry that
//! resolves display text for a locale.
//!
//! # Architecture
//!
//! - `provider`: `TranslateProvider` contract and the data-backed `DictionaryProvider`
//! - `registry`: ordered provider list with first-match-wins, identity-fallback lookup
//! - `locale`: validated locale codes
//! - `translates`: built-in dictionaries shipped with the plugins
//! - `validator`: dictionary quality checks
//! - `metrics`: hit/fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use cms_plugins::i18n::{translates, Locale, TranslationRegistry};
//!
//! let mut registry = TranslationRegistry::new();
//! translates::register_builtin(&mut registry);
//!
//! assert_eq!(registry.resolve(Locale::ZH_CN.code(), "Preview"), "预览");
//! assert_eq!(registry.resolve("en-US", "Preview"), "Preview");
//! ```

mod locale;
mod metrics;
mod provider;
mod registry;
pub mod translates;
mod validator;

pub use locale::{Locale, LocaleError};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use provider::{load_directory, DictionaryProvider, ProviderError, TranslateProvider};
pub use registry::TranslationRegistry;
pub use validator::{EntryReport, TranslationValidator, ValidationReport};
