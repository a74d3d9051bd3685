//! Translation quality validation.
//!
//! Checks that a dictionary entry keeps the parts of the key that code relies
//! on: `{0}`/`{name}` format placeholders, `<%= ... %>` client-side template
//! placeholders, and surrounding whitespace.

use regex::Regex;
use std::sync::OnceLock;

use crate::i18n::DictionaryProvider;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the translation unusable
    pub errors: Vec<String>,

    /// Problems that probably break formatting
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Problems found for one dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub key: String,
    pub report: ValidationReport,
}

/// Validator for dictionary entries.
pub struct TranslationValidator;

static FORMAT_PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static TEMPLATE_PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate one translated entry against its key.
    ///
    /// # Arguments
    /// * `key` - The canonical text (dictionary key)
    /// * `translated` - The dictionary value
    pub fn validate(key: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if translated.trim().is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        let key_format = Self::extract_format_placeholders(key);
        let trans_format = Self::extract_format_placeholders(translated);
        if key_format != trans_format {
            report.warnings.push(format!(
                "Placeholder mismatch: key has {:?}, translation has {:?}",
                key_format, trans_format
            ));
        }

        let key_template = Self::extract_template_placeholders(key);
        let trans_template = Self::extract_template_placeholders(translated);
        if key_template != trans_template {
            report.warnings.push(format!(
                "Template placeholder mismatch: key has {:?}, translation has {:?}",
                key_template, trans_template
            ));
        }

        let key_ws = (key.starts_with(char::is_whitespace), key.ends_with(char::is_whitespace));
        let trans_ws = (
            translated.starts_with(char::is_whitespace),
            translated.ends_with(char::is_whitespace),
        );
        if key_ws != trans_ws {
            report
                .warnings
                .push("Surrounding whitespace differs from key".to_string());
        }

        report
    }

    /// Validate every entry of a dictionary; only entries with problems are
    /// returned, sorted by key.
    pub fn validate_dictionary(provider: &DictionaryProvider) -> Vec<EntryReport> {
        provider
            .entries()
            .into_iter()
            .map(|(key, text)| EntryReport {
                key: key.to_string(),
                report: Self::validate(key, text),
            })
            .filter(|entry| !entry.report.is_clean())
            .collect()
    }

    /// Extract `{0}` / `{name}` placeholders, sorted
    fn extract_format_placeholders(text: &str) -> Vec<String> {
        let regex = FORMAT_PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{[A-Za-z0-9_]+\}").expect("valid placeholder regex"));

        let mut found: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        found.sort();
        found
    }

    /// Extract `<%= expr %>` / `<%- expr %>` placeholders, sorted
    fn extract_template_placeholders(text: &str) -> Vec<String> {
        let regex = TEMPLATE_PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"<%[=-]?\s*([^%]+?)\s*%>").expect("valid template regex")
        });

        let mut found: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        found.sort();
        found
    }
}
