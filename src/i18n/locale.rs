//! Locale type: validated locale code used to pick translation providers.
//!
//! Codes are kept exactly as written (e.g. "zh-CN"). Providers match them with
//! plain string equality, so no case folding or `_`/`-` normalization happens
//! here.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale code is empty")]
    Empty,

    #[error("invalid locale code '{code}': {reason}")]
    Invalid { code: String, reason: &'static str },
}

/// A validated locale code such as `en-US` or `zh-CN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    code: Cow<'static, str>,
}

impl Locale {
    /// US English. Translation keys are written in this locale, so it is
    /// also what the identity fallback displays.
    pub const EN_US: Locale = Locale {
        code: Cow::Borrowed("en-US"),
    };

    /// Simplified Chinese (mainland China).
    pub const ZH_CN: Locale = Locale {
        code: Cow::Borrowed("zh-CN"),
    };

    /// Parse and validate a locale code.
    ///
    /// Accepted shape: a 2-3 letter primary language subtag followed by any
    /// number of `-`-separated alphanumeric subtags of 1-8 characters.
    ///
    /// # Example
    /// ```ignore
    /// let locale = Locale::parse("zh-CN")?;
    /// assert_eq!(locale.code(), "zh-CN");
    /// ```
    pub fn parse(code: &str) -> Result<Locale, LocaleError> {
        validate(code)?;
        Ok(Locale {
            code: Cow::Owned(code.to_string()),
        })
    }

    /// The canonical locale all translation keys are written in.
    pub fn canonical() -> Locale {
        Locale::EN_US
    }

    /// The locale code exactly as given.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Primary language subtag (`"zh"` for `"zh-CN"`).
    pub fn language(&self) -> &str {
        self.code.split('-').next().unwrap_or_default()
    }

    /// Whether this is the canonical locale.
    pub fn is_canonical(&self) -> bool {
        self.code == Locale::EN_US.code
    }
}

fn validate(code: &str) -> Result<(), LocaleError> {
    if code.is_empty() {
        return Err(LocaleError::Empty);
    }

    let invalid = |reason| LocaleError::Invalid {
        code: code.to_string(),
        reason,
    };

    let mut subtags = code.split('-');
    let primary = subtags.next().unwrap_or_default();
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("primary subtag must be 2-3 ASCII letters"));
    }

    for subtag in subtags {
        if subtag.is_empty() || subtag.len() > 8 {
            return Err(invalid("subtags must be 1-8 characters"));
        }
        if !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("subtags must be ASCII alphanumeric"));
        }
    }

    Ok(())
}

impl Default for Locale {
    fn default() -> Self {
        Locale::canonical()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Locale {
            code: Cow::Owned(value),
        })
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code.into_owned()
    }
}
