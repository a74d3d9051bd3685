//! Check translations binary - validates every dictionary and prints a report
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Optional environment variables:
//! - TRANSLATIONS_DIR (extra JSON dictionaries to check)
//!
//! Exits with an error when any entry has an error-level problem (for example
//! an empty translation). Warnings are printed but do not fail the run.

use anyhow::{bail, Result};
use cms_plugins::config::Config;
use cms_plugins::i18n::TranslationValidator;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cms_plugins=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let dictionaries = config.dictionaries()?;
    info!("Checking {} dictionaries", dictionaries.len());

    let mut errors = 0;
    let mut warnings = 0;

    for provider in &dictionaries {
        let problems = TranslationValidator::validate_dictionary(provider);
        println!(
            "{} ({}) - {} entries, {} with problems",
            provider.name(),
            provider.codes().join(", "),
            provider.len(),
            problems.len()
        );

        for entry in problems {
            for error in &entry.report.errors {
                println!("  ERROR   {:?}: {}", entry.key, error);
            }
            for warning in &entry.report.warnings {
                println!("  WARNING {:?}: {}", entry.key, warning);
            }
            errors += entry.report.errors.len();
            warnings += entry.report.warnings.len();
        }
    }

    println!("\n{} errors, {} warnings", errors, warnings);

    if errors > 0 {
        bail!("{} translation errors found", errors);
    }
    Ok(())
}
