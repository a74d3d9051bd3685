use anyhow::{Context, Result};
use tracing::{info, warn};

use cms_plugins::config::Config;
use cms_plugins::i18n::{TranslationRegistry, TranslationValidator};
use cms_plugins::menu::{Menu, MenuAssembler};
use cms_plugins::template::BuiltinTemplates;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cms_plugins=info".parse()?),
        )
        .init();

    info!("Starting admin menu preview");

    let config = Config::from_env()?;

    // Step 1: Register translation dictionaries (before anything reads them)
    let dictionaries = config.dictionaries()?;
    for provider in &dictionaries {
        for entry in TranslationValidator::validate_dictionary(provider) {
            for problem in entry.report.errors.iter().chain(&entry.report.warnings) {
                warn!("{} [{}]: {}", provider.name(), entry.key, problem);
            }
        }
    }
    let mut registry = TranslationRegistry::new();
    for provider in dictionaries {
        registry.register(provider);
    }
    info!("Registered {} translation dictionaries", registry.len());

    if !registry.supports(config.locale.code()) {
        warn!(
            "No dictionary serves '{}', menu labels will be shown untranslated",
            config.locale
        );
    }

    // Step 2: Build the article management menu
    let templates = BuiltinTemplates::new().context("Failed to compile menu templates")?;
    let assembler = MenuAssembler::new(&registry, &templates, &config.locale);
    let menu = article_menu(&assembler, config.page_sizes.as_deref())?;

    // Step 3: Print it
    println!("{}", menu.to_html());

    let report = registry.metrics().report();
    info!(
        "Rendered {} menu items ({})",
        menu.len(),
        serde_json::to_string(&report)?
    );
    Ok(())
}

/// Menu of the article management table.
fn article_menu(assembler: &MenuAssembler<'_>, page_sizes: Option<&[u32]>) -> Result<Menu> {
    let mut menu = Menu::new();
    assembler.add_item_for_link(&mut menu, "AllArticles", "fa fa-list", "/admin/articles", None)?;
    assembler.add_remote_modal_for_ajax_table(
        &mut menu,
        "Add",
        "fa fa-plus",
        "Article",
        "/admin/articles/add",
        None,
    )?;
    assembler.add_remote_modal_for_selected_row(
        &mut menu,
        "Edit",
        "fa fa-edit",
        "Edit <%-row.Title%>",
        "/admin/articles/edit?id=<%-row.Id%>",
        Some(&serde_json::json!({ "size": "size-wide" })),
    )?;
    assembler.add_item_for_click_event(
        &mut menu,
        "Preview",
        "fa fa-eye",
        "var row = $(this).closestAjaxTable().getSingleSelectedRowData(); \
         row && window.open('/article/' + row.Id);",
    )?;
    assembler.add_toggle_all_for_ajax_table_tree(&mut menu, "Level")?;
    assembler.add_divider(&mut menu)?;
    assembler.add_pagination_settings(&mut menu, page_sizes)?;
    assembler.add_table_operations(&mut menu)?;
    assembler.add_refresh(&mut menu)?;
    assembler.add_fullscreen(&mut menu)?;
    Ok(menu)
}
