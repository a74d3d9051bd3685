//! Menu assembler: turns declarative "add an item" calls into rendered
//! fragments appended to a caller-owned `Menu`.
//!
//! The assembler borrows its collaborators (translation registry, template
//! renderer, locale) and holds no state of its own, so one assembler can be
//! shared by concurrent requests while each request owns its `Menu`.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::i18n::{Locale, TranslationRegistry};
use crate::menu::{script, Menu, MenuItem};
use crate::template::{self, RenderError, TemplateRenderer};

/// Page sizes offered when the caller does not supply any.
pub const DEFAULT_PAGE_SIZES: [u32; 5] = [5, 25, 50, 100, 500];

/// Default link target.
pub const DEFAULT_LINK_TARGET: &str = "_self";

/// Label key of the tree expand/collapse item.
pub const TOGGLE_ALL_LABEL: &str = "Expand/Collapse All";

/// Icon of the tree expand/collapse item.
pub const TOGGLE_ALL_ICON: &str = "fa fa-expand";

/// Errors raised while appending a menu item. The menu is left unchanged.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to encode menu parameters: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaginationParams<'a> {
    page_sizes: &'a [u32],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClickParams<'a> {
    name: &'a str,
    icon_class: &'a str,
    on_click: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkParams<'a> {
    name: &'a str,
    icon_class: &'a str,
    href: &'a str,
    target: &'a str,
}

/// Builds admin menu items for one locale.
#[derive(Clone, Copy)]
pub struct MenuAssembler<'a> {
    translations: &'a TranslationRegistry,
    renderer: &'a dyn TemplateRenderer,
    locale: &'a Locale,
}

impl<'a> MenuAssembler<'a> {
    pub fn new(
        translations: &'a TranslationRegistry,
        renderer: &'a dyn TemplateRenderer,
        locale: &'a Locale,
    ) -> Self {
        Self {
            translations,
            renderer,
            locale,
        }
    }

    /// Locale labels are resolved for.
    pub fn locale(&self) -> &Locale {
        self.locale
    }

    /// Resolve display text for the assembler's locale.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.translations.resolve(self.locale.code(), key)
    }

    fn append(&self, menu: &mut Menu, template_id: &str, params: Value) -> Result<(), MenuError> {
        let html = self.renderer.render(template_id, &params)?;
        debug!(template = template_id, "Appended menu item");
        menu.push(MenuItem::new(html));
        Ok(())
    }

    /// Reload the closest ajax table. Must be placed inside `.ajax-table-menu`.
    pub fn add_refresh(&self, menu: &mut Menu) -> Result<(), MenuError> {
        self.append(menu, template::REFRESH, Value::Null)
    }

    /// Toggle fullscreen for the enclosing `.portlet`.
    pub fn add_fullscreen(&self, menu: &mut Menu) -> Result<(), MenuError> {
        self.append(menu, template::FULLSCREEN, Value::Null)
    }

    pub fn add_divider(&self, menu: &mut Menu) -> Result<(), MenuError> {
        self.append(menu, template::DIVIDER, Value::Null)
    }

    /// Table export (xls) and print operations.
    pub fn add_table_operations(&self, menu: &mut Menu) -> Result<(), MenuError> {
        self.append(menu, template::TABLE_OPERATIONS, Value::Null)
    }

    /// Page size selector. `None` or an empty slice offers
    /// [`DEFAULT_PAGE_SIZES`]; otherwise sizes are offered in the given order.
    pub fn add_pagination_settings(
        &self,
        menu: &mut Menu,
        page_sizes: Option<&[u32]>,
    ) -> Result<(), MenuError> {
        let page_sizes = match page_sizes {
            Some(sizes) if !sizes.is_empty() => sizes,
            _ => &DEFAULT_PAGE_SIZES[..],
        };
        let params = serde_json::to_value(PaginationParams { page_sizes })?;
        self.append(menu, template::PAGINATION_SETTINGS, params)
    }

    /// Item that runs `on_click` (client-side code) verbatim when clicked.
    ///
    /// # Arguments
    /// * `name` - Display label key, resolved for the current locale
    /// * `icon_class` - Icon CSS class
    /// * `on_click` - JavaScript executed on click
    pub fn add_item_for_click_event(
        &self,
        menu: &mut Menu,
        name: &str,
        icon_class: &str,
        on_click: &str,
    ) -> Result<(), MenuError> {
        let params = serde_json::to_value(ClickParams {
            name: self.translate(name),
            icon_class,
            on_click,
        })?;
        self.append(menu, template::ONCLICK, params)
    }

    /// Item that navigates to `href`. `target` defaults to `_self`.
    pub fn add_item_for_link(
        &self,
        menu: &mut Menu,
        name: &str,
        icon_class: &str,
        href: &str,
        target: Option<&str>,
    ) -> Result<(), MenuError> {
        let params = serde_json::to_value(LinkParams {
            name: self.translate(name),
            icon_class,
            href,
            target: target.unwrap_or(DEFAULT_LINK_TARGET),
        })?;
        self.append(menu, template::LINK, params)
    }

    /// Item that opens `url` in a remote modal of the closest ajax table.
    /// The table refreshes when the modal closes after data changed.
    ///
    /// # Arguments
    /// * `title` - Modal title key, resolved for the current locale
    /// * `url` - Remote page address
    /// * `dialog_parameters` - Overrides passed to the client dialog
    pub fn add_remote_modal_for_ajax_table(
        &self,
        menu: &mut Menu,
        name: &str,
        icon_class: &str,
        title: &str,
        url: &str,
        dialog_parameters: Option<&Value>,
    ) -> Result<(), MenuError> {
        let code = script::remote_modal(self.translate(title), url, dialog_parameters)?;
        self.add_item_for_click_event(menu, name, icon_class, &code)
    }

    /// Item that opens a remote modal for the single selected table row.
    ///
    /// `title_template` and `url_template` use the client template syntax and
    /// are evaluated in the browser against the row; they are only encoded
    /// here. Clicking with no row selected does nothing.
    pub fn add_remote_modal_for_selected_row(
        &self,
        menu: &mut Menu,
        name: &str,
        icon_class: &str,
        title_template: &str,
        url_template: &str,
        dialog_parameters: Option<&Value>,
    ) -> Result<(), MenuError> {
        let code =
            script::remote_modal_for_selected_row(title_template, url_template, dialog_parameters)?;
        self.add_item_for_click_event(menu, name, icon_class, &code)
    }

    /// Expand/collapse all nodes of an ajax table tree. `level_member` names
    /// the row field holding the node depth.
    pub fn add_toggle_all_for_ajax_table_tree(
        &self,
        menu: &mut Menu,
        level_member: &str,
    ) -> Result<(), MenuError> {
        let code = script::toggle_all_tree(level_member)?;
        self.add_item_for_click_event(menu, TOGGLE_ALL_LABEL, TOGGLE_ALL_ICON, &code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translates;
    use serde_json::json;
    use std::sync::Mutex;

    /// Renderer that records every call and echoes the template id.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingRenderer {
        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TemplateRenderer for RecordingRenderer {
        fn render(&self, template_id: &str, params: &Value) -> Result<String, RenderError> {
            self.calls
                .lock()
                .unwrap()
                .push((template_id.to_string(), params.clone()));
            Ok(template_id.to_string())
        }
    }

    struct FailingRenderer;

    impl TemplateRenderer for FailingRenderer {
        fn render(&self, template_id: &str, _params: &Value) -> Result<String, RenderError> {
            Err(RenderError::UnknownTemplate(template_id.to_string()))
        }
    }

    fn registry() -> TranslationRegistry {
        let mut registry = TranslationRegistry::new();
        translates::register_builtin(&mut registry);
        registry
    }

    // ==================== Parameterless Items ====================

    #[test]
    fn test_parameterless_items() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler.add_refresh(&mut menu).unwrap();
        assembler.add_fullscreen(&mut menu).unwrap();
        assembler.add_divider(&mut menu).unwrap();
        assembler.add_table_operations(&mut menu).unwrap();

        let calls = renderer.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(_, params)| params.is_null()));
        let ids: Vec<&str> = menu.iter().map(MenuItem::html).collect();
        assert_eq!(
            ids,
            vec![
                template::REFRESH,
                template::FULLSCREEN,
                template::DIVIDER,
                template::TABLE_OPERATIONS
            ]
        );
    }

    // ==================== Pagination ====================

    #[test]
    fn test_pagination_default_sizes() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler.add_pagination_settings(&mut menu, None).unwrap();

        let calls = renderer.calls();
        assert_eq!(calls[0].0, template::PAGINATION_SETTINGS);
        assert_eq!(calls[0].1, json!({ "pageSizes": [5, 25, 50, 100, 500] }));
    }

    #[test]
    fn test_pagination_empty_uses_default() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler.add_pagination_settings(&mut menu, Some(&[])).unwrap();

        assert_eq!(
            renderer.calls()[0].1,
            json!({ "pageSizes": [5, 25, 50, 100, 500] })
        );
    }

    #[test]
    fn test_pagination_custom_order_preserved() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_pagination_settings(&mut menu, Some(&[100, 10, 1000]))
            .unwrap();

        assert_eq!(
            renderer.calls()[0].1,
            json!({ "pageSizes": [100, 10, 1000] })
        );
    }

    // ==================== Click / Link Items ====================

    #[test]
    fn test_click_event_params() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::ZH_CN;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_item_for_click_event(&mut menu, "Preview", "fa fa-eye", "alert(1)")
            .unwrap();

        let calls = renderer.calls();
        assert_eq!(calls[0].0, template::ONCLICK);
        assert_eq!(
            calls[0].1,
            json!({ "name": "预览", "iconClass": "fa fa-eye", "onClick": "alert(1)" })
        );
    }

    #[test]
    fn test_link_default_target() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_item_for_link(&mut menu, "Preview", "fa fa-eye", "/article/1", None)
            .unwrap();

        assert_eq!(
            renderer.calls()[0].1,
            json!({
                "name": "Preview",
                "iconClass": "fa fa-eye",
                "href": "/article/1",
                "target": "_self",
            })
        );
    }

    #[test]
    fn test_link_explicit_target() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_item_for_link(&mut menu, "Preview", "fa fa-eye", "/a", Some("_blank"))
            .unwrap();

        assert_eq!(renderer.calls()[0].1["target"], "_blank");
    }

    // ==================== Remote Modal Items ====================

    #[test]
    fn test_remote_modal_translates_title() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::ZH_CN;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_remote_modal_for_ajax_table(
                &mut menu,
                "Add",
                "fa fa-plus",
                "Article",
                "/admin/article/add",
                None,
            )
            .unwrap();

        let params = &renderer.calls()[0].1;
        assert_eq!(params["name"], "添加");
        assert_eq!(
            params["onClick"],
            "var table = $(this).closestAjaxTable();\n\
             table.showRemoteModalForRow(null, \"文章\", \"/admin/article/add\", null);"
        );
    }

    #[test]
    fn test_selected_row_templates_not_translated() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::ZH_CN;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_remote_modal_for_selected_row(
                &mut menu,
                "Edit",
                "fa fa-edit",
                "Title",
                "/admin/article/edit?id=<%-row.Id%>",
                Some(&json!({ "size": "size-wide" })),
            )
            .unwrap();

        let params = &renderer.calls()[0].1;
        assert_eq!(params["name"], "编辑");
        let code = params["onClick"].as_str().unwrap();
        assert!(code.contains("row && table.showRemoteModalForRow(row, \"Title\""));
        assert!(code.ends_with(r#"{"size":"size-wide"});"#));
    }

    #[test]
    fn test_toggle_all_label_translated() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::ZH_CN;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_toggle_all_for_ajax_table_tree(&mut menu, "Level")
            .unwrap();

        assert_eq!(
            renderer.calls()[0].1,
            json!({
                "name": "展开/折叠全部",
                "iconClass": "fa fa-expand",
                "onClick": "$(this).closestAjaxTable().treeNodeToggleAll(\"Level\")",
            })
        );
    }

    #[test]
    fn test_toggle_all_label_canonical() {
        let registry = registry();
        let renderer = RecordingRenderer::default();
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        assembler
            .add_toggle_all_for_ajax_table_tree(&mut menu, "Level")
            .unwrap();

        assert_eq!(renderer.calls()[0].1["name"], "Expand/Collapse All");
    }

    // ==================== Failure ====================

    #[test]
    fn test_render_failure_leaves_menu_unchanged() {
        let registry = registry();
        let renderer = FailingRenderer;
        let locale = Locale::EN_US;
        let assembler = MenuAssembler::new(&registry, &renderer, &locale);
        let mut menu = Menu::new();

        let err = assembler.add_divider(&mut menu).unwrap_err();
        assert!(matches!(err, MenuError::Render(RenderError::UnknownTemplate(_))));
        assert!(menu.is_empty());
    }
}
