//! Template rendering seam for menu item fragments.
//!
//! The menu assembler only knows template ids and parameter objects; turning
//! them into markup is the job of a `TemplateRenderer`. `BuiltinTemplates` is
//! the default renderer with the common menu item templates compiled in.

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Template id: reload the closest ajax table.
pub const REFRESH: &str = "common.base/tmpl.menu_item.refresh.html";
/// Template id: toggle fullscreen on the enclosing portlet.
pub const FULLSCREEN: &str = "common.base/tmpl.menu_item.fullscreen.html";
/// Template id: separator line.
pub const DIVIDER: &str = "common.base/tmpl.menu_item.divider.html";
/// Template id: table export/print operations.
pub const TABLE_OPERATIONS: &str = "common.base/tmpl.menu_item.table_operations.html";
/// Template id: page size selector. Parameters: `{pageSizes}`.
pub const PAGINATION_SETTINGS: &str = "common.base/tmpl.menu_item.pagination_settings.html";
/// Template id: item running client code. Parameters: `{name, iconClass, onClick}`.
pub const ONCLICK: &str = "common.base/tmpl.menu_item.onclick.html";
/// Template id: navigation item. Parameters: `{name, iconClass, href, target}`.
pub const LINK: &str = "common.base/tmpl.menu_item.link.html";

/// Ids and sources of the compiled-in templates.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (REFRESH, include_str!("templates/refresh.html")),
    (FULLSCREEN, include_str!("templates/fullscreen.html")),
    (DIVIDER, include_str!("templates/divider.html")),
    (TABLE_OPERATIONS, include_str!("templates/table_operations.html")),
    (PAGINATION_SETTINGS, include_str!("templates/pagination_settings.html")),
    (ONCLICK, include_str!("templates/onclick.html")),
    (LINK, include_str!("templates/link.html")),
];

/// Errors surfaced by a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {0}")]
    UnknownTemplate(String),

    #[error("failed to render template {id}: {source}")]
    Engine {
        id: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Renders a template id plus a parameter object into a markup fragment.
///
/// `params` is `Value::Null` for templates that take no parameters.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template_id: &str, params: &Value) -> Result<String, RenderError>;
}

/// Default renderer backed by `minijinja`.
///
/// Every template id ends in `.html`, so all interpolated values are HTML
/// escaped. Undefined variables are errors rather than empty strings.
pub struct BuiltinTemplates {
    env: Environment<'static>,
}

impl BuiltinTemplates {
    /// Compile all built-in templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for &(id, template_source) in BUILTIN_TEMPLATES {
            env.add_template(id, template_source)
                .map_err(|source| RenderError::Engine {
                    id: id.to_string(),
                    source,
                })?;
        }
        debug!("Compiled {} menu item templates", BUILTIN_TEMPLATES.len());

        Ok(Self { env })
    }
}

impl TemplateRenderer for BuiltinTemplates {
    fn render(&self, template_id: &str, params: &Value) -> Result<String, RenderError> {
        let engine_err = |source: minijinja::Error| {
            if source.kind() == ErrorKind::TemplateNotFound {
                RenderError::UnknownTemplate(template_id.to_string())
            } else {
                RenderError::Engine {
                    id: template_id.to_string(),
                    source,
                }
            }
        };

        let template = self.env.get_template(template_id).map_err(engine_err)?;
        let empty = Value::Object(serde_json::Map::new());
        let ctx = if params.is_null() { &empty } else { params };
        template.render(ctx).map_err(engine_err)
    }
}
