pub mod php;
pub mod twig;

use crate::syntax::Syntax;
use crudkit_core::CoreError;
use tera::{Context, Tera};

pub const CONTROLLER: &str = "controller.php";
pub const SEARCH: &str = "search.php";

/// View files of a template set, in generation order
pub const VIEWS: [&str; 6] = ["_form", "_search", "create", "index", "update", "view"];

/// Renders the built-in template sets
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, CoreError> {
        let mut tera = Tera::default();
        let templates = vec![
            (CONTROLLER.to_string(), php::CONTROLLER_TEMPLATE),
            (SEARCH.to_string(), php::SEARCH_TEMPLATE),
            (view_template(Syntax::Php, "_form"), php::FORM_VIEW),
            (view_template(Syntax::Php, "_search"), php::SEARCH_VIEW),
            (view_template(Syntax::Php, "create"), php::CREATE_VIEW),
            (view_template(Syntax::Php, "index"), php::INDEX_VIEW),
            (view_template(Syntax::Php, "update"), php::UPDATE_VIEW),
            (view_template(Syntax::Php, "view"), php::VIEW_VIEW),
            (view_template(Syntax::Twig, "_form"), twig::FORM_VIEW),
            (view_template(Syntax::Twig, "_search"), twig::SEARCH_VIEW),
            (view_template(Syntax::Twig, "create"), twig::CREATE_VIEW),
            (view_template(Syntax::Twig, "index"), twig::INDEX_VIEW),
            (view_template(Syntax::Twig, "update"), twig::UPDATE_VIEW),
            (view_template(Syntax::Twig, "view"), twig::VIEW_VIEW),
        ];

        tera.add_raw_templates(templates)
            .map_err(|e| CoreError::template(format!("Failed to register templates: {}", error_chain(&e))))?;
        // Generated code is never HTML-escaped
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, CoreError> {
        self.tera.render(template, context).map_err(|e| {
            CoreError::template(format!("Failed to render '{}': {}", template, error_chain(&e)))
        })
    }

    pub fn has_template(&self, template: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template)
    }
}

/// Registered name of a view template, e.g. `twig/views/index.twig`
pub fn view_template(syntax: Syntax, view: &str) -> String {
    format!(
        "{}/views/{}.{}",
        syntax.template_set(),
        view,
        syntax.file_extension()
    )
}

// tera keeps the useful message in the source chain
fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
