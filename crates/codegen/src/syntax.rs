use crudkit_core::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output dialect of the generated views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// Plain PHP view files (template set `default`)
    #[default]
    #[serde(alias = "default")]
    Php,
    /// Twig view files (template set `twig`)
    Twig,
}

impl Syntax {
    /// Name of the template set rendered for this dialect
    pub fn template_set(&self) -> &'static str {
        match self {
            Self::Php => "default",
            Self::Twig => "twig",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Php => "php",
            Self::Twig => "twig",
        }
    }

    /// Suffix appended to view names in `render()` calls
    pub fn render_suffix(&self) -> &'static str {
        match self {
            Self::Php => "",
            Self::Twig => ".twig",
        }
    }

    pub fn formatter(&self) -> &'static dyn SyntaxFormatter {
        match self {
            Self::Php => &PhpSyntax,
            Self::Twig => &TwigSyntax,
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_set())
    }
}

impl FromStr for Syntax {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "php" => Ok(Self::Php),
            "twig" => Ok(Self::Twig),
            other => Err(CoreError::validation(format!(
                "Unknown template set '{}'. Expected 'default' or 'twig'",
                other
            ))),
        }
    }
}

/// Expression-building primitives of one output dialect.
///
/// Field rendering and URL parameter synthesis only ever build code through
/// this trait, so adding a dialect means adding one implementation.
pub trait SyntaxFormatter: Send + Sync {
    /// Read an attribute off the `model` variable
    fn access(&self, attribute: &str) -> String;

    /// One `key => value` entry of an associative literal
    fn association(&self, key: &str, value: &str) -> String;

    /// Coerce an expression to a string; identity where the dialect
    /// stringifies on interpolation
    fn stringify(&self, expr: String) -> String;

    /// Wrap entries into an associative literal
    fn mapping(&self, entries: &[String]) -> String;

    /// `form.field(model, 'attr')` in the dialect
    fn active_field(&self, attribute: &str) -> String;

    /// Call `method` on `target` with already formatted arguments
    fn method_call(&self, target: &str, method: &str, args: &[String]) -> String;

    /// Print an expression into the view
    fn echo(&self, expr: &str) -> String;

    /// An echo statement that is present in the view but disabled
    fn commented_echo(&self, expr: &str) -> String;

    /// Single-quoted string literal
    fn quote(&self, value: &str) -> String {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Plain PHP expressions: `'id' => $model->id`
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpSyntax;

impl SyntaxFormatter for PhpSyntax {
    fn access(&self, attribute: &str) -> String {
        format!("$model->{}", attribute)
    }

    fn association(&self, key: &str, value: &str) -> String {
        format!("{} => {}", self.quote(key), value)
    }

    fn stringify(&self, expr: String) -> String {
        format!("(string){}", expr)
    }

    fn mapping(&self, entries: &[String]) -> String {
        format!("[{}]", entries.join(", "))
    }

    fn active_field(&self, attribute: &str) -> String {
        format!("$form->field($model, {})", self.quote(attribute))
    }

    fn method_call(&self, target: &str, method: &str, args: &[String]) -> String {
        format!("{}->{}({})", target, method, args.join(", "))
    }

    fn echo(&self, expr: &str) -> String {
        format!("<?= {} ?>", expr)
    }

    fn commented_echo(&self, expr: &str) -> String {
        format!("<?php // echo {} ?>", expr)
    }
}

/// Twig object/dot-path expressions: `'id': model.id`
#[derive(Debug, Clone, Copy, Default)]
pub struct TwigSyntax;

impl SyntaxFormatter for TwigSyntax {
    fn access(&self, attribute: &str) -> String {
        format!("model.{}", attribute)
    }

    fn association(&self, key: &str, value: &str) -> String {
        format!("{}: {}", self.quote(key), value)
    }

    fn stringify(&self, expr: String) -> String {
        expr
    }

    fn mapping(&self, entries: &[String]) -> String {
        format!("{{{}}}", entries.join(", "))
    }

    fn active_field(&self, attribute: &str) -> String {
        format!("form.field(model, {})", self.quote(attribute))
    }

    fn method_call(&self, target: &str, method: &str, args: &[String]) -> String {
        format!("{}.{}({})", target, method, args.join(", "))
    }

    fn echo(&self, expr: &str) -> String {
        format!("{{{{ {} | raw }}}}", expr)
    }

    fn commented_echo(&self, expr: &str) -> String {
        format!("{{# {} #}}", self.echo(expr))
    }
}
