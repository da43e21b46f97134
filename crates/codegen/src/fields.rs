//! Widget selection for generated form and search-form fields.
//!
//! [`decide_field`] maps an attribute and its (optional) column onto a
//! [`WidgetSpec`]; [`render_field`] turns that decision into an active-field
//! expression in the selected dialect. Missing schema data never fails: it
//! degrades to a generic input.

use crate::inflector;
use crate::syntax::SyntaxFormatter;
use crudkit_core::{ColumnSchema, ValueType};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(password|pass|passwd|passcode)$").expect("password regex should be valid")
});

/// Whether a name denotes a password field
pub fn is_password_like(name: &str) -> bool {
    PASSWORD_PATTERN.is_match(name)
}

/// Input control chosen for an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    Checkbox,
    Textarea,
    DropDownList,
    PasswordInput,
    TextInput,
    /// The field's default input; no widget method is called
    Generic,
}

impl Widget {
    /// Active-field method rendering this widget
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Self::Checkbox => Some("checkbox"),
            Self::Textarea => Some("textarea"),
            Self::DropDownList => Some("dropDownList"),
            Self::PasswordInput => Some("passwordInput"),
            Self::TextInput => Some("textInput"),
            Self::Generic => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    fn literal(&self, formatter: &dyn SyntaxFormatter) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Str(s) => formatter.quote(s),
        }
    }
}

/// Widget decision for one attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSpec {
    pub widget: Widget,
    pub options: Vec<(String, OptionValue)>,
    /// Raw value -> label, for drop-down lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<(String, String)>>,
}

impl WidgetSpec {
    pub fn new(widget: Widget) -> Self {
        Self {
            widget,
            options: Vec::new(),
            choices: None,
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.push((name.into(), value));
        self
    }

    pub fn with_choices(mut self, choices: Vec<(String, String)>) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Form a field is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContext {
    /// Create/update form
    Form,
    /// Filter form of the index page
    Search,
}

/// Decide the widget for an attribute, labelling enum choices with [`inflector::humanize`]
pub fn decide_field(
    attribute: &str,
    column: Option<&ColumnSchema>,
    context: FieldContext,
) -> WidgetSpec {
    decide_field_with(attribute, column, context, inflector::humanize)
}

/// Decide the widget for an attribute with a custom label function
pub fn decide_field_with<H>(
    attribute: &str,
    column: Option<&ColumnSchema>,
    context: FieldContext,
    humanize: H,
) -> WidgetSpec
where
    H: Fn(&str) -> String,
{
    match context {
        FieldContext::Form => decide_form_field(attribute, column, humanize),
        FieldContext::Search => decide_search_field(column),
    }
}

fn decide_form_field<H>(attribute: &str, column: Option<&ColumnSchema>, humanize: H) -> WidgetSpec
where
    H: Fn(&str) -> String,
{
    let Some(column) = column else {
        return if is_password_like(attribute) {
            WidgetSpec::new(Widget::PasswordInput)
        } else {
            WidgetSpec::new(Widget::Generic)
        };
    };

    if column.value_type() == ValueType::Boolean {
        return WidgetSpec::new(Widget::Checkbox);
    }
    if column.column_type == "text" {
        return WidgetSpec::new(Widget::Textarea).with_option("rows", OptionValue::Int(6));
    }

    let input = if is_password_like(&column.name) {
        Widget::PasswordInput
    } else {
        Widget::TextInput
    };

    let enum_values = column.enum_values();
    if !enum_values.is_empty() {
        let choices = enum_values
            .iter()
            .map(|raw| (raw.clone(), humanize(raw)))
            .collect();
        return WidgetSpec::new(Widget::DropDownList)
            .with_option("prompt", OptionValue::Str(String::new()))
            .with_choices(choices);
    }

    if column.value_type() != ValueType::String || column.size.is_none() {
        WidgetSpec::new(input)
    } else {
        WidgetSpec::new(input).with_option("maxlength", OptionValue::Bool(true))
    }
}

// Search forms never detect passwords, even without a column.
fn decide_search_field(column: Option<&ColumnSchema>) -> WidgetSpec {
    match column {
        Some(column) if column.value_type() == ValueType::Boolean => {
            WidgetSpec::new(Widget::Checkbox)
        }
        _ => WidgetSpec::new(Widget::Generic),
    }
}

/// Render a widget decision as an active-field expression
pub fn render_field(attribute: &str, spec: &WidgetSpec, formatter: &dyn SyntaxFormatter) -> String {
    let field = formatter.active_field(attribute);
    let Some(method) = spec.widget.method() else {
        return field;
    };

    let mut args = Vec::new();
    if let Some(choices) = &spec.choices {
        let entries: Vec<String> = choices
            .iter()
            .map(|(raw, label)| formatter.association(raw, &formatter.quote(label)))
            .collect();
        args.push(formatter.mapping(&entries));
    }
    if !spec.options.is_empty() {
        let entries: Vec<String> = spec
            .options
            .iter()
            .map(|(name, value)| formatter.association(name, &value.literal(formatter)))
            .collect();
        args.push(formatter.mapping(&entries));
    }

    formatter.method_call(&field, method, &args)
}
