use crate::fields::{decide_field, render_field, FieldContext, WidgetSpec};
use crate::inflector;
use crate::params;
use crate::syntax::Syntax;
use crate::templates::{self, TemplateEngine};
use crate::writer::CodeFile;
use crudkit_core::specs::spec::{class_basename, normalize_class};
use crudkit_core::{ColumnSchema, CoreError, ModelSpec, SchemaProvider, ValueType};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use tera::Context;

pub const DEFAULT_BASE_CONTROLLER: &str = "yii\\web\\Controller";

/// Columns shown un-commented in the index grid and the search form
const VISIBLE_COLUMNS: usize = 5;

static CLASS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\\]+$").expect("class name regex should be valid"));

/// Parameters of one generation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub model_class: String,
    pub controller_class: String,
    #[serde(default)]
    pub search_model_class: Option<String>,
    #[serde(default = "default_base_controller")]
    pub base_controller_class: String,
    #[serde(default)]
    pub syntax: Syntax,
    /// Directory receiving the views; defaults to `<output_root>/views/<controller-id>`
    #[serde(default)]
    pub view_path: Option<PathBuf>,
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

fn default_base_controller() -> String {
    DEFAULT_BASE_CONTROLLER.to_string()
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

impl GeneratorOptions {
    pub fn new(model_class: impl Into<String>, controller_class: impl Into<String>) -> Self {
        Self {
            model_class: model_class.into(),
            controller_class: controller_class.into(),
            search_model_class: None,
            base_controller_class: default_base_controller(),
            syntax: Syntax::default(),
            view_path: None,
            output_root: default_output_root(),
        }
    }

    pub fn with_search_model(mut self, class: impl Into<String>) -> Self {
        self.search_model_class = Some(class.into());
        self
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Check class names before anything is rendered
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut classes = vec![
            ("model class", &self.model_class),
            ("controller class", &self.controller_class),
            ("base controller class", &self.base_controller_class),
        ];
        if let Some(search) = &self.search_model_class {
            classes.push(("search model class", search));
        }
        for (label, class) in classes {
            if !CLASS_PATTERN.is_match(class) {
                return Err(CoreError::validation(format!(
                    "Invalid {} '{}': only word characters and backslashes are allowed",
                    label, class
                )));
            }
        }

        let mut generated = vec![("controller class", &self.controller_class)];
        if let Some(search) = &self.search_model_class {
            generated.push(("search model class", search));
        }
        for (label, class) in generated {
            if inflector::class_namespace(class).is_empty() {
                return Err(CoreError::validation(format!(
                    "Invalid {} '{}': the class name must contain a fully qualified namespace",
                    label, class
                )));
            }
        }

        let controller = class_basename(&self.controller_class);
        if controller.len() <= "Controller".len() || !controller.ends_with("Controller") {
            return Err(CoreError::validation(format!(
                "Controller class '{}' must end with 'Controller'",
                self.controller_class
            )));
        }

        if let Some(search) = &self.search_model_class {
            if normalize_class(search) == normalize_class(&self.model_class) {
                return Err(CoreError::validation(
                    "Search model class must differ from the model class",
                ));
            }
        }

        Ok(())
    }
}

/// One line of a grid or detail listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewEntry {
    pub code: String,
    pub active: bool,
}

/// Widget decisions for one attribute, as reported by `inspect`
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub attribute: String,
    pub has_column: bool,
    pub form: WidgetSpec,
    pub form_code: String,
    pub search: WidgetSpec,
    pub search_code: String,
}

/// Generates the controller, search model and views for one model
pub struct CrudGenerator<'a> {
    schema: &'a dyn SchemaProvider,
    model: &'a ModelSpec,
    options: &'a GeneratorOptions,
    engine: TemplateEngine,
}

impl<'a> CrudGenerator<'a> {
    pub fn new(schema: &'a dyn SchemaProvider, options: &'a GeneratorOptions) -> Result<Self, CoreError> {
        options.validate()?;

        let model = schema
            .model(&options.model_class)
            .ok_or_else(|| CoreError::unknown_model(normalize_class(&options.model_class)))?;
        if model.primary_keys().is_empty() {
            return Err(CoreError::invalid_key_set(&model.class));
        }

        Ok(Self {
            schema,
            model,
            options,
            engine: TemplateEngine::new()?,
        })
    }

    pub fn model(&self) -> &ModelSpec {
        self.model
    }

    /// Render every file of the selected template set
    pub fn generate(&self) -> Result<Vec<CodeFile>, CoreError> {
        let context = self.build_context()?;
        let syntax = self.options.syntax;

        let mut files = vec![CodeFile::new(
            self.class_file(&self.options.controller_class),
            self.engine.render(templates::CONTROLLER, &context)?,
        )?];

        if let Some(search_class) = &self.options.search_model_class {
            files.push(CodeFile::new(
                self.class_file(search_class),
                self.engine.render(templates::SEARCH, &context)?,
            )?);
        }

        let view_path = self.view_path();
        for view in templates::VIEWS {
            if view == "_search" && self.options.search_model_class.is_none() {
                continue;
            }
            let content = self
                .engine
                .render(&templates::view_template(syntax, view), &context)?;
            let path = view_path.join(format!("{}.{}", view, syntax.file_extension()));
            tracing::debug!("Rendered view {}", path.display());
            files.push(CodeFile::new(path, content)?);
        }

        tracing::info!(
            "Generated {} file(s) for {} using the '{}' template set",
            files.len(),
            self.model.class,
            syntax
        );
        Ok(files)
    }

    /// Active-field expression for the create/update form
    pub fn generate_active_field(&self, attribute: &str) -> String {
        let spec = self.decide(attribute, FieldContext::Form);
        render_field(attribute, &spec, self.options.syntax.formatter())
    }

    /// Active-field expression for the search form
    pub fn generate_active_search_field(&self, attribute: &str) -> String {
        let spec = self.decide(attribute, FieldContext::Search);
        render_field(attribute, &spec, self.options.syntax.formatter())
    }

    fn decide(&self, attribute: &str, context: FieldContext) -> WidgetSpec {
        let column = self.schema.column(&self.model.class, attribute);
        decide_field(attribute, column, context)
    }

    /// Route parameters identifying a model instance
    pub fn generate_url_params(&self, syntax: Syntax) -> Result<String, CoreError> {
        params::url_params(
            &self.model.primary_keys(),
            syntax,
            self.model.is_document_store(),
        )
        .map_err(|e| match e {
            CoreError::InvalidKeySet { .. } => CoreError::invalid_key_set(&self.model.class),
            other => other,
        })
    }

    pub fn generate_action_params(&self) -> String {
        params::action_params(&self.model.primary_keys())
    }

    /// `@param` lines documenting the action arguments
    pub fn generate_action_param_comments(&self) -> Vec<String> {
        let keys = self.model.primary_keys();
        let type_of = |key: &str| {
            self.model
                .column(key)
                .map(|c| c.value_type().as_str())
                .unwrap_or("string")
        };

        match keys.as_slice() {
            [key] => vec![format!("@param {} ${}", type_of(key), params::SINGLE_KEY_PARAM)],
            _ => keys
                .iter()
                .map(|key| format!("@param {} ${}", type_of(key), key))
                .collect(),
        }
    }

    /// Controller id derived from the controller class: `PostCommentController` -> `post-comment`
    pub fn controller_id(&self) -> String {
        let basename = class_basename(&self.options.controller_class);
        inflector::camel2id(basename.strip_suffix("Controller").unwrap_or(basename))
    }

    pub fn view_path(&self) -> PathBuf {
        self.options.view_path.clone().unwrap_or_else(|| {
            self.options
                .output_root
                .join("views")
                .join(self.controller_id())
        })
    }

    fn class_file(&self, class: &str) -> PathBuf {
        self.options.output_root.join(inflector::class_to_path(class))
    }

    /// Attribute used as the human readable title of a record
    pub fn name_attribute(&self) -> String {
        self.model
            .attribute_names()
            .into_iter()
            .find(|name| matches!(*name, "name" | "title"))
            .map(str::to_string)
            .unwrap_or_else(|| self.model.primary_keys()[0].clone())
    }

    /// Attributes rendered in the create/update form.
    ///
    /// Columns come first in table order, filtered by the declared attributes
    /// when there are any; declared attributes without a column follow.
    pub fn form_attributes(&self) -> Vec<&str> {
        if !self.model.has_schema() {
            return self.model.attribute_names();
        }

        let columns = self.model.column_names();
        if self.model.attributes.is_empty() {
            return columns;
        }

        let declared = |name: &str| self.model.attributes.iter().any(|a| a == name);
        let mut attributes: Vec<&str> = columns.iter().copied().filter(|c| declared(*c)).collect();
        attributes.extend(
            self.model
                .attributes
                .iter()
                .map(String::as_str)
                .filter(|a| !columns.contains(a)),
        );
        attributes
    }

    /// Attributes the search model filters on
    pub fn search_attributes(&self) -> Vec<&str> {
        if self.model.has_schema() {
            self.model.column_names()
        } else {
            self.model.attribute_names()
        }
    }

    /// Validation rules of the search model, one per group of column types
    pub fn generate_search_rules(&self) -> Vec<String> {
        let quote = |s: &str| Syntax::Php.formatter().quote(s);
        let mut groups: Vec<(&str, Vec<String>)> = Vec::new();

        for attribute in self.search_attributes() {
            let rule = self
                .model
                .column(attribute)
                .map(search_rule_type)
                .unwrap_or("safe");
            match groups.iter_mut().find(|(r, _)| *r == rule) {
                Some((_, names)) => names.push(quote(attribute)),
                None => groups.push((rule, vec![quote(attribute)])),
            }
        }

        groups
            .into_iter()
            .map(|(rule, names)| format!("[[{}], {}]", names.join(", "), quote(rule)))
            .collect()
    }

    /// Filter conditions of the search model: `(hash conditions, like conditions)`
    pub fn generate_search_conditions(&self) -> (Vec<String>, Vec<String>) {
        let php = Syntax::Php.formatter();
        let mut hash = Vec::new();
        let mut like = Vec::new();

        for attribute in self.search_attributes() {
            let value = format!("$this->{}", attribute);
            match self.model.column(attribute) {
                Some(column) if is_exact_match_column(column) => {
                    hash.push(php.association(attribute, &value));
                }
                _ => like.push(format!("['like', {}, {}]", php.quote(attribute), value)),
            }
        }

        (hash, like)
    }

    fn column_entry(&self, attribute: &str) -> String {
        let format = self
            .model
            .column(attribute)
            .map(column_format)
            .unwrap_or("text");
        let quote = |s: &str| self.options.syntax.formatter().quote(s);
        if format == "text" {
            quote(attribute)
        } else {
            quote(&format!("{}:{}", attribute, format))
        }
    }

    fn listed_attributes(&self) -> Vec<&str> {
        if self.model.has_schema() {
            self.model.column_names()
        } else {
            self.model.attribute_names()
        }
    }

    pub fn grid_columns(&self) -> Vec<ViewEntry> {
        self.listed_attributes()
            .into_iter()
            .enumerate()
            .map(|(i, attribute)| ViewEntry {
                code: self.column_entry(attribute),
                active: i < VISIBLE_COLUMNS,
            })
            .collect()
    }

    pub fn detail_attributes(&self) -> Vec<String> {
        self.listed_attributes()
            .into_iter()
            .map(|attribute| self.column_entry(attribute))
            .collect()
    }

    /// Per-attribute widget decisions for both forms
    pub fn field_reports(&self) -> Vec<FieldReport> {
        let formatter = self.options.syntax.formatter();
        self.form_attributes()
            .into_iter()
            .map(|attribute| {
                let form = self.decide(attribute, FieldContext::Form);
                let search = self.decide(attribute, FieldContext::Search);
                FieldReport {
                    attribute: attribute.to_string(),
                    has_column: self.model.column(attribute).is_some(),
                    form_code: render_field(attribute, &form, formatter),
                    search_code: render_field(attribute, &search, formatter),
                    form,
                    search,
                }
            })
            .collect()
    }

    fn build_context(&self) -> Result<Context, CoreError> {
        let options = self.options;
        let syntax = options.syntax;
        let formatter = syntax.formatter();

        let model_class = normalize_class(&options.model_class);
        let model_basename = class_basename(model_class);
        let model_title = inflector::camel2words(model_basename);
        let controller_class = normalize_class(&options.controller_class);
        let base_controller = normalize_class(&options.base_controller_class);

        let mut context = Context::new();
        context.insert("model_class", model_class);
        context.insert("model_basename", model_basename);
        context.insert("model_title_plural", &inflector::pluralize(&model_title));
        context.insert("model_title", &model_title);
        context.insert("css_id", &inflector::camel2id(model_basename));
        context.insert("controller_namespace", inflector::class_namespace(controller_class));
        context.insert("controller_basename", class_basename(controller_class));
        context.insert("controller_id", &self.controller_id());
        context.insert("base_controller_class", base_controller);
        context.insert("base_controller_basename", class_basename(base_controller));
        context.insert("view_suffix", syntax.render_suffix());

        context.insert("action_params", &self.generate_action_params());
        context.insert("action_param_comments", &self.generate_action_param_comments());
        context.insert("find_condition", &params::find_condition(&self.model.primary_keys()));
        context.insert("url_params", &self.generate_url_params(syntax)?);
        context.insert("controller_url_params", &self.generate_url_params(Syntax::Php)?);
        context.insert("name_access", &formatter.access(&self.name_attribute()));

        let form_fields: Vec<String> = self
            .form_attributes()
            .into_iter()
            .map(|attribute| formatter.echo(&self.generate_active_field(attribute)))
            .collect();
        context.insert("form_fields", &form_fields);
        context.insert("grid_columns", &self.grid_columns());
        context.insert("detail_attributes", &self.detail_attributes());

        match &options.search_model_class {
            Some(search_class) => {
                self.insert_search_context(&mut context, normalize_class(search_class), model_basename)
            }
            None => context.insert("search_model_class", &None::<String>),
        }

        Ok(context)
    }

    fn insert_search_context(&self, context: &mut Context, search_class: &str, model_basename: &str) {
        let formatter = self.options.syntax.formatter();
        let search_basename = class_basename(search_class);
        let clashes = search_basename == model_basename;

        context.insert("search_model_class", search_class);
        context.insert("search_model_basename", search_basename);
        context.insert("search_model_namespace", inflector::class_namespace(search_class));

        // Controller side: alias the search model when both share a basename
        let (search_use, search_name) = if clashes {
            let alias = format!("{}Search", search_basename);
            (format!("{} as {}", search_class, alias), alias)
        } else {
            (search_class.to_string(), search_basename.to_string())
        };
        context.insert("search_model_use", &search_use);
        context.insert("search_model_name", &search_name);

        // Search model side: alias the parent model instead
        let model_alias = clashes.then(|| format!("{}Model", model_basename));
        context.insert(
            "model_reference",
            model_alias.as_deref().unwrap_or(model_basename),
        );
        context.insert("model_alias", &model_alias);

        let search_fields: Vec<String> = self
            .search_attributes()
            .into_iter()
            .enumerate()
            .map(|(i, attribute)| {
                let field = self.generate_active_search_field(attribute);
                if i < VISIBLE_COLUMNS {
                    formatter.echo(&field)
                } else {
                    formatter.commented_echo(&field)
                }
            })
            .collect();
        context.insert("search_fields", &search_fields);
        context.insert("search_rules", &self.generate_search_rules());

        let (hash_conditions, like_conditions) = self.generate_search_conditions();
        context.insert("hash_conditions", &hash_conditions);
        context.insert("like_conditions", &like_conditions);
    }
}

/// Display format of a column in grid and detail views
pub fn column_format(column: &ColumnSchema) -> &'static str {
    let name = column.name.to_lowercase();
    let value_type = column.value_type();
    if value_type == ValueType::Boolean {
        "boolean"
    } else if column.column_type == "text" {
        "ntext"
    } else if value_type == ValueType::Integer && name.contains("time") {
        "datetime"
    } else if name.contains("email") {
        "email"
    } else if name.contains("url") {
        "url"
    } else {
        "text"
    }
}

fn search_rule_type(column: &ColumnSchema) -> &'static str {
    match column.column_type.as_str() {
        "tinyint" | "smallint" | "integer" | "bigint" | "pk" | "bigpk" => "integer",
        "boolean" => "boolean",
        "float" | "double" | "decimal" | "money" => "number",
        _ => "safe",
    }
}

fn is_exact_match_column(column: &ColumnSchema) -> bool {
    matches!(
        column.column_type.as_str(),
        "tinyint"
            | "smallint"
            | "integer"
            | "bigint"
            | "pk"
            | "bigpk"
            | "boolean"
            | "float"
            | "double"
            | "decimal"
            | "money"
            | "date"
            | "time"
            | "datetime"
            | "timestamp"
    )
}
