use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog of model descriptions loaded from a YAML document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

impl ModelCatalog {
    /// Create a catalog from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Convert the catalog to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&content)?;
        tracing::debug!(
            "Loaded {} model(s) from {}",
            catalog.models.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Find a model by its fully qualified class name
    pub fn find(&self, class: &str) -> Option<&ModelSpec> {
        let class = normalize_class(class);
        self.models
            .iter()
            .find(|m| normalize_class(&m.class) == class)
    }
}

/// Storage backend family of a model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sql,
    /// Document database; identifiers are not plain strings
    Document,
}

/// Description of a single model class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Fully qualified class name, e.g. `app\models\Post`
    pub class: String,
    #[serde(default)]
    pub backend: Backend,
    /// Safe attributes, including virtual ones that have no column
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Live table schema; absent when the model has no backing table
    #[serde(default)]
    pub table: Option<TableSchema>,
}

impl ModelSpec {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            backend: Backend::Sql,
            attributes: Vec::new(),
            primary_key: Vec::new(),
            table: None,
        }
    }

    /// Class name without namespace
    pub fn basename(&self) -> &str {
        class_basename(&self.class)
    }

    pub fn has_schema(&self) -> bool {
        self.table.is_some()
    }

    pub fn is_document_store(&self) -> bool {
        self.backend == Backend::Document
    }

    /// Look up the column backing an attribute
    pub fn column(&self, attribute: &str) -> Option<&ColumnSchema> {
        self.table.as_ref().and_then(|t| t.column(attribute))
    }

    /// Declared attributes, or the column names when none are declared
    pub fn attribute_names(&self) -> Vec<&str> {
        if !self.attributes.is_empty() {
            return self.attributes.iter().map(String::as_str).collect();
        }
        self.column_names()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.table
            .as_ref()
            .map(TableSchema::column_names)
            .unwrap_or_default()
    }

    /// Primary key attributes in declaration order.
    ///
    /// An explicit `primary_key` list wins; otherwise columns flagged `pk`
    /// are used. The result may be empty for a malformed model.
    pub fn primary_keys(&self) -> Vec<String> {
        if !self.primary_key.is_empty() {
            return self.primary_key.clone();
        }
        self.table
            .as_ref()
            .map(|t| {
                t.columns
                    .iter()
                    .filter(|c| c.pk)
                    .map(|c| c.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Value type a column maps to in generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
    Integer,
    Double,
    Resource,
    #[serde(other)]
    Other,
}

impl ValueType {
    /// Derive the value type from an abstract storage type
    pub fn from_storage_type(column_type: &str) -> Self {
        match column_type {
            "boolean" => Self::Boolean,
            "tinyint" | "smallint" | "integer" | "bigint" | "pk" | "bigpk" => Self::Integer,
            "float" | "double" => Self::Double,
            "binary" => Self::Resource,
            _ => Self::String,
        }
    }

    /// Type name used in generated doc comments
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Resource => "resource",
            Self::Other => "mixed",
        }
    }
}

/// Metadata about a physical storage column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    /// Abstract storage type, e.g. `string`, `text`, `integer`
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default, rename = "value_type", skip_serializing_if = "Option::is_none")]
    pub declared_value_type: Option<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(default)]
    pub pk: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            declared_value_type: None,
            size: None,
            enum_values: None,
            allow_null: false,
            pk: false,
            comment: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.declared_value_type = Some(value_type);
        self
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn primary(mut self) -> Self {
        self.pk = true;
        self
    }

    /// Declared value type, falling back to the one implied by the storage type
    pub fn value_type(&self) -> ValueType {
        self.declared_value_type
            .unwrap_or_else(|| ValueType::from_storage_type(&self.column_type))
    }

    /// Enumerated values; empty when the column declares none
    pub fn enum_values(&self) -> &[String] {
        self.enum_values.as_deref().unwrap_or_default()
    }
}

/// Strip the leading namespace separator from a class name
pub fn normalize_class(class: &str) -> &str {
    class.trim_start_matches('\\')
}

/// Class name without namespace
pub fn class_basename(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}
