use thiserror::Error;

/// Core error type for crudkit
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Model '{class}' is not defined in the catalog")]
    UnknownModel { class: String },

    #[error("{}", key_set_message(.model.as_deref()))]
    InvalidKeySet { model: Option<String> },

    #[error("Template error: {message}")]
    Template { message: String },
}

impl CoreError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    pub fn unknown_model(class: impl Into<String>) -> Self {
        Self::UnknownModel {
            class: class.into(),
        }
    }

    pub fn invalid_key_set(model: impl Into<String>) -> Self {
        Self::InvalidKeySet {
            model: Some(model.into()),
        }
    }

    /// Empty primary key list with no model to attribute it to
    pub fn empty_key_set() -> Self {
        Self::InvalidKeySet { model: None }
    }

    /// Check if the error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if the error aborts generation for a single model only
    pub fn is_model_error(&self) -> bool {
        matches!(self, Self::InvalidKeySet { .. } | Self::UnknownModel { .. })
    }
}

fn key_set_message(model: Option<&str>) -> String {
    match model {
        Some(model) => format!("Model '{}' does not declare a primary key", model),
        None => "Primary key list is empty".to_string(),
    }
}
