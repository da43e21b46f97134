use super::spec::{ColumnSchema, ModelCatalog, ModelSpec};

/// Source of model and table metadata for the generators.
///
/// Lookups are side-effect free; a missing model or column is reported as
/// `None` rather than an error.
pub trait SchemaProvider {
    fn model(&self, class: &str) -> Option<&ModelSpec>;

    /// Whether a live table schema is available for the model
    fn has_schema(&self, class: &str) -> bool {
        self.model(class).is_some_and(ModelSpec::has_schema)
    }

    fn column(&self, class: &str, attribute: &str) -> Option<&ColumnSchema> {
        self.model(class).and_then(|m| m.column(attribute))
    }
}

impl SchemaProvider for ModelCatalog {
    fn model(&self, class: &str) -> Option<&ModelSpec> {
        self.find(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::spec::TableSchema;

    fn catalog() -> ModelCatalog {
        let mut post = ModelSpec::new("app\\models\\Post");
        post.table = Some(TableSchema {
            name: "post".to_string(),
            columns: vec![ColumnSchema::new("id", "integer").primary()],
        });
        ModelCatalog {
            models: vec![post, ModelSpec::new("app\\models\\LoginForm")],
        }
    }

    #[test]
    fn test_provider_lookups() {
        let catalog = catalog();
        assert!(catalog.has_schema("app\\models\\Post"));
        assert!(!catalog.has_schema("app\\models\\LoginForm"));
        assert!(!catalog.has_schema("app\\models\\Missing"));
        assert!(catalog.column("app\\models\\Post", "id").is_some());
        assert!(catalog.column("app\\models\\Post", "title").is_none());
        assert!(catalog.column("app\\models\\LoginForm", "id").is_none());
    }
}
