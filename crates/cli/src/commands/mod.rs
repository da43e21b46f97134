pub mod generate;
pub mod inspect;

use crudkit_core::{CoreError, ModelCatalog};
use std::path::Path;

/// Load the model catalog a command operates on
pub fn load_catalog(schema: &Path) -> Result<ModelCatalog, CoreError> {
    if !schema.exists() {
        return Err(CoreError::validation(format!(
            "Model catalog '{}' does not exist",
            schema.display()
        )));
    }
    ModelCatalog::load(schema)
}
