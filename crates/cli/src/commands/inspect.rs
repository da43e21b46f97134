use super::load_catalog;
use crudkit_codegen::{CrudGenerator, FieldReport, GeneratorOptions, Syntax};
use crudkit_core::{Backend, CoreError};
use serde::Serialize;
use std::path::Path;

/// Decisions the generator would take for one model
#[derive(Debug, Serialize)]
pub struct ModelReport {
    pub model: String,
    pub backend: Backend,
    pub primary_keys: Vec<String>,
    pub url_params: String,
    pub action_params: String,
    pub fields: Vec<FieldReport>,
}

pub fn run(schema: &Path, model_class: &str, syntax: Syntax) -> Result<(), CoreError> {
    let report = build_report(schema, model_class, syntax)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_report(schema: &Path, model_class: &str, syntax: Syntax) -> Result<ModelReport, CoreError> {
    let catalog = load_catalog(schema)?;

    // Only the model matters here; the controller name is a placeholder
    let options = GeneratorOptions::new(model_class, "app\\controllers\\InspectController").with_syntax(syntax);
    let generator = CrudGenerator::new(&catalog, &options)?;
    let model = generator.model();

    Ok(ModelReport {
        model: model.class.clone(),
        backend: model.backend,
        primary_keys: model.primary_keys(),
        url_params: generator.generate_url_params(syntax)?,
        action_params: generator.generate_action_params(),
        fields: generator.field_reports(),
    })
}
