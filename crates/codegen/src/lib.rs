//! CRUD scaffolding for Yii-style PHP applications.
//!
//! The two decision engines live in [`fields`] (which widget an attribute
//! gets) and [`params`] (how a model instance is identified in routes).
//! [`CrudGenerator`] feeds their output into the template sets and returns
//! the files to write.

pub mod fields;
pub mod generator;
pub mod inflector;
pub mod params;
pub mod syntax;
pub mod templates;
pub mod writer;

pub use fields::{decide_field, is_password_like, render_field, FieldContext, Widget, WidgetSpec};
pub use generator::{CrudGenerator, FieldReport, GeneratorOptions};
pub use params::url_params;
pub use syntax::{Syntax, SyntaxFormatter};
pub use writer::*;

use crudkit_core::{CoreError, SchemaProvider};

/// Generate all files for one model and write them below the output root.
///
/// Returns the generated files together with whether each one was written.
pub fn generate_and_write(
    schema: &dyn SchemaProvider,
    options: &GeneratorOptions,
    overwrite: bool,
) -> Result<Vec<(CodeFile, bool)>, CoreError> {
    let generator = CrudGenerator::new(schema, options)?;
    let writer = CodeWriter::new();

    generator
        .generate()?
        .into_iter()
        .map(|file| {
            let written = writer.write(&file, overwrite)?;
            Ok::<_, CoreError>((file, written))
        })
        .collect()
}
