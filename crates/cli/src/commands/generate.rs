use super::load_catalog;
use crudkit_codegen::{generate_and_write, CodeFile, CrudGenerator, FileOperation, GeneratorOptions, Syntax};
use crudkit_core::CoreError;
use std::path::{Path, PathBuf};

pub fn build_options(
    model_class: String,
    controller_class: String,
    search_model_class: Option<String>,
    base_controller_class: String,
    syntax: Syntax,
    view_path: Option<PathBuf>,
    output_root: PathBuf,
) -> GeneratorOptions {
    GeneratorOptions {
        model_class,
        controller_class,
        search_model_class,
        base_controller_class,
        syntax,
        view_path,
        output_root,
    }
}

/// Generate the CRUD files and print one status line per file
pub fn run(schema: &Path, options: &GeneratorOptions, overwrite: bool, dry_run: bool) -> Result<(), CoreError> {
    for line in execute(schema, options, overwrite, dry_run)? {
        println!("{}", line);
    }
    Ok(())
}

fn execute(
    schema: &Path,
    options: &GeneratorOptions,
    overwrite: bool,
    dry_run: bool,
) -> Result<Vec<String>, CoreError> {
    let catalog = load_catalog(schema)?;

    let results: Vec<(CodeFile, bool)> = if dry_run {
        CrudGenerator::new(&catalog, options)?
            .generate()?
            .into_iter()
            .map(|file| {
                let would_write = match file.operation {
                    FileOperation::Create => true,
                    FileOperation::Overwrite => overwrite,
                    FileOperation::Skip => false,
                };
                (file, would_write)
            })
            .collect()
    } else {
        generate_and_write(&catalog, options, overwrite)?
    };

    let written = results.iter().filter(|(_, written)| *written).count();
    tracing::info!(
        "{} {} of {} file(s)",
        if dry_run { "Would write" } else { "Wrote" },
        written,
        results.len()
    );

    Ok(results
        .iter()
        .map(|(file, written)| format!("{:>10}  {}", status(file.operation, *written), file.path.display()))
        .collect())
}

fn status(operation: FileOperation, written: bool) -> String {
    match operation {
        FileOperation::Overwrite if !written => "skip".to_string(),
        other => other.to_string(),
    }
}
