mod commands;
mod logging;

use clap::{Parser, Subcommand};
use commands::*;
use crudkit_codegen::Syntax;
use crudkit_core::CoreError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crudkit")]
#[command(about = "Scaffold CRUD controllers, search models and views for Yii models")]
#[command(version)]
struct Cli {
    /// Show debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the controller, search model and views for a model
    Generate {
        /// Model catalog (YAML)
        #[arg(long)]
        schema: PathBuf,

        /// Fully qualified model class, e.g. app\models\Post
        #[arg(long)]
        model_class: String,

        /// Fully qualified controller class, e.g. app\controllers\PostController
        #[arg(long)]
        controller_class: String,

        /// Search model class; the search form and filters are skipped without it
        #[arg(long)]
        search_model_class: Option<String>,

        /// Class the controller extends
        #[arg(long, default_value = crudkit_codegen::generator::DEFAULT_BASE_CONTROLLER)]
        base_controller_class: String,

        /// Template set (default or twig)
        #[arg(long, default_value = "default")]
        template: Syntax,

        /// Directory receiving the views
        #[arg(long)]
        view_path: Option<PathBuf>,

        /// Root directory class files are written under
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Replace files that differ from the generated content
        #[arg(long)]
        overwrite: bool,

        /// Only report what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the widget and route parameter decisions for a model as JSON
    Inspect {
        /// Model catalog (YAML)
        #[arg(long)]
        schema: PathBuf,

        /// Fully qualified model class
        #[arg(long)]
        model_class: String,

        /// Template set used to render field expressions
        #[arg(long, default_value = "default")]
        template: Syntax,
    },
}

fn main() -> Result<(), CoreError> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            schema,
            model_class,
            controller_class,
            search_model_class,
            base_controller_class,
            template,
            view_path,
            out,
            overwrite,
            dry_run,
        } => {
            let options = generate::build_options(
                model_class,
                controller_class,
                search_model_class,
                base_controller_class,
                template,
                view_path,
                out,
            );
            generate::run(&schema, &options, overwrite, dry_run)?;
        }
        Commands::Inspect {
            schema,
            model_class,
            template,
        } => {
            inspect::run(&schema, &model_class, template)?;
        }
    }

    Ok(())
}
