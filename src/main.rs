use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::PathBuf;

use swimplan::config::AppConfig;
use swimplan::export;
use swimplan::logging::{self, LogLevel};
use swimplan::models::Step;
use swimplan::parser::parse_training_text;

/// swimplan - Swim Workout Shorthand CLI
///
/// Converts compact swim workout notation (e.g. `10x100m free com 20"`)
/// into structured workout data for upload to a tracking service.
#[derive(Parser)]
#[command(name = "swimplan")]
#[command(version = "0.1.0")]
#[command(about = "Swim workout shorthand parser", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse shorthand text and show a preview of the resulting plan
    Parse {
        /// Input text file (stdin if not specified)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Build the submission payload and write it to a JSON file
    Export {
        /// Input text file (stdin if not specified)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Workout identifier the payload targets
        #[arg(short, long)]
        workout_id: u64,

        /// Base template JSON file (overrides the configured one)
        #[arg(short, long)]
        base_template: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };
    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    logging::init_logging(&config.logging)?;

    match cli.command {
        Commands::Parse { file } => {
            let text = read_input(file.as_deref())?;
            let plan = parse_training_text(&text);
            warn_degenerate_steps(&plan);

            print!("{}", export::text::render_plan(&plan));
            if !plan.is_empty() {
                println!("{}", "✓ Parsed successfully".green());
            }
        }

        Commands::Export {
            file,
            output,
            workout_id,
            base_template,
        } => {
            let text = read_input(file.as_deref())?;
            let plan = parse_training_text(&text);
            warn_degenerate_steps(&plan);

            if plan.is_empty() {
                bail!("no steps parsed from input; refusing to export an empty workout");
            }

            let template = match base_template {
                Some(path) => {
                    let content = std::fs::read_to_string(&path).with_context(|| {
                        format!("Failed to read base template: {}", path.display())
                    })?;
                    serde_json::from_str(&content)
                        .with_context(|| "Base template is not valid JSON")?
                }
                None => config.load_base_template()?,
            };

            export::export_payload(workout_id, &plan, &template, &output)?;
            println!(
                "{}",
                format!(
                    "✓ Exported workout {} ({}m) to {}",
                    workout_id,
                    plan.total_distance_meters,
                    output.display()
                )
                .green()
            );
        }
    }

    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

/// Unrecognized lines parse as zero-distance steps; make that visible
/// without changing the parse itself.
fn warn_degenerate_steps(plan: &swimplan::TrainingPlan) {
    for step in plan.steps() {
        if let Step::Main {
            order,
            distance_meters: 0,
            ..
        } = step
        {
            tracing::warn!(order, "line did not match any pattern; step has zero distance");
        }
    }
}
