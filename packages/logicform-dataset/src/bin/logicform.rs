//! Logicform CLI
//!
//! # Usage
//!
//! ```bash
//! # Convert every question of a container
//! cargo run --bin logicform --release -- convert val_balanced_questions.json
//!
//! # Compact connectives, rayon pool, JSON lines
//! cargo run --bin logicform --release -- convert questions.json --preset compact --parallel --format json
//!
//! # One question with its records and nodes
//! cargo run --bin logicform -- show questions.json 02930152
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use logicform_dataset::{Dataset, Question};
use logicform_ir::config::{ConverterConfig, Preset, ValidatedConfig};
use logicform_ir::{BatchConverter, BatchItem, ConvertUseCase, ConvertUseCaseImpl, QuestionOutcome};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logicform")]
#[command(about = "Convert semantic-parse operation records into logical forms", long_about = None)]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every question of a container
    Convert {
        /// Question container (JSON)
        path: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Connective preset (ignored when --config is given)
        #[arg(long, default_value = "canonical", value_parser = parse_preset)]
        preset: Preset,

        /// Convert on a worker pool
        #[arg(long)]
        parallel: bool,

        /// Abort on the first failing question
        #[arg(long)]
        fail_fast: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show one question's records, nodes and logical form
    Show {
        /// Question container (JSON)
        path: PathBuf,

        /// Question id
        id: String,

        #[arg(long, default_value = "canonical", value_parser = parse_preset)]
        preset: Preset,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `<i>:  <question>` / `<i>:  <logical form>`
    Text,
    /// One JSON object per question
    Json,
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    Preset::from_str(s)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            path,
            config,
            preset,
            parallel,
            fail_fast,
            format,
        } => {
            let config = load_config(config.as_deref(), preset)?;
            convert_dataset(&path, &config, parallel, fail_fast, format)?;
        }
        Commands::Show { path, id, preset } => {
            let config = ConverterConfig::preset(preset).build()?;
            show_question(&path, &id, &config)?;
        }
    }

    Ok(())
}

/// Logs to stderr; results own stdout
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, preset: Preset) -> Result<ValidatedConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => ConverterConfig::from_yaml(path)?,
        None => ConverterConfig::preset(preset).build()?,
    })
}

fn convert_dataset(
    path: &Path,
    config: &ValidatedConfig,
    parallel: bool,
    fail_fast: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::from_path(path)?;

    let mut batch = config.batch().clone();
    batch.parallel |= parallel;
    batch.skip_failures &= !fail_fast;
    let converter = BatchConverter::with_usecase(
        Box::new(ConvertUseCaseImpl::new(config.connectives().clone())),
        batch,
    );

    let items: Vec<BatchItem<'_>> = dataset
        .iter()
        .map(|q| BatchItem::new(&q.id, &q.semantic))
        .collect();
    let report = converter.convert(&items)?;

    for (question, outcome) in dataset.iter().zip(&report.outcomes) {
        match format {
            OutputFormat::Text => print_text(question, outcome),
            OutputFormat::Json => print_json(question, outcome),
        }
    }

    if report.failed > 0 {
        eprintln!(
            "{} of {} questions failed to convert",
            report.failed,
            report.total()
        );
    }
    Ok(())
}

fn print_text(question: &Question, outcome: &QuestionOutcome) {
    println!("{}:  {}", outcome.index, question.question);
    if let Some(form) = outcome.logical_form() {
        println!("{}:  {}", outcome.index, form);
    }
}

fn print_json(question: &Question, outcome: &QuestionOutcome) {
    let line = match &outcome.result {
        Ok(form) => json!({
            "index": outcome.index,
            "id": outcome.id,
            "question": question.question,
            "logical_form": form,
        }),
        Err(err) => json!({
            "index": outcome.index,
            "id": outcome.id,
            "question": question.question,
            "error": {
                "kind": err.kind.as_str(),
                "message": err.message,
                "record": err.record,
            },
        }),
    };
    println!("{}", line);
}

fn show_question(
    path: &Path,
    id: &str,
    config: &ValidatedConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::from_path(path)?;
    let question = dataset.get(id)?;
    let usecase = ConvertUseCaseImpl::new(config.connectives().clone());

    println!("{}:  {}", question.id, question.question);
    println!("\nRecords:");
    for (i, record) in question.semantic.iter().enumerate() {
        println!(
            "  [{}] {:<18} {:<32} {:?}",
            i, record.operation, record.argument, record.dependencies
        );
    }

    let run = usecase.compile_run(&question.semantic)?;
    println!("\nNodes:");
    for node in run.graph().iter() {
        println!(
            "  #{:<3} {:<18} {}",
            node.id,
            node.kind.name(),
            node.rendered()
        );
    }

    println!("\nLogical form:");
    println!("  {}", usecase.convert(&question.semantic)?);
    if let Some(answer) = &question.full_answer {
        println!("\nAnswer:\n  {}", answer);
    }
    Ok(())
}
