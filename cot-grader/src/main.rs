//! CoT Grader CLI

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cot_grader::{
    adapters::{create_adapter, AnswerAdapter},
    config::Config,
    items::load_items_from_file,
    reporting::{grade_all, load_responses_from_file, print_console_verdicts, write_graded_jsonl},
};

#[derive(Parser)]
#[command(name = "cot-grader")]
#[command(about = "Grade chain-of-thought benchmark answers against ground truth")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured datasets
    ListDatasets,

    /// Show item counts per category for a dataset
    ListItems {
        /// Dataset name from the configuration
        #[arg(short, long)]
        dataset: String,
    },

    /// Write the system prompt and every item prompt to text files
    DumpPrompts {
        /// Dataset name from the configuration
        #[arg(short, long)]
        dataset: String,

        /// Output directory for prompt files
        #[arg(short, long, default_value = "results/prompts")]
        output: PathBuf,
    },

    /// Grade a single candidate answer
    Verdict {
        /// Dataset name from the configuration
        #[arg(short, long)]
        dataset: String,

        /// Item index
        #[arg(short, long)]
        index: usize,

        /// Candidate answer (omit to grade an absent answer)
        #[arg(long)]
        candidate: Option<String>,
    },

    /// Grade a JSON Lines file of model responses
    Grade {
        /// Dataset name from the configuration
        #[arg(short, long)]
        dataset: String,

        /// Responses file, one `{"index", "response"}` object per line
        #[arg(short, long)]
        responses: PathBuf,

        /// Output file for graded items (JSON Lines)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate sample configuration
    InitConfig {
        /// Output path for configuration file
        #[arg(short, long, default_value = "config/datasets.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("cot_grader=debug,info")
    } else {
        EnvFilter::new("cot_grader=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(),
    };

    match cli.command {
        Commands::ListDatasets => list_datasets(&config),
        Commands::ListItems { dataset } => list_items(&config, &dataset)?,
        Commands::DumpPrompts { dataset, output } => dump_prompts(&config, &dataset, output)?,
        Commands::Verdict {
            dataset,
            index,
            candidate,
        } => single_verdict(&config, &dataset, index, candidate.as_deref())?,
        Commands::Grade {
            dataset,
            responses,
            output,
        } => grade(&config, &dataset, responses, output)?,
        Commands::InitConfig { output } => init_config(output)?,
    }

    Ok(())
}

fn open_dataset(
    config: &Config,
    name: &str,
) -> Result<Arc<dyn AnswerAdapter>, Box<dyn std::error::Error>> {
    let dataset = config.dataset(name)?;
    let items = load_items_from_file(&dataset.path)?;
    Ok(create_adapter(dataset.family, items))
}

fn list_datasets(config: &Config) {
    println!("Configured Datasets ({}):", config.datasets.len());
    println!("{:-<60}", "");

    for (name, dataset) in &config.datasets {
        let state = if dataset.enabled { "" } else { " (disabled)" };
        println!("  {} | {} | {}{}", name, dataset.family, dataset.path, state);
    }
}

fn list_items(config: &Config, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = open_dataset(config, name)?;
    let items = adapter.items();

    let multiple_choice = (0..adapter.len())
        .map(|index| adapter.is_multiple_choice(index))
        .collect::<Result<Vec<bool>, _>>()?
        .into_iter()
        .filter(|mc| *mc)
        .count();

    println!("{} ({}): {} items", name, adapter.family(), items.len());
    println!("Multiple-choice: {}", multiple_choice);
    println!("{:-<60}", "");

    let mut start = 0;
    for (category, count) in items.categories() {
        let range = if *count == 0 {
            "-".to_string()
        } else {
            format!("{}..={}", start, start + count - 1)
        };
        println!("  {} | {} | {}", category, count, range);
        start += count;
    }

    Ok(())
}

fn dump_prompts(
    config: &Config,
    name: &str,
    output_dir: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = open_dataset(config, name)?;

    if adapter.is_empty() {
        eprintln!("Error: No items to dump");
        std::process::exit(1);
    }

    std::fs::create_dir_all(&output_dir)?;

    println!("=== Dumping Prompts ===");
    println!("Dataset: {} ({})", name, adapter.family());
    println!("Items:   {}", adapter.len());
    println!("Output:  {}", output_dir.display());
    println!();

    std::fs::write(output_dir.join("system.txt"), adapter.system_prompt())?;

    for index in 0..adapter.len() {
        let prompt = adapter.prompt(index)?;
        let reference = adapter.reference_answer(index)?;
        let filename = format!("{}-{:05}.txt", name.to_lowercase(), index);

        let content = format!(
            "=== Prompt: {} #{} ===\n\
             Family:    {}\n\
             Reference: {}\n\
             {}\n\
             === PROMPT ===\n\n\
             {}",
            name,
            index,
            adapter.family(),
            reference,
            "=".repeat(50),
            prompt,
        );
        std::fs::write(output_dir.join(&filename), content)?;
    }

    println!("Done. {} files written to {}", adapter.len() + 1, output_dir.display());
    Ok(())
}

fn single_verdict(
    config: &Config,
    name: &str,
    index: usize,
    candidate: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = open_dataset(config, name)?;
    let reference = adapter.reference_answer(index)?;
    let verdict = adapter.verdict(candidate, &reference, index)?;
    println!("{}", verdict);
    Ok(())
}

fn grade(
    config: &Config,
    name: &str,
    responses_path: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let adapter = open_dataset(config, name)?;
    let responses = load_responses_from_file(&responses_path)?;
    tracing::info!("Grading {} responses from {}", responses.len(), responses_path.display());

    let graded = grade_all(adapter.as_ref(), name, &responses)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            write_graded_jsonl(&graded, &path)?;
            println!("Graded items written to: {}", path.display());
        }
        None => print_console_verdicts(&graded),
    }

    Ok(())
}

fn init_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // Ensure parent directory exists
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    config.save_toml(&output)?;
    println!("Configuration written to: {}", output.display());
    Ok(())
}
