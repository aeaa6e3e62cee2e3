//! Knowledge-Base Format CLI
//!
//! Detects which schema a knowledge-base YAML file uses, re-encodes it,
//! and emits the demonstration documents.
//!
//! Usage:
//!   kb-format detect data/knowledge.yaml
//!   kb-format encode-demo --format flat -o flat.yaml
//!   kb-format demo

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use polyglot_schemas::config::ReportFormat;
use polyglot_schemas::{demo, detect, encode, Detection, KbConfig, SchemaFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kb-format")]
#[command(about = "Detect and encode knowledge-base YAML schemas")]
struct Cli {
    /// Config file to load (optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the schema of a YAML file
    Detect {
        file: PathBuf,

        /// Print the report as JSON regardless of config
        #[arg(long)]
        json: bool,
    },

    /// Encode the demonstration document for a schema
    EncodeDemo {
        /// Schema name or id (nested, flat, progress)
        #[arg(short, long)]
        format: SchemaFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect a file and re-encode it in the same schema
    Normalize {
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode, print and re-detect every demonstration document
    Demo,

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show {
        /// Output as TOML
        #[arg(long)]
        toml: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        #[arg(short, long, default_value = "polyglot.toml")]
        output: String,
    },

    /// Validate configuration
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let config = match KbConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: KbConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Detect { file, json } => {
            let input = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let detection =
                detect(&input).with_context(|| format!("detecting schema of {}", file.display()))?;

            let format = if json { ReportFormat::Json } else { config.output.format };
            print_report(&detection, format)?;
        }

        Commands::EncodeDemo { format, output } => {
            let bytes = encode(&demo::document(format), format)?;
            write_output(output.as_deref(), &bytes)?;
        }

        Commands::Normalize { file, output } => {
            let input = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let detection = detect(&input)?;
            info!(format = %detection.format, "normalizing");
            let bytes = encode(&detection.document, detection.format)?;
            write_output(output.as_deref(), &bytes)?;
        }

        Commands::Demo => run_demo(&config)?,

        Commands::Config { command } => run_config(command, &config)?,
    }

    Ok(())
}

fn print_report(detection: &Detection, format: ReportFormat) -> anyhow::Result<()> {
    let stats = detection.document.stats();

    match format {
        ReportFormat::Json => {
            let report = serde_json::json!({
                "format": detection.format,
                "id": detection.format.id(),
                "stats": stats,
                "attempts": detection.attempts,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Text => {
            println!(
                "✅ Detected schema: {} (id {})",
                detection.format,
                detection.format.id()
            );
            println!("  Languages: {}", stats.languages);
            println!("  Concepts: {}", stats.concepts);
            println!("  Examples: {}", stats.examples);
            println!("  Trackables: {}", stats.trackables);
            println!("  Tags: {}", stats.tags);
            println!("  Progress entries: {}", stats.progress);
            println!("  Relationships: {}", stats.relationships);

            println!("\nAttempts:");
            for attempt in &detection.attempts {
                println!("  {} - {:?}", attempt.format, attempt.outcome);
            }
        }
    }
    Ok(())
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            println!("✅ Written to {:?}", path);
        }
        None => std::io::stdout().write_all(bytes)?,
    }
    Ok(())
}

fn run_demo(config: &KbConfig) -> anyhow::Result<()> {
    println!("--- Encoding ---");

    let mut encoded = Vec::new();
    for format in [
        SchemaFormat::NestedByEntity,
        SchemaFormat::Flat,
        SchemaFormat::ByProgress,
    ] {
        let bytes = encode(&demo::document(format), format)?;
        println!("\n--- {} output ---", format);
        println!("{}", String::from_utf8_lossy(&bytes));
        encoded.push((format, bytes));
    }

    println!("\n--- Detecting ---");
    for (expected, bytes) in &encoded {
        let detection = detect(bytes)?;
        let stats = detection.document.stats();
        println!(
            "Detected {} (id {}), encoded as {}: {} languages, {} progress entries",
            detection.format,
            detection.format.id(),
            expected,
            stats.languages,
            stats.progress
        );
    }

    println!("\n--- Detecting from a scratch file ---");
    let dir = config.demo_dir();
    let mut file = tempfile::Builder::new()
        .prefix("dummy_input")
        .suffix(".yaml")
        .tempfile_in(&dir)
        .with_context(|| format!("creating scratch file in {}", dir.display()))?;
    file.write_all(demo::FLAT_SAMPLE_YAML.as_bytes())?;
    file.flush()?;

    let content = fs::read(file.path())?;
    let detection = detect(&content)?;
    println!("Detected format from file: {}", detection.format.id());
    if let Some(flat) = detection.document.as_flat() {
        for language in &flat.languages {
            println!(
                "  Language {} {} {}",
                language.id,
                language.name,
                language.version.as_deref().unwrap_or("-")
            );
        }
    }

    if config.demo.keep_files {
        let (_, path) = file.keep()?;
        println!("Kept scratch file at {:?}", path);
    }

    Ok(())
}

fn run_config(command: ConfigCommands, config: &KbConfig) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show { toml, json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else if toml {
                println!("{}", ::toml::to_string_pretty(config)?);
            } else {
                println!("📋 kb-format Configuration\n");
                println!("Logging:");
                println!("  Filter: {}", config.logging.filter);

                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);

                println!("\nDemo:");
                println!("  Keep files: {}", config.demo.keep_files);
                println!("  Dir: {:?}", config.demo_dir());
            }
        }

        ConfigCommands::Init { output } => {
            KbConfig::default().save(&output)?;
            println!("✅ Created config file: {}", output);
        }

        ConfigCommands::Validate => {
            // Loading already succeeded in main
            println!("✅ Configuration is valid");
            println!("   Output: {:?}", config.output.format);
            println!("   Demo dir: {:?}", config.demo_dir());
        }
    }

    Ok(())
}
