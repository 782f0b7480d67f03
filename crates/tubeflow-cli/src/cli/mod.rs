//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tubeflow_core::config;
use tubeflow_core::strategy::Section;

use crate::output::OutputFormat;

mod commands;

#[derive(Parser)]
#[command(name = "tubeflow")]
#[command(version)]
#[command(about = "Generate a complete YouTube automation strategy for a niche")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate a strategy for a niche
    Generate {
        /// The niche to analyze (e.g. "Urban Gardening")
        #[arg(value_name = "NICHE")]
        niche: String,

        /// Show only one section
        #[arg(short, long, value_parser = parse_section)]
        section: Option<Section>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Override the model from config
        #[arg(short, long)]
        model: Option<String>,

        /// Write output to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Render a markdown file (or stdin) without calling the API
    Render {
        /// File to render (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the strategy sections
    Sections,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

fn parse_section(value: &str) -> Result<Section, String> {
    value.parse()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Single request per invocation; a current-thread runtime is enough.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    rt.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            niche,
            section,
            format,
            model,
            output,
        } => {
            let config = config::Config::load().context("load config")?;
            commands::generate::run(commands::generate::GenerateOptions {
                niche: &niche,
                section,
                format,
                model_override: model.as_deref(),
                output: output.as_deref(),
                config: &config,
            })
            .await
        }
        Commands::Render { file, format } => commands::render::run(file.as_deref(), format),
        Commands::Sections => {
            commands::sections::list();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
