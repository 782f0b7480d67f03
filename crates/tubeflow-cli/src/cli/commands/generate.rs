//! Generate command handler.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tubeflow_core::config;
use tubeflow_core::strategy::{Section, StrategyClient, StrategyError};

use crate::output::{self, OutputFormat};

pub struct GenerateOptions<'a> {
    pub niche: &'a str,
    pub section: Option<Section>,
    pub format: OutputFormat,
    pub model_override: Option<&'a str>,
    pub output: Option<&'a Path>,
    pub config: &'a config::Config,
}

pub async fn run(options: GenerateOptions<'_>) -> Result<()> {
    // Trimming only guards against blank input; the niche is sent as typed.
    let niche = options.niche;
    if niche.trim().is_empty() {
        anyhow::bail!("niche must not be empty");
    }

    let gemini = options
        .config
        .gemini_config(options.model_override)
        .context("resolve gemini config")?;
    let client = StrategyClient::new(gemini);

    eprintln!("Generating strategy for \"{niche}\" with {}...", client.model());

    let document = match client.generate_strategy(niche).await {
        Ok(document) => document,
        Err(err) => {
            if let StrategyError::Schema { raw_body, .. } = &err {
                tracing::debug!(raw_body = %raw_body, "unparseable strategy response");
            }
            return Err(err.into());
        }
    };

    let color = output::color_enabled(options.output.is_some());
    let rendered =
        output::render_document(&document, niche, options.section, options.format, color)?;

    match options.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("write output")?;
            stdout.flush().context("flush output")?;
        }
    }
    Ok(())
}
