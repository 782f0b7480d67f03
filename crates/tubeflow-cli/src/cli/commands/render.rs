//! Render command handler.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::output::{self, OutputFormat};

/// Renders a markdown-subset file, or stdin when `file` is `None`.
pub fn run(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    // Trailing newline of a file is a line terminator, not an extra blank line.
    let source = source.strip_suffix('\n').unwrap_or(&source);

    let rendered = output::render_text(source, format, output::color_enabled(false))?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("write output")?;
    stdout.flush().context("flush output")?;
    Ok(())
}
