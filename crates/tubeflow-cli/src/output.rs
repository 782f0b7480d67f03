//! Output formatting for rendered strategies.

use std::fmt::Write;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use serde_json::json;
use tubeflow_core::markdown::{self, RenderNode, escape_html};
use tubeflow_core::strategy::{Section, StrategyDocument};

/// How rendered text is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal text, styled when stdout is a terminal
    Text,
    /// Terminal layout without escape codes
    Plain,
    /// HTML fragment
    Html,
    /// JSON (the document, or render nodes for `render`)
    Json,
    /// Raw markdown
    Markdown,
}

/// True when styled output should be written to stdout.
pub fn color_enabled(to_file: bool) -> bool {
    !to_file && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Renders one markdown-subset blob.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_text(text: &str, format: OutputFormat, color: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Text => markdown::to_terminal(&markdown::parse(text), color),
        OutputFormat::Plain => markdown::to_terminal(&markdown::parse(text), false),
        OutputFormat::Html => markdown::to_html(&markdown::parse(text)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&markdown::parse(text))
                .context("serialize render nodes")?;
            json.push('\n');
            json
        }
        OutputFormat::Markdown => with_trailing_newline(text),
    };
    Ok(out)
}

/// Renders a document, either one section or all of them in display order.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_document(
    doc: &StrategyDocument,
    niche: &str,
    section: Option<Section>,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    if format == OutputFormat::Json {
        let value = match section {
            Some(section) => json!({ section.field_name(): doc.section(section) }),
            None => serde_json::to_value(doc).context("serialize strategy")?,
        };
        let mut out = serde_json::to_string_pretty(&value).context("serialize strategy")?;
        out.push('\n');
        return Ok(out);
    }

    if let Some(section) = section {
        return render_text(doc.section(section), format, color);
    }

    let mut out = String::new();
    if format == OutputFormat::Html {
        let _ = writeln!(
            out,
            "<article class=\"tubeflow-strategy\" data-niche=\"{}\">",
            escape_html(niche)
        );
    }

    for (index, (section, text)) in doc.sections().enumerate() {
        match format {
            OutputFormat::Html => {
                let _ = writeln!(
                    out,
                    "<section id=\"{}\">\n<h2 class=\"section-title\">{}</h2>",
                    section.id(),
                    escape_html(section.label())
                );
                out.push_str(&render_text(text, format, color)?);
                out.push_str("</section>\n");
            }
            OutputFormat::Markdown => {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "# {}\n", section.label());
                out.push_str(&with_trailing_newline(text));
            }
            _ => {
                if index > 0 {
                    out.push('\n');
                }
                out.push_str(&section_banner(section, color));
                out.push_str(&render_text(text, format, color)?);
            }
        }
    }

    if format == OutputFormat::Html {
        out.push_str("</article>\n");
    }
    Ok(out)
}

/// Section title as an H1 line with a rule underneath.
fn section_banner(section: Section, color: bool) -> String {
    let title = RenderNode::Heading {
        level: 1,
        text: section.label().to_string(),
    };
    let rule = "\u{2500}".repeat(section.label().chars().count());
    format!("{}{rule}\n", markdown::to_terminal(&[title], color))
}

fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}
