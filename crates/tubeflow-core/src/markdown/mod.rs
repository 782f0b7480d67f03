//! Markdown-subset rendering.
//!
//! Strategy sections come back from the model as a small markdown dialect:
//! `#`/`##`/`###` headings, `-`/`*` bullets, `N.` ordered items, `**bold**`,
//! `[label](url)` links and `#hashtag` spans. Anything else is a paragraph.
//!
//! Rendering is two steps:
//! - [`parse`] classifies each line into a [`RenderNode`]
//! - an emitter ([`to_html`], [`to_terminal`]) turns nodes into output

mod html;
mod inline;
mod parse;
mod terminal;

use serde::Serialize;

pub use html::{escape_html, to_html};
pub use inline::parse_inline;
pub use parse::{classify_line, parse};
pub use terminal::to_terminal;

/// One formatted inline run within a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Link { label: String, url: String },
    /// Tag name without the leading `#`.
    Hashtag(String),
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Blank,
    /// Heading text is kept verbatim (no inline formatting).
    Heading { level: u8, text: String },
    Bullet { spans: Vec<InlineSpan> },
    /// `index` is the literal digit run from the source, never renumbered.
    Ordered { index: String, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
}

impl RenderNode {
    /// Inline spans of the node, empty for blanks and headings.
    pub fn spans(&self) -> &[InlineSpan] {
        match self {
            RenderNode::Bullet { spans }
            | RenderNode::Ordered { spans, .. }
            | RenderNode::Paragraph { spans } => spans,
            RenderNode::Blank | RenderNode::Heading { .. } => &[],
        }
    }

    /// Writes the node back out as a markdown-subset source line.
    pub fn to_markdown(&self) -> String {
        match self {
            RenderNode::Blank => String::new(),
            RenderNode::Heading { level, text } => {
                format!("{} {text}", "#".repeat(usize::from(*level)))
            }
            RenderNode::Bullet { spans } => format!("- {}", spans_to_markdown(spans)),
            RenderNode::Ordered { index, spans } => {
                format!("{index}. {}", spans_to_markdown(spans))
            }
            RenderNode::Paragraph { spans } => spans_to_markdown(spans),
        }
    }
}

fn spans_to_markdown(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(text),
            InlineSpan::Bold(text) => {
                out.push_str("**");
                out.push_str(text);
                out.push_str("**");
            }
            InlineSpan::Link { label, url } => {
                out.push('[');
                out.push_str(label);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
            }
            InlineSpan::Hashtag(tag) => {
                out.push('#');
                out.push_str(tag);
            }
        }
    }
    out
}
