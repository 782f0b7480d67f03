use std::fmt::Write;

use super::{InlineSpan, RenderNode};

/// Renders nodes as an HTML fragment, one element per node.
///
/// Every piece of source text is escaped; model output never reaches the
/// markup unescaped.
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::Blank => out.push_str("<div class=\"md-blank\"></div>"),
            RenderNode::Heading { level, text } => {
                let _ = write!(out, "<h{level}>{}</h{level}>", escape_html(text));
            }
            RenderNode::Bullet { spans } => {
                out.push_str("<div class=\"md-bullet\"><span class=\"md-marker\">\u{2022}</span><span>");
                push_spans(&mut out, spans);
                out.push_str("</span></div>");
            }
            RenderNode::Ordered { index, spans } => {
                let _ = write!(
                    out,
                    "<div class=\"md-ordered\"><span class=\"md-index\">{}.</span><span>",
                    escape_html(index)
                );
                push_spans(&mut out, spans);
                out.push_str("</span></div>");
            }
            RenderNode::Paragraph { spans } => {
                out.push_str("<p>");
                push_spans(&mut out, spans);
                out.push_str("</p>");
            }
        }
        out.push('\n');
    }
    out
}

fn push_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(&escape_html(text)),
            InlineSpan::Bold(text) => {
                let _ = write!(out, "<strong>{}</strong>", escape_html(text));
            }
            InlineSpan::Link { label, url } => {
                let _ = write!(
                    out,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html(url),
                    escape_html(label)
                );
            }
            InlineSpan::Hashtag(tag) => {
                let _ = write!(out, "<span class=\"md-hashtag\">#{}</span>", escape_html(tag));
            }
        }
    }
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
