use crossterm::style::Stylize;

use super::{InlineSpan, RenderNode};

/// Renders nodes as terminal text, one output line per node.
///
/// With `color` off the layout is identical but no escape codes are
/// written (pipes, `NO_COLOR`, tests).
pub fn to_terminal(nodes: &[RenderNode], color: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::Blank => {}
            RenderNode::Heading { level, text } => {
                let line = match level {
                    1 => text.to_uppercase(),
                    _ => text.clone(),
                };
                if color {
                    let styled = match level {
                        1 => line.bold().white(),
                        2 => line.bold().white().underlined(),
                        _ => line.bold().red(),
                    };
                    out.push_str(&styled.to_string());
                } else {
                    out.push_str(&line);
                }
            }
            RenderNode::Bullet { spans } => {
                out.push_str("  ");
                push_marker(&mut out, "\u{2022}", color);
                out.push(' ');
                push_spans(&mut out, spans, color);
            }
            RenderNode::Ordered { index, spans } => {
                out.push_str("  ");
                push_marker(&mut out, &format!("{index}."), color);
                out.push(' ');
                push_spans(&mut out, spans, color);
            }
            RenderNode::Paragraph { spans } => push_spans(&mut out, spans, color),
        }
        out.push('\n');
    }
    out
}

fn push_marker(out: &mut String, marker: &str, color: bool) {
    if color {
        out.push_str(&marker.red().to_string());
    } else {
        out.push_str(marker);
    }
}

fn push_spans(out: &mut String, spans: &[InlineSpan], color: bool) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(text),
            InlineSpan::Bold(text) if color => out.push_str(&text.as_str().bold().to_string()),
            InlineSpan::Bold(text) => out.push_str(text),
            InlineSpan::Link { label, url } => {
                if color {
                    out.push_str(&label.as_str().red().underlined().to_string());
                    out.push_str(&format!(" ({url})").dark_grey().to_string());
                } else {
                    out.push_str(label);
                    out.push_str(" (");
                    out.push_str(url);
                    out.push(')');
                }
            }
            InlineSpan::Hashtag(tag) => {
                let text = format!("#{tag}");
                if color {
                    out.push_str(&text.blue().to_string());
                } else {
                    out.push_str(&text);
                }
            }
        }
    }
}
