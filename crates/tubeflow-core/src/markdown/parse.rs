use super::inline::parse_inline;
use super::RenderNode;

/// Parses markdown-subset text into one node per line.
///
/// Lines are split on `\n` and keep their input order. Empty input yields
/// no nodes; a trailing newline produces a final [`RenderNode::Blank`].
pub fn parse(text: &str) -> Vec<RenderNode> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n').map(classify_line).collect()
}

/// Classifies a single line. First match wins, on the trimmed line.
pub fn classify_line(line: &str) -> RenderNode {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return RenderNode::Blank;
    }

    for (marker, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return RenderNode::Heading {
                level,
                text: rest.to_string(),
            };
        }
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return RenderNode::Bullet {
            spans: parse_inline(rest),
        };
    }

    if let Some((index, rest)) = split_ordered_prefix(trimmed) {
        return RenderNode::Ordered {
            index: index.to_string(),
            spans: parse_inline(rest.trim()),
        };
    }

    RenderNode::Paragraph {
        spans: parse_inline(trimmed),
    }
}

/// Splits `"12. rest"` into `("12", " rest")`. Requires at least one ASCII
/// digit immediately followed by `.`.
fn split_ordered_prefix(line: &str) -> Option<(&str, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || line.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    Some((&line[..digits], &line[digits + 1..]))
}
