use super::InlineSpan;

/// Splits line content into non-overlapping inline spans.
///
/// Single left-to-right scan over the source text. At each position the
/// earliest delimiter wins; when a bold run and a link overlap the link
/// takes precedence (link > bold > hashtag). Unmatched delimiters stay as
/// plain text and adjacent plain text is merged.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = SpanBuilder::default();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'[' => {
                if let Some((span, end)) = match_link(text, pos) {
                    spans.push(span);
                    pos = end;
                    continue;
                }
            }
            b'*' => {
                if let Some(end) = match_bold(text, pos, &mut spans) {
                    pos = end;
                    continue;
                }
            }
            b'#' => {
                if let Some((span, end)) = match_hashtag(text, pos) {
                    spans.push(span);
                    pos = end;
                    continue;
                }
            }
            _ => {}
        }

        // Delimiters are ASCII, so `pos` is always on a char boundary.
        let len = text[pos..].chars().next().map_or(1, char::len_utf8);
        spans.push_text(&text[pos..pos + len]);
        pos += len;
    }

    spans.finish()
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<InlineSpan>,
    text: String,
}

impl SpanBuilder {
    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn push(&mut self, span: InlineSpan) {
        self.flush_text();
        self.spans.push(span);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.spans.push(InlineSpan::Text(text));
        }
    }

    fn finish(mut self) -> Vec<InlineSpan> {
        self.flush_text();
        self.spans
    }
}

/// `[label](url)` starting at `pos`. Label has no `]`, url has no `)`,
/// both non-empty. Returns the span and the byte offset just past `)`.
fn match_link(text: &str, pos: usize) -> Option<(InlineSpan, usize)> {
    let label_start = pos + 1;
    let label_len = text[label_start..].find(']')?;
    if label_len == 0 {
        return None;
    }
    let label_end = label_start + label_len;

    let after_label = label_end + 1;
    if text.as_bytes().get(after_label) != Some(&b'(') {
        return None;
    }

    let url_start = after_label + 1;
    let url_len = text[url_start..].find(')')?;
    if url_len == 0 {
        return None;
    }
    let url_end = url_start + url_len;

    let span = InlineSpan::Link {
        label: text[label_start..label_end].to_string(),
        url: text[url_start..url_end].to_string(),
    };
    Some((span, url_end + 1))
}

/// `**text**` starting at `pos`, closed by the nearest following `**`.
///
/// A link starting inside the run and ending past the closing `**` cancels
/// the run. Links fully inside the run are emitted as links, with the text
/// around them emitted as bold. Returns the offset just past the closing
/// `**` when the run was emitted.
fn match_bold(text: &str, pos: usize, spans: &mut SpanBuilder) -> Option<usize> {
    if !text[pos..].starts_with("**") {
        return None;
    }
    let inner_start = pos + 2;
    let close = inner_start + text[inner_start..].find("**")?;

    let mut pieces = Vec::new();
    let mut cursor = inner_start;
    let mut scan = inner_start;
    while let Some(offset) = text[scan..close].find('[') {
        let at = scan + offset;
        match match_link(text, at) {
            Some((_, end)) if end > close => return None,
            Some((link, end)) => {
                if at > cursor {
                    pieces.push(InlineSpan::Bold(text[cursor..at].to_string()));
                }
                pieces.push(link);
                cursor = end;
                scan = end;
            }
            None => scan = at + 1,
        }
    }

    if cursor < close || pieces.is_empty() {
        pieces.push(InlineSpan::Bold(text[cursor..close].to_string()));
    }
    for piece in pieces {
        spans.push(piece);
    }
    Some(close + 2)
}

/// `#tag` starting at `pos`: one or more ASCII alphanumerics or `_`, and
/// the `#` must not directly follow `&` (entity text like `&#39;`).
fn match_hashtag(text: &str, pos: usize) -> Option<(InlineSpan, usize)> {
    if pos > 0 && text.as_bytes()[pos - 1] == b'&' {
        return None;
    }
    let tag_start = pos + 1;
    let tag_len = text[tag_start..]
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if tag_len == 0 {
        return None;
    }
    let end = tag_start + tag_len;
    Some((InlineSpan::Hashtag(text[tag_start..end].to_string()), end))
}
