use tracing::debug;

use crate::{
    error::ConvertError,
    utils::{error, quote},
};

/// One declaration, collapsed onto a single logical line.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    /// 1-based line the declaration starts on.
    pub line: usize,
}

/// Paren and string-literal state carried across the physical lines of a
/// single declaration.
#[derive(Debug, Default)]
struct CallScanner {
    depth:   usize,
    opened:  bool,
    quote:   Option<char>,
    escaped: bool,
}

struct Scanned {
    /// Byte offset where the text worth keeping ends.
    keep:   usize,
    closed: bool,
}

impl CallScanner {
    fn scan(&mut self, chunk: &str, line: usize) -> Result<Scanned, ConvertError> {
        for (i, c) in chunk.char_indices() {
            if let Some(q) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == q {
                    self.quote = None;
                }
                continue;
            }
            match c {
                '\'' | '"' => self.quote = Some(c),
                '#' => return Ok(Scanned { keep: i, closed: false }),
                '(' => {
                    self.depth += 1;
                    self.opened = true;
                }
                ')' => {
                    if self.depth == 0 {
                        return Err(error("Unmatched \")\"", line));
                    }
                    self.depth -= 1;
                    if self.depth == 0 {
                        let rest = chunk[i + 1..].trim();
                        if !rest.is_empty() && !rest.starts_with('#') {
                            return Err(error(
                                &format!("Unexpected text {} after declaration", quote(rest)),
                                line,
                            ));
                        }
                        return Ok(Scanned { keep: i + 1, closed: true });
                    }
                }
                _ => {}
            }
        }
        if self.quote.is_some() {
            return Err(error("Unterminated string literal", line));
        }
        Ok(Scanned { keep: chunk.len(), closed: false })
    }
}

/// Splits raw text into declaration spans.
///
/// Top-level blank and `#` lines are skipped. A declaration starts at the
/// first `=` of a line, must open its call on that line, and ends on the line
/// where the call's parentheses balance again. Comment lines inside an open
/// call are dropped.
pub fn segment_declarations(text: &str) -> Result<Vec<Span>, ConvertError> {
    let mut spans = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line_no, line)) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let eq = line.find('=').ok_or_else(|| ConvertError::MissingAssignment {
            text: trimmed.to_string(),
            line: line_no,
        })?;

        let mut scanner = CallScanner::default();
        let head = &line[eq + 1..];
        let scanned = scanner.scan(head, line_no)?;
        if !scanner.opened {
            return Err(error(
                &format!("Expected a field call after \"=\" in {}", quote(trimmed)),
                line_no,
            ));
        }

        let mut pieces = vec![line[..eq + 1 + scanned.keep].trim().to_string()];
        let mut closed = scanned.closed;
        while !closed {
            let (cont_no, cont) = lines.next().ok_or_else(|| {
                error(
                    &format!("Unclosed \"(\" in declaration {}", quote(&pieces[0])),
                    line_no,
                )
            })?;
            let cont_trimmed = cont.trim();
            if cont_trimmed.is_empty() || cont_trimmed.starts_with('#') {
                continue;
            }
            let scanned = scanner.scan(cont, cont_no)?;
            let piece = cont[..scanned.keep].trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }
            closed = scanned.closed;
        }

        let span = Span {
            text: pieces.join(" "),
            line: line_no,
        };
        debug!(line = span.line, text = %span.text, "segmented declaration");
        spans.push(span);
    }

    Ok(spans)
}
