//! Ground-truth JSON decoding.
//!
//! [`parse`] decodes exactly one JSON document and classifies failures so the
//! stream splitter can tell "a complete value followed by more content" apart
//! from genuinely malformed input.

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum JsonOutcome {
    /// The whole text is one JSON document (surrounding whitespace allowed).
    Complete(Value),
    /// `text[..offset]` is one complete document; `text[offset..]` starts
    /// with non-whitespace content that was not consumed.
    TrailingData { value: Value, offset: usize },
    /// Anything else. `offset` is the byte position the decoder stopped at.
    Malformed { message: String, offset: usize },
}

pub fn parse(text: &str) -> JsonOutcome {
    let err = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(v) => return JsonOutcome::Complete(Value::from(v)),
        Err(err) => err,
    };
    let offset = byte_offset(text, err.line(), err.column());
    let message = err.to_string();

    if is_trailing_data(&err) {
        if let Some(offset) = offset.filter(|&o| is_split_point(text, o)) {
            match serde_json::from_str::<serde_json::Value>(&text[..offset]) {
                Ok(head) => {
                    return JsonOutcome::TrailingData {
                        value: Value::from(head),
                        offset,
                    };
                }
                Err(head_err) => {
                    tracing::debug!(offset, error = %head_err, "head before trailing data does not decode");
                }
            }
        }
    }

    // EOF errors are reported at the last byte read; the decoder stopped at the end.
    let offset = if err.is_eof() {
        text.len()
    } else {
        offset.unwrap_or(text.len())
    };
    JsonOutcome::Malformed { message, offset }
}

fn is_trailing_data(err: &serde_json::Error) -> bool {
    err.is_syntax() && err.to_string().starts_with("trailing characters")
}

/// A usable split point consumes at least one byte and leaves a non-empty
/// remainder that starts with non-whitespace. Anything else would let the
/// splitter loop without making progress.
fn is_split_point(text: &str, offset: usize) -> bool {
    offset > 0
        && offset < text.len()
        && text.is_char_boundary(offset)
        && text[offset..]
            .chars()
            .next()
            .is_some_and(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Convert serde_json's 1-based line / 1-based byte column to a byte offset.
/// Column 0 means the decoder stopped right after a newline (EOF case).
fn byte_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start = if line == 1 {
        0
    } else {
        text.match_indices('\n').nth(line - 2).map(|(i, _)| i + 1)?
    };
    let offset = line_start + column.saturating_sub(1);
    (offset <= text.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_lines() {
        let text = "{}\n[1]\n";
        assert_eq!(byte_offset(text, 1, 1), Some(0));
        assert_eq!(byte_offset(text, 2, 1), Some(3));
        assert_eq!(byte_offset(text, 2, 3), Some(5));
        assert_eq!(byte_offset(text, 4, 1), None);
    }

    #[test]
    fn trailing_data_points_at_next_document() {
        match parse("{\"a\": 1}  \n[true]") {
            JsonOutcome::TrailingData { value, offset } => {
                assert_eq!(offset, 11);
                assert_eq!(value.get("a"), Some(&Value::Number(crate::Number::U64(1))));
            }
            other => panic!("expected trailing data, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_after_document_is_complete() {
        assert!(matches!(parse("\"x\"\n\n  "), JsonOutcome::Complete(_)));
    }

    #[test]
    fn unterminated_object_is_malformed() {
        assert!(matches!(parse("{"), JsonOutcome::Malformed { offset: 1, .. }));
        assert!(matches!(parse("   "), JsonOutcome::Malformed { offset: 3, .. }));
        assert!(matches!(parse("[1, }"), JsonOutcome::Malformed { offset: 4, .. }));
    }
}
