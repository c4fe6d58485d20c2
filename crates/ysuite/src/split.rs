//! Recover the sequence of documents encoded by back-to-back JSON values.
//!
//! A YAML stream with several `---` documents has a JSON fixture holding one
//! literal per document with nothing between them. Decoding stops at the
//! first byte after a complete value; that byte is where the next document
//! starts.

use crate::error::{Error, Result};
use crate::json::{self, JsonOutcome};
use crate::value::Value;

/// Split `text` into its top-level JSON documents, in order.
///
/// Empty text is an empty sequence. Trailing whitespace after the last
/// document never produces an extra entry. Any input that is not a run of
/// complete JSON values fails with [`Error::Json`], whose offset is relative
/// to the start of `text`.
pub fn split_documents(text: &str) -> Result<Vec<Value>> {
    let mut docs = Vec::new();
    let mut start = 0usize;

    while start < text.len() {
        let rest = &text[start..];
        match json::parse(rest) {
            JsonOutcome::Complete(value) => {
                docs.push(value);
                break;
            }
            JsonOutcome::TrailingData { value, offset } => {
                tracing::debug!(document = docs.len(), at = start + offset, "document boundary");
                docs.push(value);
                start += offset;
            }
            JsonOutcome::Malformed { message, offset } => {
                return Err(Error::Json {
                    offset: start + offset,
                    message,
                });
            }
        }
    }

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_offsets_are_absolute() {
        let err = split_documents("1 2 {").unwrap_err();
        match err {
            Error::Json { offset, .. } => assert_eq!(offset, 5),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
