use serde_json::json;
use ysuite::{Error, Value, split_documents};

fn values(items: Vec<serde_json::Value>) -> Vec<Value> {
    items.into_iter().map(Value::from).collect()
}

#[test]
fn empty_text_is_empty_sequence() -> Result<(), Box<dyn std::error::Error>> {
    assert!(split_documents("")?.is_empty());
    Ok(())
}

#[test]
fn single_document() -> Result<(), Box<dyn std::error::Error>> {
    let docs = split_documents("{\"a\": [1, 2.5, null]}")?;
    assert_eq!(docs, values(vec![json!({"a": [1, 2.5, null]})]));
    Ok(())
}

#[test]
fn trailing_whitespace_adds_no_document() -> Result<(), Box<dyn std::error::Error>> {
    let docs = split_documents("true\n\n   \t")?;
    assert_eq!(docs, vec![Value::Bool(true)]);
    Ok(())
}

#[test]
fn adjacent_strings() -> Result<(), Box<dyn std::error::Error>> {
    let docs = split_documents("\"a\"\"b\"")?;
    assert_eq!(docs, vec![Value::String("a".into()), Value::String("b".into())]);
    Ok(())
}

#[test]
fn mixed_documents_keep_order() -> Result<(), Box<dyn std::error::Error>> {
    let text = "{\"k\": \"v\"}\n[1,2]\nnull\n\"end\"\n";
    let docs = split_documents(text)?;
    assert_eq!(
        docs,
        values(vec![json!({"k": "v"}), json!([1, 2]), json!(null), json!("end")])
    );
    Ok(())
}

#[test]
fn many_documents_on_many_lines() -> Result<(), Box<dyn std::error::Error>> {
    let text: String = (0..50).map(|i| format!("{{\"n\": {}}}\n", i)).collect();
    let docs = split_documents(&text)?;
    assert_eq!(docs.len(), 50);
    assert_eq!(docs[49], Value::from(json!({"n": 49})));
    Ok(())
}

#[test]
fn keywords_written_back_to_back() -> Result<(), Box<dyn std::error::Error>> {
    let docs = split_documents("truefalse")?;
    assert_eq!(docs, vec![Value::Bool(true), Value::Bool(false)]);
    Ok(())
}

#[test]
fn multibyte_content_splits_on_char_boundaries() -> Result<(), Box<dyn std::error::Error>> {
    let docs = split_documents("\"héllo ✓\"\n\"ünïcode\"")?;
    assert_eq!(
        docs,
        vec![Value::String("héllo ✓".into()), Value::String("ünïcode".into())]
    );
    Ok(())
}

#[test]
fn malformed_text_is_an_error() {
    assert!(matches!(split_documents("{"), Err(Error::Json { .. })));
    assert!(matches!(split_documents("[1,]"), Err(Error::Json { .. })));
}

#[test]
fn malformed_second_document_is_an_error() {
    assert!(matches!(split_documents("1\n{\"a\":"), Err(Error::Json { .. })));
}

#[test]
fn whitespace_only_terminates_with_error() {
    assert!(split_documents(" \n\t ").is_err());
}

#[test]
fn garbage_terminates() {
    for text in ["x", "}", "1x", "\"open", "[[[[", "nul", "1 2 3 ]"] {
        assert!(split_documents(text).is_err(), "{:?} should not decode", text);
    }
}
