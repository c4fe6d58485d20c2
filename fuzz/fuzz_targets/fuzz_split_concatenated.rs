#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use serde_json::{Number, Value};
use ysuite::{documents_equal, split_documents, values_equal};

const MAX_DEPTH: usize = 6;
const MAX_LEN: usize = 8;

fn gen_value(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
    let choice: u8 = if depth >= MAX_DEPTH {
        u.int_in_range(0..=4)?
    } else {
        u.arbitrary()?
    };
    Ok(match choice % 7 {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::Number(Number::from(u.arbitrary::<i64>()?)),
        3 => {
            let n: f64 = u.arbitrary()?;
            serde_json::json!(if n.is_finite() { n } else { 0.0 })
        }
        4 => Value::String(u.arbitrary()?),
        5 => {
            let len = u.int_in_range(0..=MAX_LEN)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(gen_value(u, depth + 1)?);
            }
            Value::Array(items)
        }
        _ => {
            let len = u.int_in_range(0..=MAX_LEN)?;
            let mut map = serde_json::Map::new();
            for _ in 0..len {
                let key: String = u.arbitrary()?;
                map.insert(key, gen_value(u, depth + 1)?);
            }
            Value::Object(map)
        }
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(count) = u.int_in_range(0..=MAX_LEN) else { return };
    let Ok(pretty) = u.arbitrary::<bool>() else { return };

    let mut pieces = Vec::with_capacity(count);
    for _ in 0..count {
        match gen_value(&mut u, 0) {
            Ok(v) if pretty => pieces.push(serde_json::to_string_pretty(&v).unwrap()),
            Ok(v) => pieces.push(serde_json::to_string(&v).unwrap()),
            Err(_) => break,
        }
    }

    // Decode each piece on its own so float parsing matches the splitter's.
    let expected: Vec<ysuite::Value> = pieces
        .iter()
        .map(|p| ysuite::Value::from(serde_json::from_str::<Value>(p).unwrap()))
        .collect();

    // Pieces are written back to back. Only a number or keyword followed by
    // another one would fuse into a single token, so those get one space.
    let mut text = String::new();
    for piece in &pieces {
        let fuses = text.ends_with(|c: char| c.is_ascii_alphanumeric())
            && piece.starts_with(|c: char| c.is_ascii_alphanumeric());
        if fuses {
            text.push(' ');
        }
        text.push_str(piece);
    }
    let got = split_documents(&text).unwrap_or_else(|e| panic!("{} in {:?}", e, text));

    if !documents_equal(&got, &expected) {
        panic!("split mismatch for {:?}\nexpected {:?}\ngot {:?}", text, expected, got);
    }
    for doc in &got {
        assert!(values_equal(doc, doc), "comparison is not reflexive for {:?}", doc);
    }

    // Non-finite floats only come from the YAML side, so check them directly.
    if let Ok(n) = u.arbitrary::<f64>() {
        let v = ysuite::Value::Number(ysuite::Number::F64(n));
        assert!(values_equal(&v, &v), "comparison is not reflexive for {:?}", v);
    }
});
