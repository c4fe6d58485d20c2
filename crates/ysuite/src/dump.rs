//! Indented rendering of value trees for mismatch diagnostics.

use crate::value::Value;

const INDENT: usize = 2;

pub struct DumpWriter {
    out: String,
    indent_cache: String,
}

impl DumpWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, indent: usize) {
        if indent == 0 {
            return;
        }
        if self.indent_cache.len() < indent {
            self.indent_cache
                .extend(core::iter::repeat_n(' ', indent - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    fn write_value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.out.push_str(&n.to_string()),
            Value::String(s) => escape_and_quote_into(&mut self.out, s),
            Value::Array(items) => self.write_array(items, indent),
            Value::Object(entries) => {
                if entries.is_empty() {
                    self.out.push_str("{}");
                    return;
                }
                self.out.push_str("{\n");
                for (i, (k, v)) in entries.iter().enumerate() {
                    self.write_indent(indent + INDENT);
                    escape_and_quote_into(&mut self.out, k);
                    self.out.push_str(": ");
                    self.write_value(v, indent + INDENT);
                    if i + 1 < entries.len() {
                        self.out.push(',');
                    }
                    self.out.push('\n');
                }
                self.write_indent(indent);
                self.out.push('}');
            }
        }
    }

    fn write_array(&mut self, items: &[Value], indent: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push_str("[\n");
        for (i, item) in items.iter().enumerate() {
            self.write_indent(indent + INDENT);
            self.write_value(item, indent + INDENT);
            if i + 1 < items.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.write_indent(indent);
        self.out.push(']');
    }

    /// Appends one value followed by a newline.
    pub fn value(&mut self, value: &Value) {
        self.write_value(value, 0);
        self.out.push('\n');
    }

    /// Appends a document sequence as a top-level array followed by a newline.
    pub fn documents(&mut self, docs: &[Value]) {
        self.write_array(docs, 0);
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for DumpWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn dump_value(value: &Value) -> String {
    let mut w = DumpWriter::new();
    w.value(value);
    w.into_string()
}

pub fn dump_documents(docs: &[Value]) -> String {
    let mut w = DumpWriter::new();
    w.documents(docs);
    w.into_string()
}

fn escape_and_quote_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7F => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
