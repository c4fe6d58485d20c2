//! The parser under test.
//!
//! A [`Loader`] turns input text into one [`Value`] per document. Whatever
//! it rejects is reported through [`LoadError`], which the runner counts as a
//! failed fixture.

use serde::Deserialize;
use thiserror::Error;

use crate::split::split_documents;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadError::new(err.to_string())
    }
}

pub trait Loader {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn load(&self, text: &str) -> Result<Vec<Value>, LoadError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self, text: &str) -> Result<Vec<Value>, LoadError> {
        (**self).load(text)
    }
}

/// Multi-document YAML loader backed by serde_yaml.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLoader;

impl Loader for YamlLoader {
    fn name(&self) -> &str {
        "yaml"
    }

    fn load(&self, text: &str) -> Result<Vec<Value>, LoadError> {
        let mut docs = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            let raw = serde_yaml::Value::deserialize(document)?;
            docs.push(Value::try_from(raw)?);
        }
        Ok(docs)
    }
}

/// Treats the input as a JSON document stream. Useful for checking the
/// fixture data itself, since every JSON fixture should load cleanly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStreamLoader;

impl Loader for JsonStreamLoader {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, text: &str) -> Result<Vec<Value>, LoadError> {
        split_documents(text).map_err(|e| LoadError::new(e.to_string()))
    }
}
