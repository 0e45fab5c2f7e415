//! Ordered result records and the shared field template
//!
//! Every analyser emits flattened rows built the same way: copy the
//! identifying fields of the input document (revision, machine, start time,
//! any filter dimensions) from a shared [`Template`], then append the
//! analyser's own fields. Field order is insertion order, and downstream
//! table writers rely on it matching the declared header order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One flattened result row: an insertion-ordered field name to scalar
/// value mapping, immutable once buffered by an analyser.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, keeping the position of an already-present name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The identifying fields shared by every record built from one input
/// document. Copied, never aliased, into each emitted [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Template {
    fields: IndexMap<String, Value>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Start a record carrying a copy of the template fields, in template
    /// order.
    pub fn instantiate(&self) -> Record {
        Record {
            fields: self.fields.clone(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
