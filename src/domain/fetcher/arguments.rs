//! Typed access to field arguments

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Arguments supplied to a single field, keyed by argument name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldArguments {
    values: Map<String, Value>,
}

impl FieldArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an identifier argument.
    ///
    /// Identifiers accept strings and integers; integers are coerced to their
    /// decimal representation, so `id: 1` and `id: "1"` are equivalent. An
    /// absent argument or an explicit `null` yields `None`, which matches no
    /// record.
    pub fn id(&self, name: &str) -> Result<Option<String>, DomainError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(value) => coerce_id(name, value),
        }
    }

    /// Returns a list of identifier arguments in request order.
    ///
    /// A single identifier is accepted as a one-element list. Absent or `null`
    /// gives an empty list; `null` elements are skipped.
    pub fn id_list(&self, name: &str) -> Result<Vec<String>, DomainError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => {
                let mut ids = Vec::with_capacity(items.len());

                for item in items {
                    if let Some(id) = coerce_id(name, item)? {
                        ids.push(id);
                    }
                }
                Ok(ids)
            }
            Some(value) => Ok(coerce_id(name, value)?.into_iter().collect()),
        }
    }
}

impl From<Map<String, Value>> for FieldArguments {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl TryFrom<Value> for FieldArguments {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::new()),
            other => Err(DomainError::invalid_argument(
                "arguments",
                format!("expected an object, got {}", type_name(&other)),
            )),
        }
    }
}

fn coerce_id(name: &str, value: &Value) -> Result<Option<String>, DomainError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        other => Err(DomainError::invalid_argument(
            name,
            format!(
                "expected a string or integer identifier, got {}",
                type_name(other)
            ),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
