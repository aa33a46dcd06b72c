//! GraphQL-shaped response for a single field

use serde::Serialize;
use serde_json::{Map, Value};

use super::FieldValue;
use crate::domain::DomainError;

/// One entry of the response `errors` array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    pub message: String,
    pub path: Vec<String>,
}

/// Response for one field: `{"data": {"<field>": ...}, "errors": [...]}`
///
/// Absence and failure both leave the field `null` in `data`; only failure
/// adds an entry to `errors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResponse {
    data: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ResponseError>,
}

impl FieldResponse {
    pub fn from_result(field_name: &str, result: Result<FieldValue, DomainError>) -> Self {
        let mut data = Map::new();
        let mut errors = Vec::new();

        match result {
            Ok(value) => {
                let value = serde_json::to_value(&value).unwrap_or(Value::Null);
                data.insert(field_name.to_string(), value);
            }
            Err(e) => {
                data.insert(field_name.to_string(), Value::Null);
                errors.push(ResponseError {
                    message: e.to_string(),
                    path: vec![field_name.to_string()],
                });
            }
        }

        Self { data, errors }
    }

    pub fn data(&self, field_name: &str) -> Option<&Value> {
        self.data.get(field_name)
    }

    pub fn errors(&self) -> &[ResponseError] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EntityRecord;
    use serde_json::json;

    #[test]
    fn test_found_record() {
        let response =
            FieldResponse::from_result("line", Ok(FieldValue::Record(EntityRecord::with_id("1"))));

        assert!(response.is_ok());
        assert_eq!(response.to_json(), json!({"data": {"line": {"id": "1"}}}));
    }

    #[test]
    fn test_absence_is_null_without_errors() {
        let response = FieldResponse::from_result("line", Ok(FieldValue::Null));

        assert!(response.is_ok());
        assert_eq!(response.data("line"), Some(&Value::Null));
        assert_eq!(response.to_json(), json!({"data": {"line": null}}));
    }

    #[test]
    fn test_error_is_null_with_error_entry() {
        let error = DomainError::invalid_argument("id", "not an identifier");
        let response = FieldResponse::from_result("line", Err(error));

        assert!(!response.is_ok());
        assert_eq!(
            response.to_json(),
            json!({
                "data": {"line": null},
                "errors": [{"message": "Invalid argument 'id': not an identifier", "path": ["line"]}]
            })
        );
    }
}
