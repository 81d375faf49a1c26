//! Hand-written schema rules for the variable payload.
//!
//! Each field lists its rules in evaluation order. `Required` is implicit: it runs even
//! when the field is absent, and when it fails no other rule of that field is checked.
//! The remaining rules only run against present, non-blank values.

use serde_json::Value;

use crate::domain::timestamp::parse_timestamp;

/// Names accepted for `variable.data.type`.
pub const VARIABLE_TYPES: &[&str] = &["string", "int", "float", "bool", "code", "html"];

/// A single check applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, not null, not a blank string, not an empty array or object.
    Required,
    /// An object whose keys all belong to the listed set.
    Mapping(&'static [&'static str]),
    /// A JSON string.
    String,
    /// A string equal to one of the listed values.
    In(&'static [&'static str]),
    /// A string holding an RFC 3339 timestamp.
    Date,
    /// An int, float, bool or string.
    Scalar,
}

impl Rule {
    /// Check a present value. Returns the failure message, if any.
    fn check(&self, path: &str, value: &Value) -> Option<String> {
        let attribute = display_attribute(path);
        match self {
            Rule::Required => {
                is_blank(value).then(|| format!("The {} field is required.", attribute))
            }
            Rule::Mapping(keys) => {
                let valid = value
                    .as_object()
                    .is_some_and(|object| object.keys().all(|key| keys.contains(&key.as_str())));
                (!valid).then(|| format!("The {} field must be an array.", attribute))
            }
            Rule::String => {
                (!value.is_string()).then(|| format!("The {} field must be a string.", attribute))
            }
            Rule::In(allowed) => {
                let valid = value.as_str().is_some_and(|s| allowed.contains(&s));
                (!valid).then(|| format!("The selected {} is invalid.", attribute))
            }
            Rule::Date => {
                let valid = value.as_str().and_then(parse_timestamp).is_some();
                (!valid).then(|| format!("The {} field must be a valid date.", attribute))
            }
            Rule::Scalar => match value {
                Value::Array(_) | Value::Object(_) => Some(format!(
                    "The {} must be one of these types: int, float, bool, string \"{}\" given.",
                    path,
                    json_type_name(value)
                )),
                _ => None,
            },
        }
    }
}

/// Rules attached to one dotted path.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub path: &'static str,
    pub rules: &'static [Rule],
}

/// Schema of a `GET /api/var/get/{slug}` response body.
pub const VARIABLE_SCHEMA: &[FieldRules] = &[
    FieldRules { path: "variable", rules: &[Rule::Required, Rule::Mapping(&["data"])] },
    FieldRules {
        path: "variable.data",
        rules: &[
            Rule::Required,
            Rule::Mapping(&["slug", "type", "value", "created_at", "updated_at"]),
        ],
    },
    FieldRules { path: "variable.data.slug", rules: &[Rule::Required, Rule::String] },
    FieldRules {
        path: "variable.data.type",
        rules: &[Rule::Required, Rule::String, Rule::In(VARIABLE_TYPES)],
    },
    FieldRules { path: "variable.data.created_at", rules: &[Rule::Required, Rule::Date] },
    FieldRules { path: "variable.data.updated_at", rules: &[Rule::Required, Rule::Date] },
    FieldRules { path: "variable.data.value", rules: &[Rule::Required, Rule::Scalar] },
];

/// Validates decoded JSON bodies against an ordered rule set.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    fields: &'static [FieldRules],
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(VARIABLE_SCHEMA)
    }
}

impl SchemaValidator {
    pub fn new(fields: &'static [FieldRules]) -> Self {
        Self { fields }
    }

    /// Validate `body`, returning every failure message in rule order.
    ///
    /// An empty vector means the body conforms.
    pub fn validate(&self, body: &Value) -> Vec<String> {
        let mut errors = Vec::new();

        for field in self.fields {
            let value = lookup(body, field.path);

            for rule in field.rules {
                let message = match (rule, value) {
                    (Rule::Required, None) => {
                        Some(format!("The {} field is required.", display_attribute(field.path)))
                    }
                    (_, None) => None,
                    (rule, Some(value)) => rule.check(field.path, value),
                };

                if let Some(message) = message {
                    errors.push(message);
                    if *rule == Rule::Required {
                        break;
                    }
                }
            }
        }

        errors
    }
}

/// Resolve a dotted path. Traversal through anything but an object yields `None`.
fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(body, |current, segment| current.as_object()?.get(segment))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn display_attribute(path: &str) -> String {
    path.replace('_', " ")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VariableType;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "variable": {
                "data": {
                    "slug": "test-slug",
                    "type": "int",
                    "value": "test-value",
                    "created_at": "2024-04-07T21:08:23+00:00",
                    "updated_at": "2024-04-08T21:08:23+00:00"
                }
            }
        })
    }

    fn with_data(key: &str, value: Option<Value>) -> Value {
        let mut body = valid_body();
        let data = body["variable"]["data"].as_object_mut().unwrap();
        match value {
            Some(value) => {
                data.insert(key.to_string(), value);
            }
            None => {
                data.remove(key);
            }
        }
        body
    }

    fn validate(body: &Value) -> Vec<String> {
        SchemaValidator::default().validate(body)
    }

    #[test]
    fn accepts_valid_body() {
        assert!(validate(&valid_body()).is_empty());
    }

    #[test]
    fn accepts_every_variable_type() {
        for variable_type in VariableType::ALL {
            let body = with_data("type", Some(json!(variable_type.as_str())));
            assert!(validate(&body).is_empty(), "type {} should validate", variable_type);
        }
        let names: Vec<&str> = VariableType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, VARIABLE_TYPES);
    }

    #[test]
    fn accepts_every_scalar_value() {
        for value in [json!(1), json!(1.1), json!(true), json!(false), json!(0), json!("x")] {
            let body = with_data("value", Some(value.clone()));
            assert!(validate(&body).is_empty(), "value {} should validate", value);
        }
    }

    #[test]
    fn missing_fields_report_single_required_error() {
        let cases = [
            ("slug", "The variable.data.slug field is required."),
            ("type", "The variable.data.type field is required."),
            ("value", "The variable.data.value field is required."),
            ("created_at", "The variable.data.created at field is required."),
            ("updated_at", "The variable.data.updated at field is required."),
        ];

        for (key, expected) in cases {
            assert_eq!(validate(&with_data(key, None)), vec![expected.to_string()], "key {}", key);
        }
    }

    #[test]
    fn non_string_slug() {
        assert_eq!(
            validate(&with_data("slug", Some(json!(1)))),
            vec!["The variable.data.slug field must be a string."]
        );
    }

    #[test]
    fn blank_slug_is_required_error() {
        assert_eq!(
            validate(&with_data("slug", Some(json!("   ")))),
            vec!["The variable.data.slug field is required."]
        );
    }

    #[test]
    fn non_string_type_reports_both_rules() {
        assert_eq!(
            validate(&with_data("type", Some(json!(1)))),
            vec![
                "The variable.data.type field must be a string.",
                "The selected variable.data.type is invalid.",
            ]
        );
    }

    #[test]
    fn unknown_type_is_invalid() {
        assert_eq!(
            validate(&with_data("type", Some(json!("invalid-string")))),
            vec!["The selected variable.data.type is invalid."]
        );
        assert_eq!(
            validate(&with_data("type", Some(json!("INT")))),
            vec!["The selected variable.data.type is invalid."]
        );
    }

    #[test]
    fn container_value_reports_type_name() {
        assert_eq!(
            validate(&with_data("value", Some(json!(["test-value"])))),
            vec![
                "The variable.data.value must be one of these types: int, float, bool, string \"array\" given."
            ]
        );
        assert_eq!(
            validate(&with_data("value", Some(json!({"nested": true})))),
            vec![
                "The variable.data.value must be one of these types: int, float, bool, string \"array\" given."
            ]
        );
    }

    #[test]
    fn null_or_empty_value_is_required_error() {
        for value in [json!(null), json!({}), json!([]), json!("")] {
            assert_eq!(
                validate(&with_data("value", Some(value.clone()))),
                vec!["The variable.data.value field is required."],
                "value {}",
                value
            );
        }
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(
            validate(&with_data("created_at", Some(json!("invalid-date")))),
            vec!["The variable.data.created at field must be a valid date."]
        );
        assert_eq!(
            validate(&with_data("updated_at", Some(json!(1712524103)))),
            vec!["The variable.data.updated at field must be a valid date."]
        );
    }

    #[test]
    fn unexpected_keys_reject_mapping() {
        let body = with_data("extra", Some(json!("x")));
        assert_eq!(validate(&body), vec!["The variable.data field must be an array."]);
    }

    #[test]
    fn errors_follow_rule_order() {
        let mut body = with_data("slug", None);
        body["variable"]["data"]["type"] = json!(1);
        body["variable"]["data"]["value"] = json!(null);

        assert_eq!(
            validate(&body),
            vec![
                "The variable.data.slug field is required.",
                "The variable.data.type field must be a string.",
                "The selected variable.data.type is invalid.",
                "The variable.data.value field is required.",
            ]
        );
    }

    #[test]
    fn non_object_root_reports_every_required_field() {
        let errors = validate(&json!(null));
        assert_eq!(
            errors,
            vec![
                "The variable field is required.",
                "The variable.data field is required.",
                "The variable.data.slug field is required.",
                "The variable.data.type field is required.",
                "The variable.data.created at field is required.",
                "The variable.data.updated at field is required.",
                "The variable.data.value field is required.",
            ]
        );
        assert_eq!(validate(&json!(["variable"])), errors);
    }

    #[test]
    fn scalar_variable_is_not_a_mapping() {
        let errors = validate(&json!({"variable": "nope"}));
        assert_eq!(errors[0], "The variable field must be an array.");
        assert_eq!(errors[1], "The variable.data field is required.");
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn validation_is_deterministic() {
        let body = with_data("type", Some(json!(1)));
        assert_eq!(validate(&body), validate(&body));
    }
}
