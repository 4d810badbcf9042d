//! Tool argument binding and numeric coercion
//!
//! Arguments arrive as a JSON string written by the model. They are parsed,
//! bound against the tool's schema in declared order, and read back through
//! typed accessors. Any failure here becomes a [`ToolError`], which dispatch
//! turns into an error record for the model.

use serde_json::{Map, Value};
use thiserror::Error;

use super::spec::ToolSpec;

/// Problems with the arguments of a single tool call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("arguments are not valid JSON: {0}")]
    MalformedArguments(String),

    #[error("arguments must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    #[error("argument '{name}' must be a {expected}")]
    WrongType { name: String, expected: &'static str },
}

/// Arguments bound to a tool schema, in declared parameter order
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgs {
    values: Vec<(String, Value)>,
}

impl BoundArgs {
    /// Parse a raw JSON argument string and bind it
    pub fn parse(spec: &ToolSpec, raw: &str) -> Result<Self, ToolError> {
        // Some models send an empty string for tools without arguments
        let value: Value = if raw.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(raw).map_err(|e| ToolError::MalformedArguments(e.to_string()))?
        };

        match value {
            Value::Object(map) => Self::bind(spec, &map),
            other => Err(ToolError::NotAnObject(json_kind(&other))),
        }
    }

    /// Bind an argument object against the declared parameters
    pub fn bind(spec: &ToolSpec, args: &Map<String, Value>) -> Result<Self, ToolError> {
        let mut values = Vec::with_capacity(spec.parameters.len());

        for param in &spec.parameters {
            match args.get(&param.name) {
                Some(value) => values.push((param.name.clone(), value.clone())),
                None if param.required => return Err(ToolError::MissingArgument(param.name.clone())),
                None => {}
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Parameter names in bound order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(n, _)| n.as_str())
    }

    /// A required string argument
    pub fn string(&self, name: &str) -> Result<&str, ToolError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ToolError::WrongType {
                name: name.to_string(),
                expected: "string",
            }),
            None => Err(ToolError::MissingArgument(name.to_string())),
        }
    }

    /// An integer argument; `None` means not-a-number
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(coerce_integer)
    }

    /// A numeric argument; NaN when it cannot be read as a number
    pub fn number(&self, name: &str) -> f64 {
        self.get(name).map(coerce_number).unwrap_or(f64::NAN)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read an integer the lenient way: numbers truncate toward zero, strings
/// contribute their leading integer prefix (`"3 nights"` is 3). Anything else,
/// including values outside the `i64` range, is not-a-number.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_in_range)),
        Value::String(s) => integer_prefix(s),
        _ => None,
    }
}

/// Read a float the lenient way: numbers as-is, strings by their leading
/// decimal prefix (`"100 USD"` is 100.0). Anything else is NaN.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => float_prefix(s).unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive
fn truncate_in_range(f: f64) -> Option<i64> {
    let t = f.trunc();
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}

fn integer_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse().ok()
}

fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::spec::ParamType;
    use serde_json::json;

    fn spec() -> ToolSpec {
        ToolSpec::new("book", "Book a room")
            .with_param("city", ParamType::String, "City")
            .with_param("num_nights", ParamType::Integer, "Nights")
            .with_optional_param("note", ParamType::String, "Note")
    }

    #[test]
    fn test_parse_binds_in_declared_order() {
        let args = BoundArgs::parse(&spec(), r#"{"num_nights": 3, "city": "Nairobi"}"#).unwrap();
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["city", "num_nights"]);
        assert_eq!(args.string("city").unwrap(), "Nairobi");
        assert_eq!(args.integer("num_nights"), Some(3));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = BoundArgs::parse(&spec(), "{city: Nairobi").unwrap_err();
        assert!(matches!(err, ToolError::MalformedArguments(_)));
    }

    #[test]
    fn test_parse_not_an_object() {
        let err = BoundArgs::parse(&spec(), "[1, 2]").unwrap_err();
        assert_eq!(err, ToolError::NotAnObject("array"));
    }

    #[test]
    fn test_missing_required_argument() {
        let err = BoundArgs::parse(&spec(), r#"{"city": "Nairobi"}"#).unwrap_err();
        assert_eq!(err, ToolError::MissingArgument("num_nights".to_string()));
        assert_eq!(err.to_string(), "missing required argument 'num_nights'");
    }

    #[test]
    fn test_empty_arguments_string() {
        let tiny = ToolSpec::new("noop", "No arguments");
        let args = BoundArgs::parse(&tiny, "  ").unwrap();
        assert_eq!(args.names().count(), 0);
    }

    #[test]
    fn test_string_wrong_type() {
        let args = BoundArgs::parse(&spec(), r#"{"city": 42, "num_nights": 1}"#).unwrap();
        let err = args.string("city").unwrap_err();
        assert_eq!(
            err,
            ToolError::WrongType {
                name: "city".to_string(),
                expected: "string"
            }
        );
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(&json!(3)), Some(3));
        assert_eq!(coerce_integer(&json!(3.9)), Some(3));
        assert_eq!(coerce_integer(&json!(-2.5)), Some(-2));
        assert_eq!(coerce_integer(&json!("3")), Some(3));
        assert_eq!(coerce_integer(&json!("  7 nights")), Some(7));
        assert_eq!(coerce_integer(&json!("4.8")), Some(4));
        assert_eq!(coerce_integer(&json!("three")), None);
        assert_eq!(coerce_integer(&json!("")), None);
        assert_eq!(coerce_integer(&json!(true)), None);
        assert_eq!(coerce_integer(&json!(null)), None);
    }

    #[test]
    fn test_coerce_integer_out_of_range_is_not_a_number() {
        assert_eq!(coerce_integer(&json!(1e20)), None);
        assert_eq!(coerce_integer(&json!(-1e20)), None);
        assert_eq!(coerce_integer(&json!(9.3e18)), None);
        assert_eq!(coerce_integer(&json!("99999999999999999999")), None);
        assert_eq!(coerce_integer(&json!(i64::MAX)), Some(i64::MAX));
        assert_eq!(coerce_integer(&json!(-9.2e18)), Some(-9_200_000_000_000_000_000));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(100)), 100.0);
        assert_eq!(coerce_number(&json!(12.5)), 12.5);
        assert_eq!(coerce_number(&json!("100")), 100.0);
        assert_eq!(coerce_number(&json!(" 99.5 USD")), 99.5);
        assert_eq!(coerce_number(&json!(".5")), 0.5);
        assert_eq!(coerce_number(&json!("1e3")), 1000.0);
        assert_eq!(coerce_number(&json!("2e")), 2.0);
        assert_eq!(coerce_number(&json!("-Infinity")), f64::NEG_INFINITY);
        assert!(coerce_number(&json!("abc")).is_nan());
        assert!(coerce_number(&json!(".")).is_nan());
        assert!(coerce_number(&json!([1])).is_nan());
    }

    #[test]
    fn test_number_accessor_missing_is_nan() {
        let args = BoundArgs::parse(&spec(), r#"{"city": "x", "num_nights": "lots"}"#).unwrap();
        assert!(args.number("amount").is_nan());
        assert_eq!(args.integer("num_nights"), None);
    }
}
