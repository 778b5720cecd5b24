use crate::dataset::Dataset;
use crate::error::{LoadError, ValidationReason};
use crate::geometry::limits::{self, DATASET_KEY};
use crate::model::Mountain;
use serde_json::{Map, Value};
use std::collections::HashSet;

pub fn parse_dataset_str(text: &str) -> Result<Dataset, LoadError> {
    if text.len() > limits::MAX_DATASET_BYTES {
        return Err(LoadError::MalformedFormat(format!(
            "payload of {} bytes exceeds {} byte cap",
            text.len(),
            limits::MAX_DATASET_BYTES
        )));
    }
    let v: Value = serde_json::from_str(text).map_err(|e| LoadError::MalformedFormat(e.to_string()))?;
    parse_dataset_value(&v)
}

pub fn parse_dataset_value(v: &Value) -> Result<Dataset, LoadError> {
    let root = v
        .as_object()
        .ok_or_else(|| LoadError::MalformedFormat("top-level value must be an object".into()))?;
    let records = match root.get(DATASET_KEY) {
        None | Some(Value::Null) => {
            return Err(LoadError::validation(None, DATASET_KEY, ValidationReason::Missing))
        }
        Some(Value::Array(a)) => a,
        Some(_) => {
            return Err(LoadError::validation(
                None,
                DATASET_KEY,
                ValidationReason::WrongType { expected: "array" },
            ))
        }
    };
    if records.is_empty() {
        return Err(LoadError::validation(None, DATASET_KEY, ValidationReason::Empty));
    }
    if records.len() > limits::MAX_DATASET_RECORDS {
        return Err(LoadError::validation(
            None,
            DATASET_KEY,
            ValidationReason::TooMany { limit: limits::MAX_DATASET_RECORDS },
        ));
    }
    let mut mountains = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        mountains.push(record_from_value(i, r)?);
    }
    validate_records(mountains)
}

/// Checks already-typed records, e.g. ones built in code rather than parsed.
pub fn validate_records(mountains: Vec<Mountain>) -> Result<Dataset, LoadError> {
    if mountains.is_empty() {
        return Err(LoadError::validation(None, DATASET_KEY, ValidationReason::Empty));
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(mountains.len());
    for (i, m) in mountains.iter().enumerate() {
        check_text(i, "id", &m.id)?;
        check_text(i, "name", &m.name)?;
        check_dimension(i, "height", m.height)?;
        check_dimension(i, "width", m.width)?;
        if !seen.insert(m.id.as_str()) {
            return Err(LoadError::validation(Some(i), "id", ValidationReason::Duplicate(m.id.clone())));
        }
    }
    Ok(Dataset::from_validated(mountains))
}

fn record_from_value(i: usize, v: &Value) -> Result<Mountain, LoadError> {
    let obj = v
        .as_object()
        .ok_or_else(|| LoadError::validation(Some(i), "record", ValidationReason::WrongType { expected: "object" }))?;
    Ok(Mountain {
        id: required_str(i, obj, "id")?,
        name: required_str(i, obj, "name")?,
        height: required_number(i, obj, "height")?,
        width: required_number(i, obj, "width")?,
        country: optional_str(i, obj, "country")?,
        region: optional_str(i, obj, "region")?,
    })
}

fn required_str(i: usize, obj: &Map<String, Value>, key: &str) -> Result<String, LoadError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(LoadError::validation(Some(i), key, ValidationReason::Missing)),
        Some(Value::String(s)) => {
            check_text(i, key, s)?;
            Ok(s.clone())
        }
        Some(_) => Err(LoadError::validation(Some(i), key, ValidationReason::WrongType { expected: "string" })),
    }
}

fn optional_str(i: usize, obj: &Map<String, Value>, key: &str) -> Result<Option<String>, LoadError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(LoadError::validation(Some(i), key, ValidationReason::WrongType { expected: "string" })),
    }
}

fn required_number(i: usize, obj: &Map<String, Value>, key: &str) -> Result<f64, LoadError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(LoadError::validation(Some(i), key, ValidationReason::Missing)),
        Some(Value::Number(n)) => {
            let x = n
                .as_f64()
                .ok_or_else(|| LoadError::validation(Some(i), key, ValidationReason::NotFinite))?;
            check_dimension(i, key, x)?;
            Ok(x)
        }
        Some(_) => Err(LoadError::validation(Some(i), key, ValidationReason::WrongType { expected: "number" })),
    }
}

fn check_text(i: usize, key: &str, s: &str) -> Result<(), LoadError> {
    if s.trim().is_empty() {
        return Err(LoadError::validation(Some(i), key, ValidationReason::Empty));
    }
    Ok(())
}

fn check_dimension(i: usize, key: &str, x: f64) -> Result<(), LoadError> {
    if !x.is_finite() {
        return Err(LoadError::validation(Some(i), key, ValidationReason::NotFinite));
    }
    if !limits::is_positive_dimension(x) {
        return Err(LoadError::validation(Some(i), key, ValidationReason::NotPositive));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_optional_fields_are_absent() {
        let v = json!({"mountains": [{"id": "a", "name": "A", "height": 1, "width": 2, "country": null}]});
        let ds = parse_dataset_value(&v).unwrap();
        assert_eq!(ds.get("a").unwrap().country, None);
    }

    #[test]
    fn whitespace_only_name_is_empty() {
        let v = json!({"mountains": [{"id": "a", "name": "  ", "height": 1, "width": 2}]});
        let err = parse_dataset_value(&v).unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.index(), Some(0));
    }
}
