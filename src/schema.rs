//! # Customer Schema
//!
//! Field table for the customer record and the casting rules applied to every write.
//!
//! | Field | Type | Required | Unique |
//! |-------|------|----------|--------|
//! | `name` | text | yes | no |
//! | `dob` | date | yes | no |
//! | `memberNumber` | integer | yes | yes |
//! | `interests` | text | no (defaults to `""`) | no |
//!
//! Casting is lenient in the usual document-store way: numbers become text for text fields,
//! numeric strings become integers, timestamps become dates. A blank string counts as absent.
//! Uniqueness is not checked here; the store enforces it through
//! [`ActorEntity::unique_keys`](record_actor::ActorEntity::unique_keys).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::{parse_dob, CustomerDraft, CustomerPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Integer,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Date => "date",
            FieldKind::Integer => "integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
}

pub const NAME: FieldSpec = FieldSpec {
    name: "name",
    kind: FieldKind::Text,
    required: true,
    unique: false,
};

pub const DOB: FieldSpec = FieldSpec {
    name: "dob",
    kind: FieldKind::Date,
    required: true,
    unique: false,
};

pub const MEMBER_NUMBER: FieldSpec = FieldSpec {
    name: "memberNumber",
    kind: FieldKind::Integer,
    required: true,
    unique: true,
};

pub const INTERESTS: FieldSpec = FieldSpec {
    name: "interests",
    kind: FieldKind::Text,
    required: false,
    unique: false,
};

/// Every customer field, in display order.
pub const CUSTOMER_FIELDS: [FieldSpec; 4] = [NAME, DOB, MEMBER_NUMBER, INTERESTS];

/// Why a payload could not become a customer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("`{field}` is required")]
    Required { field: &'static str },
    #[error("cannot cast {value} to {expected} at `{field}`")]
    Cast {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl SchemaError {
    pub fn field(&self) -> &'static str {
        match self {
            SchemaError::Required { field } | SchemaError::Cast { field, .. } => field,
        }
    }
}

/// Casts a wire payload into a typed draft, field by field.
pub fn cast(payload: &CustomerPayload) -> Result<CustomerDraft, SchemaError> {
    let draft = CustomerDraft {
        name: text(&NAME, payload.field(NAME.name))?,
        dob: date(&DOB, payload.field(DOB.name))?,
        member_number: integer(&MEMBER_NUMBER, payload.field(MEMBER_NUMBER.name))?,
        interests: text(&INTERESTS, payload.field(INTERESTS.name))?,
    };
    validate(&draft)?;
    Ok(draft)
}

/// Re-checks a typed draft before it is written.
///
/// Drafts built in code skip [`cast`], so the store runs this on every create and replace.
pub fn validate(draft: &CustomerDraft) -> Result<(), SchemaError> {
    for (spec, value) in [(&NAME, &draft.name), (&INTERESTS, &draft.interests)] {
        if spec.required && value.trim().is_empty() {
            return Err(SchemaError::Required { field: spec.name });
        }
    }
    Ok(())
}

/// `None` for a missing field, JSON `null` and blank strings.
fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => Some(value),
    }
}

fn required(spec: &FieldSpec) -> SchemaError {
    SchemaError::Required { field: spec.name }
}

fn cast_error(spec: &FieldSpec, value: &Value) -> SchemaError {
    SchemaError::Cast {
        field: spec.name,
        expected: spec.kind.label(),
        value: value.to_string(),
    }
}

fn text(spec: &FieldSpec, value: Option<&Value>) -> Result<String, SchemaError> {
    match present(value) {
        None if spec.required => Err(required(spec)),
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(other) => Err(cast_error(spec, other)),
    }
}

fn date(spec: &FieldSpec, value: Option<&Value>) -> Result<chrono::NaiveDate, SchemaError> {
    let Some(value) = present(value) else {
        return Err(required(spec));
    };
    let parsed = match value {
        Value::String(s) => parse_dob(s),
        // milliseconds since the epoch
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|ts| ts.date_naive()),
        _ => None,
    };
    parsed.ok_or_else(|| cast_error(spec, value))
}

fn integer(spec: &FieldSpec, value: Option<&Value>) -> Result<i64, SchemaError> {
    let Some(value) = present(value) else {
        return Err(required(spec));
    };
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| cast_error(spec, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use serde_json::json;

    fn payload(value: Value) -> CustomerPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_cast_full_payload() {
        let draft = cast(&payload(json!({
            "name": "Alice",
            "dob": "1990-05-01",
            "memberNumber": 1001,
            "interests": "chess"
        })))
        .unwrap();

        assert_eq!(
            draft,
            CustomerDraft {
                name: "Alice".into(),
                dob: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
                member_number: 1001,
                interests: "chess".into(),
            }
        );
    }

    #[test]
    fn test_interests_default_to_empty() {
        let draft = cast(&payload(json!({
            "name": "Alice",
            "dob": "1990-05-01",
            "memberNumber": "1001"
        })))
        .unwrap();

        assert_eq!(draft.interests, "");
        assert_eq!(draft.member_number, 1001);
    }

    #[rstest]
    #[case(json!({ "dob": "1990-05-01", "memberNumber": 1 }), "name")]
    #[case(json!({ "name": "  ", "dob": "1990-05-01", "memberNumber": 1 }), "name")]
    #[case(json!({ "name": "A", "dob": null, "memberNumber": 1 }), "dob")]
    #[case(json!({ "name": "A", "dob": "", "memberNumber": 1 }), "dob")]
    #[case(json!({ "name": "A", "dob": "1990-05-01" }), "memberNumber")]
    #[case(json!({ "name": "A", "dob": "1990-05-01", "memberNumber": "" }), "memberNumber")]
    fn test_missing_required_field(#[case] body: Value, #[case] field: &str) {
        let err = cast(&payload(body)).unwrap_err();
        assert!(matches!(err, SchemaError::Required { .. }), "{err:?}");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    #[case(json!({ "name": "A", "dob": "yesterday", "memberNumber": 1 }), "dob")]
    #[case(json!({ "name": "A", "dob": "1990-02-30", "memberNumber": 1 }), "dob")]
    #[case(json!({ "name": "A", "dob": "1990-05-01", "memberNumber": "12a" }), "memberNumber")]
    #[case(json!({ "name": "A", "dob": "1990-05-01", "memberNumber": 1.5 }), "memberNumber")]
    #[case(json!({ "name": ["A"], "dob": "1990-05-01", "memberNumber": 1 }), "name")]
    fn test_cast_failure(#[case] body: Value, #[case] field: &str) {
        let err = cast(&payload(body)).unwrap_err();
        assert!(matches!(err, SchemaError::Cast { .. }), "{err:?}");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    #[case(json!("1990-05-01T00:00:00.000Z"))]
    #[case(json!("1990-05-01T23:30:00Z"))]
    #[case(json!(641520000000_i64))]
    fn test_date_coercion(#[case] dob: Value) {
        let draft = cast(&payload(json!({ "name": "A", "dob": dob, "memberNumber": 1 }))).unwrap();
        assert_eq!(draft.dob, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
    }

    #[test]
    fn test_numbers_cast_to_text() {
        let draft = cast(&payload(json!({
            "name": 42,
            "dob": "1990-05-01",
            "memberNumber": 7.0
        })))
        .unwrap();
        assert_eq!(draft.name, "42");
        assert_eq!(draft.member_number, 7);
    }

    #[test]
    fn test_only_member_number_is_unique() {
        let unique: Vec<&str> = CUSTOMER_FIELDS
            .iter()
            .filter(|f| f.unique)
            .map(|f| f.name)
            .collect();
        assert_eq!(unique, vec!["memberNumber"]);
    }
}
