use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt::Display;
use std::str::FromStr;

/// Wire format of a date of birth.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Type-safe identifier for Customers, assigned by the store.
///
/// Travels as a decimal string (`"_id": "12"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a path or payload carries something that is not a customer id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid customer id: {0:?}")]
pub struct InvalidCustomerId(pub String);

impl FromStr for CustomerId {
    type Err = InvalidCustomerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(CustomerId)
            .map_err(|_| InvalidCustomerId(s.to_string()))
    }
}

impl TryFrom<String> for CustomerId {
    type Error = InvalidCustomerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.to_string()
    }
}

/// A club member as stored and as returned by the API.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](record_actor::ActorEntity) trait, so the
/// customer store is a [`ResourceActor<Customer>`](record_actor::ResourceActor).
/// See [`crate::customer_actor`] for the payloads, hooks and the unique member number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: CustomerId,
    pub name: String,
    #[serde(with = "dob_format")]
    pub dob: NaiveDate,
    pub member_number: i64,
    #[serde(default)]
    pub interests: String,
}

impl Customer {
    pub fn new(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            dob: draft.dob,
            member_number: draft.member_number,
            interests: draft.interests,
        }
    }

    /// Replaces every field except the id.
    pub fn replace_with(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
        self.dob = draft.dob;
        self.member_number = draft.member_number;
        self.interests = draft.interests;
    }
}

/// A customer without its id: what the schema yields after casting a payload.
///
/// Used both to create a record and to replace one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub dob: NaiveDate,
    pub member_number: i64,
    pub interests: String,
}

/// Request body of `POST /customer` and `PUT /customer`.
///
/// Field values stay loosely typed here: the form sends what the user typed and the
/// [`schema`](crate::schema) decides what is missing, what coerces and what is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Value>,
}

impl CustomerPayload {
    /// Value of a field by its wire name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "name" => self.name.as_ref(),
            "dob" => self.dob.as_ref(),
            "memberNumber" => self.member_number.as_ref(),
            "interests" => self.interests.as_ref(),
            _ => None,
        }
    }
}

impl From<&Customer> for CustomerPayload {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id.to_string()),
            name: Some(Value::from(customer.name.clone())),
            dob: Some(Value::from(customer.dob.format(DOB_FORMAT).to_string())),
            member_number: Some(Value::from(customer.member_number)),
            interests: Some(Value::from(customer.interests.clone())),
        }
    }
}

/// Reads a date of birth written either as a plain date or as an RFC 3339 timestamp.
///
/// Timestamps keep their UTC calendar date, so `1990-05-01T00:00:00.000Z` is May 1st.
pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DOB_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.naive_utc().date()))
}

mod dob_format {
    use super::{parse_dob, DOB_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DOB_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_dob(&raw).ok_or_else(|| de::Error::custom(format!("invalid date of birth: {raw}")))
    }
}
