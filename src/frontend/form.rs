//! The add/edit form: four text fields plus the id of the record under edit.

use serde_json::Value;

use crate::model::{Customer, CustomerId, CustomerPayload, DOB_FORMAT};
use crate::schema::CUSTOMER_FIELDS;

/// Field values exactly as the user typed them.
///
/// Nothing is parsed here; the server's schema has the last word on types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub id: Option<CustomerId>,
    pub name: String,
    pub dob: String,
    pub member_number: String,
    pub interests: String,
}

impl CustomerForm {
    /// A form pre-filled from an existing record.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id),
            name: customer.name.clone(),
            dob: customer.dob.format(DOB_FORMAT).to_string(),
            member_number: customer.member_number.to_string(),
            interests: customer.interests.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Value of a field by its wire name.
    pub fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "dob" => Some(&self.dob),
            "memberNumber" => Some(&self.member_number),
            "interests" => Some(&self.interests),
            _ => None,
        }
    }

    /// First required field left blank, in display order.
    pub fn missing_required(&self) -> Option<&'static str> {
        CUSTOMER_FIELDS
            .iter()
            .filter(|spec| spec.required)
            .find(|spec| self.value(spec.name).map_or(true, |v| v.trim().is_empty()))
            .map(|spec| spec.name)
    }

    /// The request body for POST or PUT. The id is only present while editing.
    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            id: self.id.map(|id| id.to_string()),
            name: Some(Value::from(self.name.clone())),
            dob: Some(Value::from(self.dob.clone())),
            member_number: Some(Value::from(self.member_number.clone())),
            interests: Some(Value::from(self.interests.clone())),
        }
    }
}
