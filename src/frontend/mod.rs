//! # Customer Screens
//!
//! The client side of the system: a management screen that lists, adds, edits and deletes
//! customers, and a detail view for a single customer. Both talk to the HTTP API through
//! [`CustomerApi`] and report to the user through [`Prompt`].
//!
//! ```text
//! CustomerManagement ──► CustomerListStore ──► CustomerApi ──► /customer
//!        │                      │
//!        ▼                      ▼
//!     Prompt            watch::Receiver<Vec<Customer>>
//! ```

pub mod detail;
pub mod form;
pub mod management;
pub mod prompt;
pub mod store;
pub mod transport;

pub use detail::{CustomerDetail, DetailError};
pub use form::CustomerForm;
pub use management::{CustomerManagement, ManagementError, Outcome};
pub use prompt::{Prompt, TerminalPrompt};
pub use store::CustomerListStore;
pub use transport::{CustomerApi, HttpCustomerApi, TransportError};

use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::DOB_FORMAT;

/// Formats a date of birth for display, falling back to `YYYY-MM-DD` when
/// `date_format` is not a valid strftime pattern.
pub fn localized_dob(dob: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", dob.format(date_format)).is_err() {
        return dob.format(DOB_FORMAT).to_string();
    }
    out
}
