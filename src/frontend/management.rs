//! The customer management screen.
//!
//! Holds the list, the add/edit form and the edit flag, and turns user actions into API
//! calls. Rules:
//!
//! - a blank required field stops a submit before anything is sent;
//! - any non-2xx answer is reported as `Failed to ... customer: {status}` and nothing else
//!   changes;
//! - after a successful write the success alert is shown, the form cleared, and only then
//!   the list re-fetched; a failed re-fetch is [`ManagementError::Refresh`] and never turns
//!   the write into a failure;
//! - unreachable servers and undecodable answers come back as [`ManagementError::Transport`].

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use super::form::CustomerForm;
use super::prompt::Prompt;
use super::store::CustomerListStore;
use super::transport::{CustomerApi, TransportError};
use super::localized_dob;
use crate::model::{Customer, CustomerId};

#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error(transparent)]
    Transport(TransportError),
    /// The write went through but the list could not be reloaded afterwards.
    #[error("saved, but the customer list could not be reloaded: {0}")]
    Refresh(TransportError),
}

/// How a user action ended, when the server was reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The server answered with this non-2xx status.
    Rejected(u16),
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

pub struct CustomerManagement {
    store: CustomerListStore,
    prompt: Arc<dyn Prompt>,
    form: CustomerForm,
    edit_mode: bool,
}

impl CustomerManagement {
    pub fn new(api: Arc<dyn CustomerApi>, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            store: CustomerListStore::new(api),
            prompt,
            form: CustomerForm::default(),
            edit_mode: false,
        }
    }

    /// Loads the list for the first time.
    pub async fn mount(&self) -> Result<(), ManagementError> {
        self.store.refresh().await.map_err(ManagementError::Transport)
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.store.list()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Customer>> {
        self.store.subscribe()
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.form
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    /// Copies `customer` into the form; the next submit replaces it.
    pub fn begin_edit(&mut self, customer: &Customer) {
        self.form = CustomerForm::from_customer(customer);
        self.edit_mode = true;
    }

    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.edit_mode = false;
    }

    /// Sends the form: POST in create mode, PUT in edit mode.
    #[instrument(skip(self), fields(edit_mode = self.edit_mode))]
    pub async fn submit(&mut self) -> Result<Outcome, ManagementError> {
        if let Some(field) = self.form.missing_required() {
            return Err(ManagementError::MissingField(field));
        }

        let payload = self.form.to_payload();
        let (result, verb, done) = if self.edit_mode {
            (self.store.update(&payload).await, "update", "updated")
        } else {
            (self.store.create(&payload).await, "add", "added")
        };

        match result {
            Ok(customer) => {
                info!(action = done, id = %customer.id, "Customer saved");
                self.prompt.alert(&format!("Customer {done} successfully"));
                self.cancel_edit();
                self.reload().await?;
                Ok(Outcome::Completed)
            }
            Err(TransportError::Status(status)) => {
                warn!(action = verb, status, "Customer write rejected");
                self.prompt
                    .alert(&format!("Failed to {verb} customer: {status}"));
                Ok(Outcome::Rejected(status))
            }
            Err(e) => Err(ManagementError::Transport(e)),
        }
    }

    /// Deletes customer `id` once the user confirms.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: CustomerId) -> Result<Outcome, ManagementError> {
        if !self.prompt.confirm("Are you sure?") {
            return Ok(Outcome::Declined);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!(%id, "Customer deleted");
                self.prompt.alert("Customer deleted successfully");
                self.reload().await?;
                Ok(Outcome::Completed)
            }
            Err(TransportError::Status(status)) => {
                warn!(%id, status, "Customer delete rejected");
                self.prompt
                    .alert(&format!("Failed to delete customer: {status}"));
                Ok(Outcome::Rejected(status))
            }
            Err(e) => Err(ManagementError::Transport(e)),
        }
    }

    /// Re-fetches the list after a successful write.
    async fn reload(&self) -> Result<(), ManagementError> {
        self.store.refresh().await.map_err(|e| {
            warn!(error = %e, "Customer list reload failed");
            ManagementError::Refresh(e)
        })
    }

    /// The list as a text table under a `Customers (N)` heading.
    pub fn render(&self, date_format: &str) -> String {
        render_table(&self.customers(), date_format)
    }
}

const HEADERS: [&str; 5] = ["Name", "Date of Birth", "Member Number", "Interests", "Id"];

fn render_table(customers: &[Customer], date_format: &str) -> String {
    let rows: Vec<[String; 5]> = customers
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                localized_dob(c.dob, date_format),
                c.member_number.to_string(),
                c.interests.clone(),
                c.id.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = format!("Customers ({})\n", customers.len());
    out.push_str(&line(&HEADERS));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}
