//! # Customer Records
//!
//! A small membership system: customers with a name, a date of birth, a unique member
//! number and free-text interests, kept in memory behind an HTTP API, plus the client
//! screens that manage them.
//!
//! ## Architecture
//!
//! The store is a [`ResourceActor<Customer>`](record_actor::ResourceActor): one Tokio task
//! owns every record and answers requests sent over a channel, so no lock guards the data.
//! Everything else talks to it through a [`CustomerClient`](clients::CustomerClient).
//!
//! ```text
//! frontend (CLI)                    api (customer-records serve)
//!   CustomerManagement ──HTTP──►      router ──► CustomerClient ──► ResourceActor<Customer>
//!   CustomerDetail
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Record ([`model`], [`schema`])
//! - **Role**: the wire shape of a customer and the rules a write must satisfy.
//! - **Key items**: [`Customer`](model::Customer), [`CustomerPayload`](model::CustomerPayload),
//!   [`cast`](schema::cast).
//!
//! ### 2. The Store ([`customer_actor`], [`clients`], [`lifecycle`])
//! - **Role**: the customer actor, its typed client, and starting/stopping it.
//! - **Key items**: [`CustomerError`](customer_actor::CustomerError),
//!   [`CustomerSystem`](lifecycle::CustomerSystem).
//!
//! ### 3. The API ([`api`])
//! - **Role**: `/customer` routes, status codes and error bodies.
//!
//! ### 4. The Screens ([`frontend`])
//! - **Role**: list, add, edit, delete and detail, reporting through alerts.
//! - **Key items**: [`CustomerManagement`](frontend::CustomerManagement),
//!   [`CustomerDetail`](frontend::CustomerDetail).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info customer-records serve
//! customer-records add --name Alice --dob 1990-05-01 --member-number 1001
//! customer-records list
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod frontend;
pub mod lifecycle;
pub mod model;
pub mod schema;
