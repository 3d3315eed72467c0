//! # Observability & Tracing
//!
//! Structured logging for the record actors and everything built on them.
//!
//! The actor logs its lifecycle (`Actor started`, `Shutdown`) at `info`, each committed
//! mutation at `info` with the record id and store size, each request at `debug`, and every
//! rejection (validation, duplicate key, unknown id) at `warn`. All lines carry
//! `entity_type` so several stores can share one log.
//!
//! ```bash
//! RUST_LOG=info customer-records serve
//! RUST_LOG=debug customer-records serve      # request payloads
//! RUST_LOG=record_actor=debug,info customer-records serve
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise `default_level` (e.g. `"info"`) applies.
/// Lines go to stderr, leaving stdout to whatever the program prints.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
