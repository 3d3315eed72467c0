//! # customer-records
//!
//! `serve` runs the HTTP API over an in-memory store; every other command is a client of a
//! running server (`--api-url`, or `api.base_url` from the configuration).
//!
//! ```bash
//! customer-records serve --port 3000
//! customer-records add --name Alice --dob 1990-05-01 --member-number 1001 --interests chess
//! customer-records list
//! customer-records show 1
//! customer-records update 1 --interests "chess, go"
//! customer-records delete 1 --yes
//! ```

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use customer_records::api;
use customer_records::config::AppConfig;
use customer_records::frontend::{
    CustomerApi, CustomerDetail, CustomerManagement, HttpCustomerApi, Outcome, TerminalPrompt,
};
use customer_records::lifecycle::CustomerSystem;
use customer_records::model::CustomerId;
use record_actor::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "customer-records", version, about = "Manage club customers")]
struct Cli {
    /// Base URL of the customer API, overriding `api.base_url`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print every customer as a table.
    List,
    /// Print one customer.
    Show { id: CustomerId },
    /// Add a customer.
    Add(FormArgs),
    /// Replace a customer; fields not given keep their current value.
    Update {
        id: CustomerId,
        #[command(flatten)]
        fields: FormArgs,
    },
    /// Delete a customer after confirmation.
    Delete {
        id: CustomerId,
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[arg(long)]
    dob: Option<String>,
    #[arg(long)]
    member_number: Option<String>,
    #[arg(long)]
    interests: Option<String>,
}

impl FormArgs {
    fn apply(self, management: &mut CustomerManagement) {
        let form = management.form_mut();
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(dob) = self.dob {
            form.dob = dob;
        }
        if let Some(member_number) = self.member_number {
            form.member_number = member_number;
        }
        if let Some(interests) = self.interests {
            form.interests = interests;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let config = AppConfig::load().map_err(|e| format!("Invalid configuration: {e}"))?;

    setup_tracing(&config.logger.level);

    let base_url = cli.api_url.unwrap_or_else(|| config.api.base_url.clone());
    let date_format = config.display.date_format.as_str();
    let http: Arc<dyn CustomerApi> = Arc::new(HttpCustomerApi::new(base_url));

    match cli.command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            serve(&server.addr()).await
        }
        Command::List => {
            let management = CustomerManagement::new(http, Arc::new(TerminalPrompt::default()));
            management.mount().await.map_err(|e| e.to_string())?;
            print!("{}", management.render(date_format));
            Ok(())
        }
        Command::Show { id } => {
            let detail = CustomerDetail::new(http);
            let customer = detail.load(id).await.map_err(|e| e.to_string())?;
            print!("{}", CustomerDetail::render(&customer, date_format));
            Ok(())
        }
        Command::Add(fields) => {
            let mut management = CustomerManagement::new(http, Arc::new(TerminalPrompt::default()));
            fields.apply(&mut management);
            finish(management.submit().await.map_err(|e| e.to_string())?)
        }
        Command::Update { id, fields } => {
            let customer = CustomerDetail::new(http.clone())
                .load(id)
                .await
                .map_err(|e| e.to_string())?;
            let mut management = CustomerManagement::new(http, Arc::new(TerminalPrompt::default()));
            management.begin_edit(&customer);
            fields.apply(&mut management);
            finish(management.submit().await.map_err(|e| e.to_string())?)
        }
        Command::Delete { id, yes } => {
            let mut management = CustomerManagement::new(http, Arc::new(TerminalPrompt::new(yes)));
            finish(management.delete(id).await.map_err(|e| e.to_string())?)
        }
    }
}

/// A rejected request has already been reported; it still fails the process.
fn finish(outcome: Outcome) -> Result<(), String> {
    match outcome {
        Outcome::Completed | Outcome::Declined => Ok(()),
        Outcome::Rejected(status) => Err(format!("request rejected with status {status}")),
    }
}

async fn serve(addr: &str) -> Result<(), String> {
    let system = CustomerSystem::new();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    api::serve(listener, system.customer_client.clone(), shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
