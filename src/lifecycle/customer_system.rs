use tracing::{error, info};

use crate::clients::CustomerClient;

/// Owns the running customer store.
///
/// `CustomerSystem` spawns the Customer actor in its own Tokio task and hands out the
/// client used by the HTTP API. It is the only place that knows the store is an actor.
///
/// # Example
///
/// ```ignore
/// let system = CustomerSystem::new();
///
/// let router = api::router(system.customer_client.clone());
/// // ... serve ...
///
/// system.shutdown().await?;
/// ```
pub struct CustomerSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CustomerSystem {
    /// Creates the Customer actor and starts it. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new();

        // Customers have no dependencies (Context = ())
        let customer_handle = tokio::spawn(customer_actor.run(()));

        Self {
            customer_client,
            handles: vec![customer_handle],
        }
    }

    /// Gracefully shuts down the store.
    ///
    /// Dropping the client closes the request channel; the actor drains what is queued and
    /// exits. Clones of the client held elsewhere (a router that is still serving) keep the
    /// actor alive, so stop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every actor shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down customer store...");

        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Customer store shutdown complete.");
        Ok(())
    }
}

impl Default for CustomerSystem {
    fn default() -> Self {
        Self::new()
    }
}
