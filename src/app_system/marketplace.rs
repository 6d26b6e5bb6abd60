use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, instrument};

use crate::clients::{BookingClient, CatalogClient, IdentityClient};
use crate::seed;
use crate::services::{BookingService, CatalogService, IdentityService};
use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};

const CHANNEL_BUFFER: usize = 100;

/// Startup knobs for the marketplace system.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Where the session slot lives on disk. `None` keeps the session in
    /// memory only (tests, hosts without a writable disk).
    pub session_path: Option<PathBuf>,
    /// Delay applied to login attempts, modeling the upstream identity call.
    pub login_latency: Duration,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            session_path: Some(PathBuf::from("./data/localx_session.json")),
            login_latency: Duration::from_millis(500),
        }
    }
}

impl MarketplaceConfig {
    /// In-memory session, no login latency. What tests want.
    pub fn ephemeral() -> Self {
        Self {
            session_path: None,
            login_latency: Duration::ZERO,
        }
    }
}

/// The marketplace system: starts the three services, wires clients together,
/// seeds demo data, and handles graceful shutdown.
pub struct Marketplace {
    pub identity_client: IdentityClient,
    pub catalog_client: CatalogClient,
    pub booking_client: BookingClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Marketplace {
    /// Create and start the entire system. The catalog starts first because
    /// the booking client validates providers against it.
    #[instrument(name = "marketplace", skip(config))]
    pub fn new(config: MarketplaceConfig) -> Self {
        let mut handles = Vec::new();

        info!("Starting marketplace system");

        let session: Box<dyn SessionStore> = match &config.session_path {
            Some(path) => Box::new(FileSessionStore::new(path.clone())),
            None => Box::new(MemorySessionStore::default()),
        };

        let (catalog_service, catalog_sender) =
            CatalogService::new(CHANNEL_BUFFER, seed::demo_providers());
        handles.push(tokio::spawn(catalog_service.run()));
        let catalog_client = CatalogClient::new(catalog_sender);

        let (booking_service, booking_sender) =
            BookingService::new(CHANNEL_BUFFER, seed::demo_bookings());
        handles.push(tokio::spawn(booking_service.run()));
        let booking_client = BookingClient::new(booking_sender, catalog_client.clone());

        let (identity_service, identity_sender) = IdentityService::new(
            CHANNEL_BUFFER,
            seed::demo_identities(),
            session,
            config.login_latency,
        );
        handles.push(tokio::spawn(identity_service.run()));
        let identity_client = IdentityClient::new(identity_sender);

        info!("Marketplace system started");

        Self {
            identity_client,
            catalog_client,
            booking_client,
            handles,
        }
    }

    /// Gracefully shut down: bookings first (they depend on the catalog),
    /// then catalog and identity, then wait for every task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace system");

        let _ = self.booking_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;
        let _ = self.identity_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Service task failed: {:?}", e));
            }
        }

        info!("Marketplace system shutdown complete");
        Ok(())
    }
}
