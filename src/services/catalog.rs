use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::domain::Provider;
use crate::error::CatalogError;
use crate::messages::{CatalogRequest, ServiceResponse};
use crate::query::{self, ProviderQuery};

/// Catalog actor: owns the provider roster and answers search and admin
/// moderation requests. Providers are kept in insertion order because search
/// results break sort ties by it.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    providers: Vec<Provider>,
}

impl CatalogService {
    pub fn new(
        buffer_size: usize,
        providers: Vec<Provider>,
    ) -> (Self, mpsc::Sender<CatalogRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            providers,
        };
        (service, sender)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Search { query, respond_to } => {
                    self.handle_search(query, respond_to);
                }
                CatalogRequest::GetProvider { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                CatalogRequest::ListProviders { filter, respond_to } => {
                    self.handle_list(filter, respond_to);
                }
                CatalogRequest::PendingProviders { respond_to } => {
                    self.handle_pending(respond_to);
                }
                CatalogRequest::Approve { id, respond_to } => {
                    self.handle_approve(id, respond_to);
                }
                CatalogRequest::Reject { id, respond_to } => {
                    self.handle_reject(id, respond_to);
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
            }
        }

        info!("CatalogService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_search(
        &self,
        query: ProviderQuery,
        respond_to: ServiceResponse<Vec<Provider>, CatalogError>,
    ) {
        debug!("Processing search request");

        let result = query::search_providers(&self.providers, &query);
        info!(count = result.len(), "Search completed");

        let _ = respond_to.send(Ok(result));
    }

    #[instrument(fields(provider_id = %id), skip(self, id, respond_to))]
    fn handle_get(&self, id: String, respond_to: ServiceResponse<Option<Provider>, CatalogError>) {
        debug!("Processing get_provider request");

        let provider = self.providers.iter().find(|p| p.id == id).cloned();
        match &provider {
            Some(provider) => debug!(provider_name = %provider.name, "Provider found"),
            None => debug!("Provider not found"),
        }

        let _ = respond_to.send(Ok(provider));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(
        &self,
        filter: Option<String>,
        respond_to: ServiceResponse<Vec<Provider>, CatalogError>,
    ) {
        debug!("Processing list_providers request");

        let providers = match filter {
            Some(text) => query::filter_providers_admin(&self.providers, &text),
            None => self.providers.clone(),
        };
        info!(count = providers.len(), "Listed providers");

        let _ = respond_to.send(Ok(providers));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_pending(&self, respond_to: ServiceResponse<Vec<Provider>, CatalogError>) {
        debug!("Processing pending_providers request");

        let pending: Vec<Provider> = self
            .providers
            .iter()
            .filter(|p| !p.verified)
            .cloned()
            .collect();
        info!(count = pending.len(), "Listed pending providers");

        let _ = respond_to.send(Ok(pending));
    }

    #[instrument(fields(provider_id = %id), skip(self, id, respond_to))]
    fn handle_approve(&mut self, id: String, respond_to: ServiceResponse<(), CatalogError>) {
        debug!("Processing approve request");

        let result = match self.providers.iter_mut().find(|p| p.id == id) {
            Some(provider) => {
                provider.verified = true;
                info!(provider_name = %provider.name, "Provider approved");
                Ok(())
            }
            None => Err(CatalogError::NotFound(id)),
        };

        let _ = respond_to.send(result);
    }

    /// Rejection removes the provider from the roster entirely.
    #[instrument(fields(provider_id = %id), skip(self, id, respond_to))]
    fn handle_reject(&mut self, id: String, respond_to: ServiceResponse<(), CatalogError>) {
        debug!("Processing reject request");

        let result = match self.providers.iter().position(|p| p.id == id) {
            Some(index) => {
                let removed = self.providers.remove(index);
                info!(provider_name = %removed.name, "Provider rejected and removed");
                Ok(())
            }
            None => Err(CatalogError::NotFound(id)),
        };

        let _ = respond_to.send(result);
    }
}
