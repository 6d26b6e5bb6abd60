//! Client handles for the services. Thin wrappers around message channels;
//! the `client_method!` macro generates the oneshot plumbing and tracing for
//! plain request/response methods.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::domain::{
    Booking, BookingCreate, BookingDraft, BookingStatus, Identity, Provider, RegisterData,
};
use crate::error::{AuthError, BookingError, CatalogError};
use crate::messages::{BookingRequest, CatalogRequest, IdentityRequest};
use crate::query::{BookingQuery, BookingScope, BookingStats, ProviderQuery};

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing. Channel failures map to the domain's ActorCommunication variant.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| <$error_type>::ActorCommunication("service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| <$error_type>::ActorCommunication("service dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// Identity client
// =============================================================================

#[derive(Clone)]
pub struct IdentityClient {
    sender: mpsc::Sender<IdentityRequest>,
}

impl IdentityClient {
    pub fn new(sender: mpsc::Sender<IdentityRequest>) -> Self {
        Self { sender }
    }

    // Manual method: the password must stay out of the trace fields.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: String, password: String) -> Result<Identity, AuthError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(IdentityRequest::Login {
                email,
                password,
                respond_to,
            })
            .await
            .map_err(|_| AuthError::ActorCommunication("service closed".to_string()))?;

        response
            .await
            .map_err(|_| AuthError::ActorCommunication("service dropped".to_string()))?
    }

    pub async fn block_user(&self, id: String) -> Result<Identity, AuthError> {
        self.set_blocked(id, true).await
    }

    pub async fn unblock_user(&self, id: String) -> Result<Identity, AuthError> {
        self.set_blocked(id, false).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), AuthError> {
        debug!("Sending shutdown request");
        self.sender
            .send(IdentityRequest::Shutdown)
            .await
            .map_err(|_| AuthError::ActorCommunication("service closed".to_string()))
    }
}

client_method!(IdentityClient => fn register(data: RegisterData) -> Identity as IdentityRequest::Register, Error = AuthError);
client_method!(IdentityClient => fn logout() -> () as IdentityRequest::Logout, Error = AuthError);
client_method!(IdentityClient => fn current() -> Option<Identity> as IdentityRequest::Current, Error = AuthError);
client_method!(IdentityClient => fn set_blocked(id: String, blocked: bool) -> Identity as IdentityRequest::SetBlocked, Error = AuthError);
client_method!(IdentityClient => fn list_identities(filter: Option<String>) -> Vec<Identity> as IdentityRequest::ListIdentities, Error = AuthError);

// Test-only method for internal state inspection.
#[cfg(test)]
client_method!(IdentityClient => fn identity_count() -> usize as IdentityRequest::IdentityCount, Error = AuthError);

// =============================================================================
// Catalog client
// =============================================================================

#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|_| CatalogError::ActorCommunication("service closed".to_string()))
    }
}

client_method!(CatalogClient => fn search(query: ProviderQuery) -> Vec<Provider> as CatalogRequest::Search, Error = CatalogError);
client_method!(CatalogClient => fn get_provider(id: String) -> Option<Provider> as CatalogRequest::GetProvider, Error = CatalogError);
client_method!(CatalogClient => fn list_providers(filter: Option<String>) -> Vec<Provider> as CatalogRequest::ListProviders, Error = CatalogError);
client_method!(CatalogClient => fn pending_providers() -> Vec<Provider> as CatalogRequest::PendingProviders, Error = CatalogError);
client_method!(CatalogClient => fn approve_provider(id: String) -> () as CatalogRequest::Approve, Error = CatalogError);
client_method!(CatalogClient => fn reject_provider(id: String) -> () as CatalogRequest::Reject, Error = CatalogError);

// =============================================================================
// Booking client
// =============================================================================

/// Client for the booking service. Booking creation orchestrates across
/// actors: the provider is validated against the catalog and its display
/// fields resolved before the create request is sent.
#[derive(Clone)]
pub struct BookingClient {
    sender: mpsc::Sender<BookingRequest>,
    catalog: CatalogClient,
}

impl BookingClient {
    pub fn new(sender: mpsc::Sender<BookingRequest>, catalog: CatalogClient) -> Self {
        Self { sender, catalog }
    }

    #[instrument(
        fields(customer_id = %draft.customer_id, provider_id = %draft.provider_id),
        skip(self, draft)
    )]
    pub async fn create_booking(&self, draft: BookingDraft) -> Result<String, BookingError> {
        info!("Processing create_booking request");

        // Step 1: validate the provider via the catalog service.
        let provider = match self.catalog.get_provider(draft.provider_id.clone()).await {
            Ok(Some(provider)) => {
                info!(provider_name = %provider.name, "Provider validation successful");
                provider
            }
            Ok(None) => {
                error!("Provider not found");
                return Err(BookingError::InvalidProvider(draft.provider_id));
            }
            Err(e) => {
                error!(error = %e, "Provider validation failed");
                return Err(BookingError::InvalidProvider(format!(
                    "Provider validation failed: {}",
                    e
                )));
            }
        };

        // Step 2: create the booking with the resolved provider fields.
        let payload = BookingCreate {
            provider_name: provider.name,
            category: provider.category,
            draft,
        };
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BookingRequest::CreateBooking {
                payload,
                respond_to,
            })
            .await
            .map_err(|_| BookingError::ActorCommunication("service closed".to_string()))?;

        response
            .await
            .map_err(|_| BookingError::ActorCommunication("service dropped".to_string()))?
    }

    /// Customer action.
    pub async fn cancel(&self, id: String) -> Result<Booking, BookingError> {
        self.transition(id, BookingStatus::Cancelled).await
    }

    /// Provider action.
    pub async fn accept(&self, id: String) -> Result<Booking, BookingError> {
        self.transition(id, BookingStatus::Accepted).await
    }

    /// Provider action.
    pub async fn reject(&self, id: String) -> Result<Booking, BookingError> {
        self.transition(id, BookingStatus::Rejected).await
    }

    /// Provider action, once the work is done.
    pub async fn complete(&self, id: String) -> Result<Booking, BookingError> {
        self.transition(id, BookingStatus::Completed).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), BookingError> {
        debug!("Sending shutdown request");
        self.sender
            .send(BookingRequest::Shutdown)
            .await
            .map_err(|_| BookingError::ActorCommunication("service closed".to_string()))
    }
}

client_method!(BookingClient => fn list_bookings(scope: BookingScope, query: BookingQuery) -> Vec<Booking> as BookingRequest::ListBookings, Error = BookingError);
client_method!(BookingClient => fn get_booking(id: String) -> Option<Booking> as BookingRequest::GetBooking, Error = BookingError);
client_method!(BookingClient => fn transition(id: String, to: BookingStatus) -> Booking as BookingRequest::Transition, Error = BookingError);
client_method!(BookingClient => fn rate(id: String, stars: u8) -> Booking as BookingRequest::Rate, Error = BookingError);
client_method!(BookingClient => fn stats(scope: BookingScope) -> BookingStats as BookingRequest::Stats, Error = BookingError);
