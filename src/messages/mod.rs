use tokio::sync::oneshot;

use crate::domain::{Booking, BookingCreate, BookingStatus, Identity, Provider, RegisterData};
use crate::error::{AuthError, BookingError, CatalogError};
use crate::query::{BookingQuery, BookingScope, BookingStats, ProviderQuery};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes
/// parameters and a oneshot channel for responses.

#[derive(Debug)]
pub enum IdentityRequest {
    Login {
        email: String,
        password: String,
        respond_to: ServiceResponse<Identity, AuthError>,
    },
    Register {
        data: RegisterData,
        respond_to: ServiceResponse<Identity, AuthError>,
    },
    Logout {
        respond_to: ServiceResponse<(), AuthError>,
    },
    Current {
        respond_to: ServiceResponse<Option<Identity>, AuthError>,
    },
    SetBlocked {
        id: String,
        blocked: bool,
        respond_to: ServiceResponse<Identity, AuthError>,
    },
    ListIdentities {
        filter: Option<String>,
        respond_to: ServiceResponse<Vec<Identity>, AuthError>,
    },
    Shutdown,
    #[cfg(test)]
    IdentityCount {
        respond_to: ServiceResponse<usize, AuthError>,
    },
}

#[derive(Debug)]
pub enum CatalogRequest {
    Search {
        query: ProviderQuery,
        respond_to: ServiceResponse<Vec<Provider>, CatalogError>,
    },
    GetProvider {
        id: String,
        respond_to: ServiceResponse<Option<Provider>, CatalogError>,
    },
    ListProviders {
        filter: Option<String>,
        respond_to: ServiceResponse<Vec<Provider>, CatalogError>,
    },
    PendingProviders {
        respond_to: ServiceResponse<Vec<Provider>, CatalogError>,
    },
    Approve {
        id: String,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    Reject {
        id: String,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum BookingRequest {
    ListBookings {
        scope: BookingScope,
        query: BookingQuery,
        respond_to: ServiceResponse<Vec<Booking>, BookingError>,
    },
    GetBooking {
        id: String,
        respond_to: ServiceResponse<Option<Booking>, BookingError>,
    },
    CreateBooking {
        payload: BookingCreate,
        respond_to: ServiceResponse<String, BookingError>,
    },
    Transition {
        id: String,
        to: BookingStatus,
        respond_to: ServiceResponse<Booking, BookingError>,
    },
    Rate {
        id: String,
        stars: u8,
        respond_to: ServiceResponse<Booking, BookingError>,
    },
    Stats {
        scope: BookingScope,
        respond_to: ServiceResponse<BookingStats, BookingError>,
    },
    Shutdown,
}
