use thiserror::Error;

use crate::domain::BookingStatus;

/// Errors that can occur during identity/session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Provider not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Invalid provider: {0}")]
    InvalidProvider(String),
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    #[error("Booking already rated: {0}")]
    AlreadyRated(String),
    #[error("Invalid rating: {0} (must be 1-5)")]
    InvalidRating(u8),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
