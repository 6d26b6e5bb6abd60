//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`mock_catalog`] / [`mock_booking`] to get a client-side channel and a
//! receiver, then helpers like [`expect_get_provider`] to assert behavior.
//!
//! # Testing Strategy
//! When testing *client* logic (e.g. the booking client's provider
//! validation), we don't spin up the real services. The mock client sends
//! messages to a channel we control; the test inspects the messages arriving
//! on that channel, asserts they are correct, and answers through the oneshot
//! responder. This simulates service behavior (success, failure, delays)
//! deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::clients::CatalogClient;
use crate::domain::{BookingCreate, Provider};
use crate::error::{BookingError, CatalogError};
use crate::messages::{BookingRequest, CatalogRequest};

pub fn mock_catalog(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

pub fn mock_booking(
    buffer_size: usize,
) -> (mpsc::Sender<BookingRequest>, mpsc::Receiver<BookingRequest>) {
    mpsc::channel(buffer_size)
}

/// Helper to verify that the next catalog message is a GetProvider request.
pub async fn expect_get_provider(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(
    String,
    oneshot::Sender<Result<Option<Provider>, CatalogError>>,
)> {
    match receiver.recv().await {
        Some(CatalogRequest::GetProvider { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next booking message is a CreateBooking request.
pub async fn expect_create_booking(
    receiver: &mut mpsc::Receiver<BookingRequest>,
) -> Option<(BookingCreate, oneshot::Sender<Result<String, BookingError>>)> {
    match receiver.recv().await {
        Some(BookingRequest::CreateBooking {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::BookingClient;
    use crate::domain::{BookingDraft, ServiceCategory};
    use chrono::NaiveDate;

    fn provider() -> Provider {
        Provider {
            id: "PRV0001".to_string(),
            name: "Rahul Sharma".to_string(),
            category: ServiceCategory::Electrician,
            location: "Mumbai".to_string(),
            rating: 4.8,
            reviews: 320,
            experience: 12,
            skills: vec!["Wiring Installation".to_string()],
            price_range: "₹200 - ₹2000".to_string(),
            available: true,
            verified: true,
            bio: String::new(),
            completed_jobs: 480,
            response_time: "15 mins".to_string(),
            avatar: String::new(),
        }
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            customer_id: "USR0001".to_string(),
            customer_name: "Demo Customer".to_string(),
            provider_id: "PRV0001".to_string(),
            service: "Wiring Installation".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
            time_slot: "10:00 AM".to_string(),
            amount: 800,
            address: "12, Street 4, Mumbai".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn booking_creation_validates_provider_then_creates() {
        let (catalog_client, mut catalog_rx) = mock_catalog(10);
        let (booking_sender, mut booking_rx) = mock_booking(10);
        let booking_client = BookingClient::new(booking_sender, catalog_client);

        let create_task =
            tokio::spawn(async move { booking_client.create_booking(draft()).await });

        // Expect provider validation first.
        let (provider_id, responder) = expect_get_provider(&mut catalog_rx)
            .await
            .expect("Expected GetProvider");
        assert_eq!(provider_id, "PRV0001");
        responder.send(Ok(Some(provider()))).unwrap();

        // Then the create, with the provider fields resolved.
        let (payload, responder) = expect_create_booking(&mut booking_rx)
            .await
            .expect("Expected CreateBooking");
        assert_eq!(payload.provider_name, "Rahul Sharma");
        assert_eq!(payload.category, ServiceCategory::Electrician);
        assert_eq!(payload.draft.customer_id, "USR0001");
        responder.send(Ok("BKG00001".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("BKG00001".to_string()));
    }

    #[tokio::test]
    async fn booking_creation_stops_when_provider_is_missing() {
        let (catalog_client, mut catalog_rx) = mock_catalog(10);
        let (booking_sender, mut booking_rx) = mock_booking(10);
        let booking_client = BookingClient::new(booking_sender, catalog_client);

        let create_task =
            tokio::spawn(async move { booking_client.create_booking(draft()).await });

        let (_, responder) = expect_get_provider(&mut catalog_rx)
            .await
            .expect("Expected GetProvider");
        responder.send(Ok(None)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(
            result,
            Err(BookingError::InvalidProvider("PRV0001".to_string()))
        );
        // No create request must ever reach the booking service.
        assert!(booking_rx.try_recv().is_err());
    }
}
