use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::domain::{Booking, BookingCreate, BookingStatus};
use crate::error::BookingError;
use crate::messages::{BookingRequest, ServiceResponse};
use crate::query::{self, BookingQuery, BookingScope};

/// Booking actor: owns all bookings and enforces the status state machine.
/// Provider validation happens in the client before a create request reaches
/// this service. Bookings are kept in insertion order; listings never re-sort.
pub struct BookingService {
    receiver: mpsc::Receiver<BookingRequest>,
    bookings: Vec<Booking>,
    next_id: u64,
}

impl BookingService {
    pub fn new(
        buffer_size: usize,
        bookings: Vec<Booking>,
    ) -> (Self, mpsc::Sender<BookingRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_id = super::next_numeric_suffix(bookings.iter().map(|b| b.id.as_str()));
        let service = Self {
            receiver,
            bookings,
            next_id,
        };
        (service, sender)
    }

    #[instrument(name = "booking_service", skip(self))]
    pub async fn run(mut self) {
        info!("BookingService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BookingRequest::ListBookings {
                    scope,
                    query,
                    respond_to,
                } => {
                    self.handle_list(scope, query, respond_to);
                }
                BookingRequest::GetBooking { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                BookingRequest::CreateBooking {
                    payload,
                    respond_to,
                } => {
                    self.handle_create(payload, respond_to);
                }
                BookingRequest::Transition { id, to, respond_to } => {
                    self.handle_transition(id, to, respond_to);
                }
                BookingRequest::Rate {
                    id,
                    stars,
                    respond_to,
                } => {
                    self.handle_rate(id, stars, respond_to);
                }
                BookingRequest::Stats { scope, respond_to } => {
                    self.handle_stats(scope, respond_to);
                }
                BookingRequest::Shutdown => {
                    info!("BookingService shutting down");
                    break;
                }
            }
        }

        info!("BookingService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(
        &self,
        scope: BookingScope,
        query: BookingQuery,
        respond_to: ServiceResponse<Vec<Booking>, BookingError>,
    ) {
        debug!("Processing list_bookings request");

        let result = query::filter_bookings(&self.bookings, &scope, &query);
        info!(count = result.len(), "Listed bookings");

        let _ = respond_to.send(Ok(result));
    }

    #[instrument(fields(booking_id = %id), skip(self, id, respond_to))]
    fn handle_get(&self, id: String, respond_to: ServiceResponse<Option<Booking>, BookingError>) {
        debug!("Processing get_booking request");

        let booking = self.bookings.iter().find(|b| b.id == id).cloned();
        let _ = respond_to.send(Ok(booking));
    }

    #[instrument(
        fields(
            customer_id = %payload.draft.customer_id,
            provider_id = %payload.draft.provider_id,
            service = %payload.draft.service
        ),
        skip(self, payload, respond_to)
    )]
    fn handle_create(
        &mut self,
        payload: BookingCreate,
        respond_to: ServiceResponse<String, BookingError>,
    ) {
        debug!("Processing create_booking request");

        let id = format!("BKG{:05}", self.next_id);
        self.next_id += 1;

        let draft = payload.draft;
        let booking = Booking {
            id: id.clone(),
            customer_id: draft.customer_id,
            customer_name: draft.customer_name,
            provider_id: draft.provider_id,
            provider_name: payload.provider_name,
            service: draft.service,
            category: payload.category,
            date: draft.date,
            time_slot: draft.time_slot,
            status: BookingStatus::Pending,
            amount: draft.amount,
            address: draft.address,
            notes: draft.notes,
            rating: None,
            created_at: Utc::now(),
        };
        self.bookings.push(booking);

        info!(booking_id = %id, "Booking created");
        let _ = respond_to.send(Ok(id));
    }

    /// Applies a status change if the edge is in the transition table,
    /// otherwise rejects it.
    #[instrument(fields(booking_id = %id, to = %to), skip(self, id, respond_to))]
    fn handle_transition(
        &mut self,
        id: String,
        to: BookingStatus,
        respond_to: ServiceResponse<Booking, BookingError>,
    ) {
        debug!("Processing transition request");

        let result = match self.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                let from = booking.status;
                if from.can_transition(to) {
                    booking.status = to;
                    info!(from = %from, "Status updated");
                    Ok(booking.clone())
                } else {
                    warn!(from = %from, "Illegal status transition rejected");
                    Err(BookingError::IllegalTransition { from, to })
                }
            }
            None => Err(BookingError::NotFound(id)),
        };

        let _ = respond_to.send(result);
    }

    /// Rate-once: setting the same value again is a no-op success, a
    /// different value is rejected. Status is not checked here; the caller
    /// gates rating to completed bookings.
    #[instrument(fields(booking_id = %id, stars = stars), skip(self, id, respond_to))]
    fn handle_rate(
        &mut self,
        id: String,
        stars: u8,
        respond_to: ServiceResponse<Booking, BookingError>,
    ) {
        debug!("Processing rate request");

        let result = if !(1..=5).contains(&stars) {
            Err(BookingError::InvalidRating(stars))
        } else {
            match self.bookings.iter_mut().find(|b| b.id == id) {
                Some(booking) => match booking.rating {
                    None => {
                        booking.rating = Some(stars);
                        info!("Booking rated");
                        Ok(booking.clone())
                    }
                    Some(existing) if existing == stars => Ok(booking.clone()),
                    Some(_) => {
                        warn!("Attempt to overwrite an existing rating");
                        Err(BookingError::AlreadyRated(id))
                    }
                },
                None => Err(BookingError::NotFound(id)),
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_stats(
        &self,
        scope: BookingScope,
        respond_to: ServiceResponse<query::BookingStats, BookingError>,
    ) {
        debug!("Processing stats request");

        let stats = query::booking_stats(&self.bookings, &scope);
        let _ = respond_to.send(Ok(stats));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{BookingClient, CatalogClient};
    use crate::domain::{BookingDraft, Provider, ServiceCategory};
    use crate::services::CatalogService;
    use chrono::NaiveDate;

    fn seed_booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            customer_id: "USR0001".to_string(),
            customer_name: "Demo Customer".to_string(),
            provider_id: "PRV0001".to_string(),
            provider_name: "Rahul Sharma".to_string(),
            service: "Haircut".to_string(),
            category: ServiceCategory::Barber,
            date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            time_slot: "11:00 AM".to_string(),
            status,
            amount: 400,
            address: "3, Street 9, Mumbai".to_string(),
            notes: String::new(),
            rating: None,
            created_at: Utc::now(),
        }
    }

    fn seed_provider() -> Provider {
        Provider {
            id: "PRV0001".to_string(),
            name: "Rahul Sharma".to_string(),
            category: ServiceCategory::Barber,
            location: "Mumbai".to_string(),
            rating: 4.7,
            reviews: 120,
            experience: 8,
            skills: vec!["Haircut".to_string()],
            price_range: "₹100 - ₹2000".to_string(),
            available: true,
            verified: true,
            bio: String::new(),
            completed_jobs: 300,
            response_time: "10 mins".to_string(),
            avatar: String::new(),
        }
    }

    fn start(bookings: Vec<Booking>) -> BookingClient {
        let (catalog_service, catalog_sender) = CatalogService::new(16, vec![seed_provider()]);
        tokio::spawn(catalog_service.run());
        let (booking_service, booking_sender) = BookingService::new(16, bookings);
        tokio::spawn(booking_service.run());
        BookingClient::new(booking_sender, CatalogClient::new(catalog_sender))
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            customer_id: "USR0001".to_string(),
            customer_name: "Demo Customer".to_string(),
            provider_id: "PRV0001".to_string(),
            service: "Haircut".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
            time_slot: "02:00 PM".to_string(),
            amount: 400,
            address: "3, Street 9, Mumbai".to_string(),
            notes: "Please bring necessary tools.".to_string(),
        }
    }

    #[tokio::test]
    async fn create_resolves_provider_and_starts_pending() {
        let client = start(vec![]);

        let id = client.create_booking(draft()).await.unwrap();
        let booking = client.get_booking(id).await.unwrap().unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.provider_name, "Rahul Sharma");
        assert_eq!(booking.category, ServiceCategory::Barber);
    }

    #[tokio::test]
    async fn create_with_unknown_provider_fails() {
        let client = start(vec![]);
        let mut bad = draft();
        bad.provider_id = "PRV9999".to_string();

        let err = client.create_booking(bad).await.unwrap_err();
        assert_eq!(err, BookingError::InvalidProvider("PRV9999".to_string()));
    }

    #[tokio::test]
    async fn accept_moves_pending_to_accepted() {
        let client = start(vec![seed_booking("BKG00001", BookingStatus::Pending)]);

        let booking = client.accept("BKG00001".to_string()).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Accepted);
    }

    #[tokio::test]
    async fn cancel_is_allowed_from_pending_and_accepted_only() {
        let client = start(vec![
            seed_booking("BKG00001", BookingStatus::Accepted),
            seed_booking("BKG00002", BookingStatus::Completed),
        ]);

        let cancelled = client.cancel("BKG00001".to_string()).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let err = client.cancel("BKG00002".to_string()).await.unwrap_err();
        assert_eq!(
            err,
            BookingError::IllegalTransition {
                from: BookingStatus::Completed,
                to: BookingStatus::Cancelled,
            }
        );
    }

    #[tokio::test]
    async fn reject_requires_pending() {
        let client = start(vec![seed_booking("BKG00001", BookingStatus::Accepted)]);
        let err = client.reject("BKG00001".to_string()).await.unwrap_err();
        assert_eq!(
            err,
            BookingError::IllegalTransition {
                from: BookingStatus::Accepted,
                to: BookingStatus::Rejected,
            }
        );
    }

    #[tokio::test]
    async fn full_lifecycle_pending_accepted_completed() {
        let client = start(vec![seed_booking("BKG00001", BookingStatus::Pending)]);

        client.accept("BKG00001".to_string()).await.unwrap();
        let done = client.complete("BKG00001".to_string()).await.unwrap();
        assert_eq!(done.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn rate_is_idempotent_for_the_same_value_only() {
        let client = start(vec![seed_booking("BKG00001", BookingStatus::Completed)]);

        let rated = client.rate("BKG00001".to_string(), 5).await.unwrap();
        assert_eq!(rated.rating, Some(5));
        // Same value again is fine.
        let again = client.rate("BKG00001".to_string(), 5).await.unwrap();
        assert_eq!(again.rating, Some(5));
        // A different value is not.
        let err = client.rate("BKG00001".to_string(), 3).await.unwrap_err();
        assert_eq!(err, BookingError::AlreadyRated("BKG00001".to_string()));
    }

    #[tokio::test]
    async fn rate_rejects_out_of_range_values() {
        let client = start(vec![seed_booking("BKG00001", BookingStatus::Completed)]);
        let err = client.rate("BKG00001".to_string(), 0).await.unwrap_err();
        assert_eq!(err, BookingError::InvalidRating(0));
        let err = client.rate("BKG00001".to_string(), 6).await.unwrap_err();
        assert_eq!(err, BookingError::InvalidRating(6));
    }

    #[tokio::test]
    async fn operations_on_missing_ids_are_not_found() {
        let client = start(vec![]);
        let err = client.accept("BKG09999".to_string()).await.unwrap_err();
        assert_eq!(err, BookingError::NotFound("BKG09999".to_string()));
        assert!(client
            .get_booking("BKG09999".to_string())
            .await
            .unwrap()
            .is_none());
    }
}
