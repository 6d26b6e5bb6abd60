//! Pure filter/sort logic over in-memory provider and booking slices.
//!
//! The services own the data; everything here is side-effect free so the
//! visibility rules can be unit tested without spinning up actors.

use std::cmp::Ordering;

use crate::domain::{Booking, BookingStatus, Provider, ServiceCategory};

/// Sort order for provider search results. Always descending; ties keep
/// insertion order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderSort {
    #[default]
    Rating,
    Reviews,
    Experience,
}

/// Filter state for the provider catalog.
///
/// `None` means "all" for category and location. The free-text query matches
/// the provider name or any skill, case-insensitively. Unavailable providers
/// are always excluded.
#[derive(Debug, Clone, Default)]
pub struct ProviderQuery {
    pub text: Option<String>,
    pub category: Option<ServiceCategory>,
    pub location: Option<String>,
    pub sort: ProviderSort,
}

pub fn search_providers(providers: &[Provider], query: &ProviderQuery) -> Vec<Provider> {
    let needle = query.text.as_deref().map(str::to_lowercase);

    let mut result: Vec<Provider> = providers
        .iter()
        .filter(|p| query.category.map_or(true, |c| p.category == c))
        .filter(|p| query.location.as_deref().map_or(true, |l| p.location == l))
        .filter(|p| match &needle {
            Some(needle) => {
                p.name.to_lowercase().contains(needle)
                    || p.skills.iter().any(|s| s.to_lowercase().contains(needle))
            }
            None => true,
        })
        .filter(|p| p.available)
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep insertion order.
    match query.sort {
        ProviderSort::Rating => result.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        ProviderSort::Reviews => result.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        ProviderSort::Experience => result.sort_by(|a, b| b.experience.cmp(&a.experience)),
    }

    result
}

/// Admin-side provider filter: name or location, case-insensitive.
pub fn filter_providers_admin(providers: &[Provider], text: &str) -> Vec<Provider> {
    let needle = text.to_lowercase();
    providers
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Which bookings a viewer may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingScope {
    /// A customer sees bookings they placed.
    Customer(String),
    /// A provider sees bookings assigned to them.
    Provider(String),
    /// Admin dashboards see everything.
    All,
}

impl BookingScope {
    fn admits(&self, booking: &Booking) -> bool {
        match self {
            BookingScope::Customer(id) => booking.customer_id == *id,
            BookingScope::Provider(id) => booking.provider_id == *id,
            BookingScope::All => true,
        }
    }

    /// The name of the party opposite the viewer, used for text matching.
    fn counterparty<'a>(&self, booking: &'a Booking) -> &'a str {
        match self {
            BookingScope::Customer(_) => &booking.provider_name,
            BookingScope::Provider(_) | BookingScope::All => &booking.customer_name,
        }
    }
}

/// Filter state for booking lists. `None` status means "all"; the text query
/// matches the service name or the counterparty name.
#[derive(Debug, Clone, Default)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub text: Option<String>,
}

/// Results keep the original relative order; booking lists are never re-sorted.
pub fn filter_bookings(
    bookings: &[Booking],
    scope: &BookingScope,
    query: &BookingQuery,
) -> Vec<Booking> {
    let needle = query.text.as_deref().map(str::to_lowercase);

    bookings
        .iter()
        .filter(|b| scope.admits(b))
        .filter(|b| query.status.map_or(true, |s| b.status == s))
        .filter(|b| match &needle {
            Some(needle) => {
                b.service.to_lowercase().contains(needle)
                    || scope.counterparty(b).to_lowercase().contains(needle)
            }
            None => true,
        })
        .cloned()
        .collect()
}

/// Dashboard counters for a viewer's bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub completed: usize,
    /// Sum of amounts of completed bookings.
    pub revenue: u64,
}

pub fn booking_stats(bookings: &[Booking], scope: &BookingScope) -> BookingStats {
    let mut stats = BookingStats::default();
    for booking in bookings.iter().filter(|b| scope.admits(b)) {
        stats.total += 1;
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Accepted => stats.accepted += 1,
            BookingStatus::Completed => {
                stats.completed += 1;
                stats.revenue += u64::from(booking.amount);
            }
            _ => {}
        }
    }
    stats
}
