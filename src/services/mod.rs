//! The actor services owning the in-memory stores. Each service holds its
//! records, receives typed requests over an mpsc channel, and responds through
//! oneshot channels. One task per domain; no shared mutable state.

pub mod booking;
pub mod catalog;
pub mod identity;

pub use booking::BookingService;
pub use catalog::CatalogService;
pub use identity::IdentityService;

/// Next id counter position given already-seeded ids like `USR0003`,
/// `BKG00017`: one past the highest numeric suffix.
fn next_numeric_suffix<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| {
        let digits: String = id.chars().skip_while(|c| !c.is_ascii_digit()).collect();
        digits.parse::<u64>().ok()
    })
    .max()
    .map_or(1, |max| max + 1)
}
