//! System orchestration, startup, and shutdown logic.

pub mod marketplace;
pub mod tracing;

pub use marketplace::*;
pub use self::tracing::*;
