pub mod booking;
pub mod identity;
pub mod provider;

pub use booking::*;
pub use identity::*;
pub use provider::*;
