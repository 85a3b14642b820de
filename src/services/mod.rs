//! Service layer
//!
//! The data provider, per-viewer interaction state and the booking dialog
//! registry and outbox.

pub mod booking;
pub mod clock;
pub mod feed;
pub mod provider;
pub mod seed;

pub use booking::{BookingDialogs, BookingOutbox};
pub use clock::{Clock, SystemClock};
pub use feed::FeedInteractions;
pub use provider::{DataProvider, InMemoryProvider};
