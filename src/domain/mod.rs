//! Domain types and view models
//!
//! Pure data and the synchronous rules over it: directory filtering, the
//! booking selection state machine, feed and call projections.

pub mod booking;
pub mod calls;
pub mod directory;
pub mod feed;
pub mod home;
pub mod profiles;
pub mod views;
