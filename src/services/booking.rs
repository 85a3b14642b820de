//! Booking dialog registry and outbox.
//!
//! Provides:
//! - One open `BookingSelection` per (viewer, profile); opening again starts
//!   from defaults, submit and cancel close it
//! - A broadcast outbox that submitted `BookingRequest`s are emitted on

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::domain::booking::{BookingDialogView, BookingError, BookingRequest, BookingSelection, BookingUpdate};
use crate::domain::profiles::Profile;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("No booking dialog is open for profile {0}")]
    NotOpen(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// (viewer id, profile id)
type DialogKey = (String, String);

fn key(viewer_id: &str, profile_id: &str) -> DialogKey {
    (viewer_id.to_string(), profile_id.to_string())
}

#[derive(Clone, Default)]
pub struct BookingDialogs {
    open: Arc<Mutex<HashMap<DialogKey, BookingSelection>>>,
}

impl BookingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh dialog, discarding any selection left from before.
    pub fn open(&self, viewer_id: &str, profile: &Profile, now: NaiveDateTime) -> BookingDialogView {
        let selection = BookingSelection::new(profile, now);
        let view = selection.view();
        let replaced = self
            .open
            .lock()
            .insert(key(viewer_id, &profile.id), selection)
            .is_some();

        tracing::debug!(
            viewer_id,
            profile_id = %profile.id,
            replaced,
            "Booking dialog opened"
        );
        view
    }

    fn with_dialog<T>(
        &self,
        viewer_id: &str,
        profile_id: &str,
        f: impl FnOnce(&mut BookingSelection) -> Result<T, BookingError>,
    ) -> Result<T, DialogError> {
        let mut open = self.open.lock();
        let selection = open
            .get_mut(&key(viewer_id, profile_id))
            .ok_or_else(|| DialogError::NotOpen(profile_id.to_string()))?;
        Ok(f(selection)?)
    }

    pub fn view(&self, viewer_id: &str, profile_id: &str) -> Result<BookingDialogView, DialogError> {
        self.with_dialog(viewer_id, profile_id, |s| Ok(s.view()))
    }

    pub fn update(
        &self,
        viewer_id: &str,
        profile_id: &str,
        update: BookingUpdate,
    ) -> Result<BookingDialogView, DialogError> {
        self.with_dialog(viewer_id, profile_id, |s| {
            s.apply(update)?;
            tracing::debug!(
                viewer_id,
                profile_id,
                duration = s.duration().minutes(),
                date = ?s.date(),
                time = ?s.time(),
                state = ?s.state(),
                "Booking dialog updated"
            );
            Ok(s.view())
        })
    }

    /// Validate and close. An incomplete selection stays open untouched.
    pub fn submit(&self, viewer_id: &str, profile_id: &str) -> Result<BookingRequest, DialogError> {
        let mut open = self.open.lock();
        let dialog_key = key(viewer_id, profile_id);
        let selection = open
            .get_mut(&dialog_key)
            .ok_or_else(|| DialogError::NotOpen(profile_id.to_string()))?;

        let request = selection.submit()?;
        open.remove(&dialog_key);
        Ok(request)
    }

    /// Close without emitting. Returns whether a dialog was open.
    pub fn cancel(&self, viewer_id: &str, profile_id: &str) -> bool {
        self.open.lock().remove(&key(viewer_id, profile_id)).is_some()
    }
}

/// Fan-out point for submitted bookings. Nothing is stored.
#[derive(Clone)]
pub struct BookingOutbox {
    sender: broadcast::Sender<BookingRequest>,
}

impl BookingOutbox {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BookingRequest> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the request.
    pub fn emit(&self, request: BookingRequest) -> usize {
        match self.sender.send(request) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(request)) => {
                tracing::debug!(profile_id = %request.profile_id, "Booking emitted with no subscribers");
                0
            }
        }
    }
}

/// Log every booking that goes through the outbox until it closes.
pub async fn log_bookings(mut receiver: broadcast::Receiver<BookingRequest>) {
    loop {
        match receiver.recv().await {
            Ok(request) => tracing::info!(
                profile_id = %request.profile_id,
                scheduled = %request.scheduled_date_time,
                duration = u32::from(request.duration),
                has_message = request.message.is_some(),
                "Booking requested"
            ),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Booking log fell behind")
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
