//! Video call records
//!
//! Calls are display-only: the dashboard groups them into tabs and lists
//! the actions each status would offer, but no status ever changes.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::booking::CallDuration;
use super::profiles::ProfileSummary;
use super::views::View;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallsError {
    #[error("Unknown call tab: {0}")]
    UnknownTab(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub user_id: String,
    pub profile_id: String,
    pub scheduled_at: NaiveDateTime,
    pub duration: CallDuration,
    pub status: CallStatus,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub room_id: Option<String>,
    pub recording_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallTab {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl CallTab {
    pub fn includes(self, status: CallStatus) -> bool {
        match self {
            Self::Upcoming => matches!(status, CallStatus::Scheduled | CallStatus::Ongoing),
            Self::Completed => status == CallStatus::Completed,
            Self::Cancelled => status == CallStatus::Cancelled,
        }
    }
}

impl FromStr for CallTab {
    type Err = CallsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CallsError::UnknownTab(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallAction {
    Join,
    Reschedule,
    Cancel,
    ViewRecording,
    DownloadReceipt,
    BookAgain,
}

pub fn actions_for(call: &Call) -> Vec<CallAction> {
    match call.status {
        CallStatus::Scheduled => vec![CallAction::Join, CallAction::Reschedule, CallAction::Cancel],
        CallStatus::Ongoing => vec![CallAction::Join],
        CallStatus::Completed => {
            let mut actions = Vec::with_capacity(3);
            if call.recording_url.is_some() {
                actions.push(CallAction::ViewRecording);
            }
            actions.push(CallAction::DownloadReceipt);
            actions.push(CallAction::BookAgain);
            actions
        }
        CallStatus::Cancelled => Vec::new(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallView {
    pub id: String,
    pub profile: Option<ProfileSummary>,
    pub scheduled_at: NaiveDateTime,
    pub duration: CallDuration,
    pub status: CallStatus,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub recording_url: Option<String>,
    pub actions: Vec<CallAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_again_link: Option<String>,
}

impl CallView {
    pub fn new(call: &Call, profile: Option<ProfileSummary>) -> Self {
        let actions = actions_for(call);
        let book_again_link = actions
            .contains(&CallAction::BookAgain)
            .then(|| View::Profile(call.profile_id.clone()).path());

        Self {
            id: call.id.clone(),
            profile,
            scheduled_at: call.scheduled_at,
            duration: call.duration,
            status: call.status,
            amount: call.amount,
            payment_status: call.payment_status,
            recording_url: call.recording_url.clone(),
            actions,
            book_again_link,
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct TabCounts {
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl TabCounts {
    pub fn tally(calls: &[Call]) -> Self {
        let count = |tab: CallTab| calls.iter().filter(|c| tab.includes(c.status)).count();
        Self {
            upcoming: count(CallTab::Upcoming),
            completed: count(CallTab::Completed),
            cancelled: count(CallTab::Cancelled),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyCallsView {
    pub tab: CallTab,
    pub counts: TabCounts,
    pub calls: Vec<CallView>,
    pub empty: bool,
}
