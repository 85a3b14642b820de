//! Profile domain types
//!
//! Users of the marketplace and the bookable creator profiles, with the view
//! models the profile page is built from.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::views::View;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Influencer,
}

/// A marketplace account. Comment authors and callers are users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Recurring weekly window in which a profile takes calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub id: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    /// `HH:MM`, 24-hour
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
}

impl AvailabilitySlot {
    pub fn day_name(&self) -> Option<&'static str> {
        DAY_NAMES.get(usize::from(self.day_of_week)).copied()
    }

    /// Valid day, `HH:MM` bounds, and start strictly before end.
    pub fn is_well_formed(&self) -> bool {
        self.day_name().is_some()
            && is_hh_mm(&self.start_time)
            && is_hh_mm(&self.end_time)
            && self.start_time < self.end_time
    }
}

fn is_hh_mm(s: &str) -> bool {
    let Some((h, m)) = s.split_once(':') else {
        return false;
    };
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    two_digits(h)
        && two_digits(m)
        && h.parse::<u8>().is_ok_and(|h| h < 24)
        && m.parse::<u8>().is_ok_and(|m| m < 60)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Instagram,
    Youtube,
    Tiktok,
    Twitter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialHandle {
    pub platform: SocialPlatform,
    pub handle: String,
}

impl SocialLinks {
    /// Platforms with a non-empty handle, in a fixed platform order.
    pub fn present(&self) -> Vec<SocialHandle> {
        [
            (SocialPlatform::Instagram, &self.instagram),
            (SocialPlatform::Youtube, &self.youtube),
            (SocialPlatform::Tiktok, &self.tiktok),
            (SocialPlatform::Twitter, &self.twitter),
        ]
        .into_iter()
        .filter_map(|(platform, handle)| {
            handle
                .as_deref()
                .filter(|h| !h.is_empty())
                .map(|h| SocialHandle {
                    platform,
                    handle: h.to_string(),
                })
        })
        .collect()
    }
}

/// A bookable creator profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: String,
    pub category: String,
    pub followers_count: u64,
    pub rating: f64,
    pub hourly_rate: Decimal,
    pub availability: Vec<AvailabilitySlot>,
    pub verified: bool,
    pub social_links: SocialLinks,
    pub created_at: NaiveDateTime,
}

/// Card-sized projection used by lists (directory, home, feed, calls).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub category: String,
    pub followers_count: u64,
    pub rating: f64,
    pub hourly_rate: Decimal,
    pub verified: bool,
    pub link: String,
}

impl From<&Profile> for ProfileSummary {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            avatar: p.avatar.clone(),
            category: p.category.clone(),
            followers_count: p.followers_count,
            rating: p.rating,
            hourly_rate: p.hourly_rate,
            verified: p.verified,
            link: View::Profile(p.id.clone()).path(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub id: String,
    pub day_of_week: u8,
    pub day_name: &'static str,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
}

/// Full profile page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(flatten)]
    pub summary: ProfileSummary,
    pub bio: String,
    pub social: Vec<SocialHandle>,
    pub availability: Vec<SlotView>,
    pub back_link: String,
}

impl From<&Profile> for ProfileView {
    fn from(p: &Profile) -> Self {
        let availability = p
            .availability
            .iter()
            .filter_map(|slot| {
                slot.day_name().map(|day_name| SlotView {
                    id: slot.id.clone(),
                    day_of_week: slot.day_of_week,
                    day_name,
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    timezone: slot.timezone.clone(),
                })
            })
            .collect();

        Self {
            summary: ProfileSummary::from(p),
            bio: p.bio.clone(),
            social: p.social_links.present(),
            availability,
            back_link: View::Directory.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: u8, start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot {
            id: "s".into(),
            day_of_week: day,
            start_time: start.into(),
            end_time: end.into(),
            timezone: "America/New_York".into(),
        }
    }

    #[test]
    fn slot_validation() {
        assert!(slot(1, "09:00", "17:00").is_well_formed());
        assert!(!slot(1, "17:00", "09:00").is_well_formed());
        assert!(!slot(1, "09:00", "09:00").is_well_formed());
        assert!(!slot(7, "09:00", "17:00").is_well_formed());
        assert!(!slot(2, "9:00", "17:00").is_well_formed());
        assert!(!slot(2, "09:00", "24:00").is_well_formed());
    }

    #[test]
    fn slot_times_must_be_plain_digits() {
        assert!(!slot(2, "+9:00", "17:00").is_well_formed());
        assert!(!slot(2, "09:00", "17:+0").is_well_formed());
        assert!(!slot(2, " 9:00", "17:00").is_well_formed());
    }

    #[test]
    fn day_names_start_on_sunday() {
        assert_eq!(slot(0, "09:00", "10:00").day_name(), Some("Sunday"));
        assert_eq!(slot(6, "09:00", "10:00").day_name(), Some("Saturday"));
    }

    #[test]
    fn only_present_handles_are_listed() {
        let links = SocialLinks {
            youtube: Some("AlexTechTalks".into()),
            twitter: Some("@alexchen_tech".into()),
            tiktok: Some(String::new()),
            ..Default::default()
        };

        let present = links.present();
        assert_eq!(present.len(), 2);
        assert_eq!(present[0].platform, SocialPlatform::Youtube);
        assert_eq!(present[1].handle, "@alexchen_tech");
    }
}
