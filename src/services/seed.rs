//! Built-in demo dataset.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::domain::booking::CallDuration;
use crate::domain::calls::{Call, CallStatus, PaymentStatus};
use crate::domain::feed::{Comment, FeedPost, PostKind};
use crate::domain::profiles::{AvailabilitySlot, Profile, SocialLinks, User, UserRole};

pub struct Dataset {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub posts: Vec<FeedPost>,
    pub calls: Vec<Call>,
}

/// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`, local time.
fn at(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .with_context(|| format!("bad seed timestamp {s:?}"))
}

fn slot(id: &str, day_of_week: u8, start: &str, end: &str, timezone: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        id: id.to_string(),
        day_of_week,
        start_time: start.to_string(),
        end_time: end.to_string(),
        timezone: timezone.to_string(),
    }
}

fn handle(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn avatar(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{photo}?w=150&h=150&fit=crop&crop=face"
    ))
}

fn media(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{photo}?w=500&h=300&fit=crop"
    ))
}

fn users() -> Result<Vec<User>> {
    Ok(vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            avatar: avatar("photo-1472099645785-5658abf4ff4e"),
            role: UserRole::User,
            created_at: at("2024-01-15")?,
        },
        User {
            id: "2".into(),
            name: "Sarah Wilson".into(),
            email: "sarah@example.com".into(),
            avatar: avatar("photo-1494790108755-2616b612b786"),
            role: UserRole::User,
            created_at: at("2024-02-10")?,
        },
    ])
}

fn profiles() -> Result<Vec<Profile>> {
    Ok(vec![
        Profile {
            id: "inf1".into(),
            name: "Emma Rodriguez".into(),
            email: "emma@example.com".into(),
            avatar: avatar("photo-1438761681033-6461ffad8d80"),
            bio: "Lifestyle and wellness coach with 5+ years of experience. Helping people \
                  transform their lives through mindful living and healthy habits."
                .into(),
            category: "Lifestyle & Wellness".into(),
            followers_count: 250_000,
            rating: 4.9,
            hourly_rate: Decimal::from(150),
            availability: vec![
                slot("av1", 1, "09:00", "17:00", "America/New_York"),
                slot("av2", 3, "10:00", "16:00", "America/New_York"),
            ],
            verified: true,
            social_links: SocialLinks {
                instagram: handle("@emmalifestyle"),
                youtube: handle("EmmaWellness"),
                tiktok: handle("@emmarodriguez"),
                twitter: None,
            },
            created_at: at("2023-06-01")?,
        },
        Profile {
            id: "inf2".into(),
            name: "Alex Chen".into(),
            email: "alex@example.com".into(),
            avatar: avatar("photo-1507003211169-0a1dd7228f2d"),
            bio: "Tech entrepreneur and startup mentor. Sharing insights on building \
                  successful businesses and navigating the startup ecosystem."
                .into(),
            category: "Business & Tech".into(),
            followers_count: 180_000,
            rating: 4.8,
            hourly_rate: Decimal::from(200),
            availability: vec![
                slot("av3", 2, "14:00", "18:00", "America/Los_Angeles"),
                slot("av4", 4, "13:00", "17:00", "America/Los_Angeles"),
            ],
            verified: true,
            social_links: SocialLinks {
                instagram: None,
                youtube: handle("AlexTechTalks"),
                tiktok: None,
                twitter: handle("@alexchen_tech"),
            },
            created_at: at("2023-08-15")?,
        },
        Profile {
            id: "inf3".into(),
            name: "Maya Patel".into(),
            email: "maya@example.com".into(),
            avatar: avatar("photo-1534528741775-53994a69daeb"),
            bio: "Fitness trainer and nutrition expert. Passionate about helping others \
                  achieve their health goals through sustainable lifestyle changes."
                .into(),
            category: "Fitness & Health".into(),
            followers_count: 320_000,
            rating: 4.95,
            hourly_rate: Decimal::from(120),
            availability: vec![
                slot("av5", 1, "06:00", "12:00", "America/New_York"),
                slot("av6", 5, "07:00", "15:00", "America/New_York"),
            ],
            verified: true,
            social_links: SocialLinks {
                instagram: handle("@mayafitness"),
                youtube: handle("MayaFitJourney"),
                tiktok: handle("@mayapatel_fit"),
                twitter: None,
            },
            created_at: at("2023-04-20")?,
        },
    ])
}

fn comments() -> Result<[Comment; 2]> {
    Ok([
        Comment {
            id: "c1".into(),
            user_id: "1".into(),
            content: "This is so inspiring! Thank you for sharing.".into(),
            created_at: at("2024-03-15T10:30")?,
        },
        Comment {
            id: "c2".into(),
            user_id: "2".into(),
            content: "Love your content! Keep it up! 💪".into(),
            created_at: at("2024-03-15T11:15")?,
        },
    ])
}

fn posts() -> Result<Vec<FeedPost>> {
    let [first, second] = comments()?;
    Ok(vec![
        FeedPost {
            id: "post1".into(),
            profile_id: "inf1".into(),
            kind: PostKind::Image,
            content: "Starting the week with some morning meditation and gratitude practice. \
                      What are you grateful for today? 🧘‍♀️✨"
                .into(),
            media_url: media("photo-1506905925346-21bda4d32df4"),
            likes: 1250,
            comments: vec![first.clone()],
            created_at: at("2024-03-15T08:00")?,
        },
        FeedPost {
            id: "post2".into(),
            profile_id: "inf2".into(),
            kind: PostKind::Video,
            content: "Just wrapped up an amazing mentoring session! Here are 3 key tips for \
                      early-stage startups that I shared today 🚀"
                .into(),
            media_url: media("photo-1560472354-b33ff0c44a43"),
            likes: 890,
            comments: vec![second.clone()],
            created_at: at("2024-03-14T16:30")?,
        },
        FeedPost {
            id: "post3".into(),
            profile_id: "inf3".into(),
            kind: PostKind::Image,
            content: "New workout routine dropping tomorrow! This 20-minute HIIT session will \
                      get your heart pumping 💪 Who's ready to sweat?"
                .into(),
            media_url: media("photo-1571019613454-1cb2f99b2d8b"),
            likes: 2100,
            comments: vec![first, second],
            created_at: at("2024-03-13T19:45")?,
        },
    ])
}

fn calls() -> Result<Vec<Call>> {
    Ok(vec![
        Call {
            id: "call1".into(),
            user_id: "1".into(),
            profile_id: "inf1".into(),
            scheduled_at: at("2024-03-20T15:00")?,
            duration: CallDuration::Hour,
            status: CallStatus::Scheduled,
            amount: Decimal::from(150),
            payment_status: PaymentStatus::Paid,
            room_id: None,
            recording_url: None,
            created_at: at("2024-03-15T10:00")?,
        },
        Call {
            id: "call2".into(),
            user_id: "2".into(),
            profile_id: "inf2".into(),
            scheduled_at: at("2024-03-18T14:00")?,
            duration: CallDuration::HalfHour,
            status: CallStatus::Completed,
            amount: Decimal::from(100),
            payment_status: PaymentStatus::Paid,
            room_id: Some("room_123".into()),
            recording_url: Some("https://example.com/recording/call2".into()),
            created_at: at("2024-03-10T09:00")?,
        },
    ])
}

pub fn dataset() -> Result<Dataset> {
    Ok(Dataset {
        users: users()?,
        profiles: profiles()?,
        posts: posts()?,
        calls: calls()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_parse_with_or_without_time() {
        assert_eq!(at("2024-01-15").unwrap().to_string(), "2024-01-15 00:00:00");
        assert_eq!(at("2024-03-15T10:30").unwrap().to_string(), "2024-03-15 10:30:00");
        assert!(at("15/03/2024").is_err());
    }
}
