//! Data provider
//!
//! Views read the dataset only through `DataProvider`, so a real backend can
//! replace the in-memory implementation without touching handlers.

use anyhow::{bail, ensure, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::domain::calls::Call;
use crate::domain::feed::FeedPost;
use crate::domain::profiles::{Profile, User};

use super::seed;

pub trait DataProvider: Send + Sync {
    /// All profiles in display order.
    fn list_profiles(&self) -> Vec<Profile>;

    fn get_profile(&self, id: &str) -> Option<Profile>;

    /// Calls requested by `user_id`, in dataset order.
    fn list_calls(&self, user_id: &str) -> Vec<Call>;

    fn list_posts(&self) -> Vec<FeedPost>;

    fn get_post(&self, id: &str) -> Option<FeedPost>;

    fn get_user(&self, id: &str) -> Option<User>;
}

/// Static dataset held for the life of the process.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    users: Vec<User>,
    profiles: Vec<Profile>,
    posts: Vec<FeedPost>,
    calls: Vec<Call>,
}

impl InMemoryProvider {
    /// Builds the provider, refusing datasets that break profile invariants
    /// or reference unknown records.
    pub fn new(
        users: Vec<User>,
        profiles: Vec<Profile>,
        posts: Vec<FeedPost>,
        calls: Vec<Call>,
    ) -> Result<Self> {
        let mut profile_ids = HashSet::new();
        for profile in &profiles {
            ensure!(
                profile_ids.insert(profile.id.as_str()),
                "duplicate profile id {}",
                profile.id
            );
            ensure!(
                profile.hourly_rate > Decimal::ZERO,
                "profile {} has a non-positive hourly rate",
                profile.id
            );
            ensure!(
                (0.0..=5.0).contains(&profile.rating),
                "profile {} has rating {} outside 0-5",
                profile.id,
                profile.rating
            );
            if let Some(slot) = profile.availability.iter().find(|s| !s.is_well_formed()) {
                bail!("profile {} has malformed availability slot {}", profile.id, slot.id);
            }
        }

        let user_ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        for post in &posts {
            ensure!(
                profile_ids.contains(post.profile_id.as_str()),
                "post {} references unknown profile {}",
                post.id,
                post.profile_id
            );
            if let Some(comment) = post
                .comments
                .iter()
                .find(|c| !user_ids.contains(c.user_id.as_str()))
            {
                bail!("comment {} references unknown user {}", comment.id, comment.user_id);
            }
        }
        for call in &calls {
            ensure!(
                profile_ids.contains(call.profile_id.as_str()),
                "call {} references unknown profile {}",
                call.id,
                call.profile_id
            );
        }

        Ok(Self {
            users,
            profiles,
            posts,
            calls,
        })
    }

    /// Provider loaded with the built-in demo dataset.
    pub fn seeded() -> Result<Self> {
        let dataset = seed::dataset()?;
        Self::new(dataset.users, dataset.profiles, dataset.posts, dataset.calls)
    }
}

impl DataProvider for InMemoryProvider {
    fn list_profiles(&self) -> Vec<Profile> {
        self.profiles.clone()
    }

    fn get_profile(&self, id: &str) -> Option<Profile> {
        self.profiles.iter().find(|p| p.id == id).cloned()
    }

    fn list_calls(&self, user_id: &str) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect()
    }

    fn list_posts(&self) -> Vec<FeedPost> {
        self.posts.clone()
    }

    fn get_post(&self, id: &str) -> Option<FeedPost> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    fn get_user(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}
