//! Per-viewer feed interaction state.
//!
//! Likes and expanded comment threads are local to a viewer and never merged
//! into a post's base like count.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::feed::PostInteraction;

/// (post id, viewer id)
type InteractionKey = (String, String);

#[derive(Clone, Default)]
pub struct FeedInteractions {
    state: Arc<Mutex<HashMap<InteractionKey, PostInteraction>>>,
}

impl FeedInteractions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, post_id: &str, viewer_id: &str) -> PostInteraction {
        self.state
            .lock()
            .get(&(post_id.to_string(), viewer_id.to_string()))
            .copied()
            .unwrap_or_default()
    }

    fn update(
        &self,
        post_id: &str,
        viewer_id: &str,
        f: impl FnOnce(&mut PostInteraction),
    ) -> PostInteraction {
        let mut state = self.state.lock();
        let key = (post_id.to_string(), viewer_id.to_string());
        let entry = state.entry(key).or_default();
        f(entry);
        let updated = *entry;
        // Back to defaults: drop the entry rather than keep a no-op record.
        if updated == PostInteraction::default() {
            state.remove(&(post_id.to_string(), viewer_id.to_string()));
        }
        updated
    }

    /// Flip the viewer's like. Returns the new state.
    pub fn toggle_like(&self, post_id: &str, viewer_id: &str) -> bool {
        let updated = self.update(post_id, viewer_id, |i| i.liked = !i.liked);
        tracing::debug!(post_id, viewer_id, liked = updated.liked, "Like toggled");
        updated.liked
    }

    /// Flip whether the viewer sees the comment thread. Returns the new state.
    pub fn toggle_comments(&self, post_id: &str, viewer_id: &str) -> bool {
        let updated = self.update(post_id, viewer_id, |i| {
            i.comments_expanded = !i.comments_expanded
        });
        updated.comments_expanded
    }
}
