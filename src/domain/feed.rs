//! Feed domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::profiles::{ProfileSummary, User};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Video,
    Image,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: String,
    pub profile_id: String,
    pub kind: PostKind,
    pub content: String,
    pub media_url: Option<String>,
    /// Count before the current viewer's own like.
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub created_at: NaiveDateTime,
}

/// One viewer's local state for one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInteraction {
    pub liked: bool,
    pub comments_expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl CommentView {
    pub fn new(comment: &Comment, author: Option<&User>) -> Self {
        Self {
            id: comment.id.clone(),
            author_name: author.map_or_else(|| "Unknown user".to_string(), |u| u.name.clone()),
            author_avatar: author.and_then(|u| u.avatar.clone()),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPostView {
    pub id: String,
    pub author: ProfileSummary,
    pub kind: PostKind,
    pub content: String,
    pub media_url: Option<String>,
    pub likes: u64,
    pub liked: bool,
    pub comment_count: usize,
    pub comments_expanded: bool,
    /// Empty unless the viewer expanded the thread.
    pub comments: Vec<CommentView>,
    pub created_at: NaiveDateTime,
}

impl FeedPostView {
    pub fn new(
        post: &FeedPost,
        author: ProfileSummary,
        interaction: PostInteraction,
        comments: Vec<CommentView>,
    ) -> Self {
        Self {
            id: post.id.clone(),
            author,
            kind: post.kind,
            content: post.content.clone(),
            media_url: post.media_url.clone(),
            likes: displayed_likes(post.likes, interaction.liked),
            liked: interaction.liked,
            comment_count: post.comments.len(),
            comments_expanded: interaction.comments_expanded,
            comments: if interaction.comments_expanded {
                comments
            } else {
                Vec::new()
            },
            created_at: post.created_at,
        }
    }
}

pub fn displayed_likes(base: u64, liked: bool) -> u64 {
    base + u64::from(liked)
}

/// Result of a like toggle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggled {
    pub post_id: String,
    pub liked: bool,
    pub likes: u64,
}

/// Result of a comments toggle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsToggled {
    pub post_id: String,
    pub comments_expanded: bool,
}
