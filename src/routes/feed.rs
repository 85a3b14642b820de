//! Feed routes
//!
//! Posts are rendered for the session viewer: their likes are folded into the
//! displayed count and comment bodies appear only for expanded threads.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::feed::{
    displayed_likes, CommentView, CommentsToggled, FeedPost, FeedPostView, LikeToggled,
};
use crate::domain::profiles::ProfileSummary;
use crate::error::{ApiError, ApiResult};
use crate::session::CurrentUser;

fn find_post(state: &AppState, post_id: &str) -> ApiResult<FeedPost> {
    state
        .provider
        .get_post(post_id)
        .ok_or_else(|| ApiError::not_found(format!("Post {post_id} not found")))
}

fn render_post(state: &AppState, post: &FeedPost, viewer_id: &str) -> ApiResult<FeedPostView> {
    let author = state
        .provider
        .get_profile(&post.profile_id)
        .map(|p| ProfileSummary::from(&p))
        .ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!(
                "post {} references missing profile {}",
                post.id,
                post.profile_id
            ))
        })?;

    let interaction = state.feed.get(&post.id, viewer_id);
    let comments = if interaction.comments_expanded {
        post.comments
            .iter()
            .map(|c| CommentView::new(c, state.provider.get_user(&c.user_id).as_ref()))
            .collect()
    } else {
        Vec::new()
    };

    Ok(FeedPostView::new(post, author, interaction, comments))
}

/// GET /feed
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let posts = state
        .provider
        .list_posts()
        .iter()
        .map(|post| render_post(&state, post, &viewer.id))
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(DataResponse::new(posts)))
}

/// POST /feed/:post_id/like
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let post = find_post(&state, &post_id)?;
    let liked = state.feed.toggle_like(&post.id, &viewer.id);

    Ok(Json(DataResponse::new(LikeToggled {
        post_id: post.id,
        liked,
        likes: displayed_likes(post.likes, liked),
    })))
}

/// POST /feed/:post_id/comments
pub async fn toggle_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
    viewer: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let post = find_post(&state, &post_id)?;
    let comments_expanded = state.feed.toggle_comments(&post.id, &viewer.id);

    Ok(Json(DataResponse::new(CommentsToggled {
        post_id: post.id,
        comments_expanded,
    })))
}
