use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::db;
use crate::db::models::{
    CommentWithReplies, CommunityPost, Field, NewComment, NewPost, NewReply, PostWithComments,
};
use crate::error::AppResult;
use crate::extractors::{ApiJson, ApiPath};
use crate::realtime::{CommentsUpdate, RealtimeEvent};
use crate::state::AppState;

// Every mutation here rereads what it wrote and pushes it to the hub before
// answering, so connected clients see the same payload as the caller.

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/community", get(list_posts).post(create_post))
        .route("/api/community/{id}/like", post(like_post))
        .route("/api/community/{id}/comment", post(create_comment))
        .route("/api/comments/{id}/reply", post(create_reply))
}

async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostWithComments>>> {
    let conn = state.db.get()?;
    Ok(Json(db::community::list_posts_with_comments(&conn)?))
}

async fn create_post(
    State(state): State<AppState>,
    ApiJson(new_post): ApiJson<NewPost>,
) -> AppResult<Json<PostWithComments>> {
    let post = {
        let conn = state.db.get()?;
        let id = db::community::insert_post(&conn, &new_post)?;
        db::community::get_post(&conn, id)?
    };

    let post = PostWithComments {
        post,
        comments: Vec::new(),
    };
    state.hub.publish(RealtimeEvent::NewPost(post.clone()));

    Ok(Json(post))
}

/// Adds one like and answers with the reread row. An id with no post has no
/// row to reread, so it fails with the usual 500 instead of an empty 200 and
/// nothing is broadcast.
async fn like_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<CommunityPost>> {
    let post = {
        let conn = state.db.get()?;
        db::community::increment_likes(&conn, id)?;
        db::community::get_post(&conn, id)?
    };

    state.hub.publish(RealtimeEvent::PostUpdated(post.clone()));

    Ok(Json(post))
}

async fn create_comment(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(comment): ApiJson<NewComment>,
) -> AppResult<Json<Vec<CommentWithReplies>>> {
    let comments = {
        let conn = state.db.get()?;
        db::community::insert_comment(&conn, post_id, &comment)?;
        db::community::list_comments_with_replies(&conn, post_id)?
    };

    publish_thread(&state, Some(post_id.into()), &comments);

    Ok(Json(comments))
}

async fn create_reply(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<i64>,
    ApiJson(reply): ApiJson<NewReply>,
) -> AppResult<Json<Vec<CommentWithReplies>>> {
    let comments = {
        let conn = state.db.get()?;
        db::community::insert_reply(&conn, comment_id, &reply)?;
        db::community::list_comments_with_replies(&conn, &reply.post_id)?
    };

    publish_thread(&state, reply.post_id, &comments);

    Ok(Json(comments))
}

fn publish_thread(state: &AppState, post_id: Option<Field>, comments: &[CommentWithReplies]) {
    state
        .hub
        .publish(RealtimeEvent::CommentsUpdated(CommentsUpdate {
            post_id,
            comments: comments.to_vec(),
        }));
}
