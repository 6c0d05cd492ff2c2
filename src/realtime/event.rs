use serde::{Deserialize, Serialize};

use crate::db::models::{CommentWithReplies, CommunityPost, Field, PostWithComments};

/// Events pushed to connected clients. On the wire each one is a single
/// text frame: `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum RealtimeEvent {
    /// A post was created. Carries the stored post with an empty `comments`.
    NewPost(PostWithComments),
    /// A post changed (likes). Carries the reread row.
    PostUpdated(CommunityPost),
    /// A post's thread changed. Carries every comment with its replies.
    CommentsUpdated(CommentsUpdate),
    /// Chat payload relayed from another client, untouched.
    ReceiveMessage(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentsUpdate {
    /// Echoed as the client sent it, `null` when it sent none.
    #[serde(rename = "postId")]
    pub post_id: Option<Field>,
    pub comments: Vec<CommentWithReplies>,
}

/// Frames a client may send. Anything else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    SendMessage(serde_json::Value),
}

impl RealtimeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RealtimeEvent::NewPost(_) => "new_post",
            RealtimeEvent::PostUpdated(_) => "post_updated",
            RealtimeEvent::CommentsUpdated(_) => "comments_updated",
            RealtimeEvent::ReceiveMessage(_) => "receive_message",
        }
    }
}
