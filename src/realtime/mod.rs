//! Realtime push channel.
//!
//! A single [`RealtimeHub`] lives for the whole process. HTTP handlers
//! publish community events into it, and every WebSocket connection holds a
//! [`Subscription`] that drains it. There are no rooms, no presence and no
//! replay: a client that is not connected when an event goes out never
//! sees it and has to refetch over HTTP.

pub mod event;
pub mod hub;

pub use event::{ClientMessage, CommentsUpdate, RealtimeEvent};
pub use hub::{ConnectionId, RealtimeHub, Subscription};
