//! Read models derived from a [`Room`](super::Room).

use super::{
    entity::{Member, QueueItem, Video},
    value_object::{RoomId, Timestamp},
};

/// Full room state as sent to clients.
///
/// `position_sec` is the live playhead at `server_now`; clients anchor on
/// `server_now` and project forward with their own elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub members: Vec<Member>,
    pub current_video: Option<Video>,
    pub queue: Vec<QueueItem>,
    pub playing: bool,
    pub playhead_position_sec: f64,
    pub started_at: Option<Timestamp>,
    pub position_sec: f64,
    pub server_now: Timestamp,
}

/// Compact view of a room for listing
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub id: RoomId,
    pub member_names: Vec<String>,
    pub client_count: usize,
    pub playing: bool,
    pub created_at: Timestamp,
}
