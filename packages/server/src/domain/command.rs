//! Messages exchanged with clients, in domain terms.

use super::{
    entity::{QueueItem, Video},
    snapshot::RoomSnapshot,
};

/// A client request addressed to one room.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomCommand {
    Subscribe { user_name: Option<String> },
    Leave,
    UpdateTimestamp { timestamp: f64 },
    UpdatePlaying { playing: bool },
    UpdateVideo { video: Option<Video> },
    UpdateQueue { queue: Vec<QueueItem> },
}

impl RoomCommand {
    /// Wire name of the command, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            RoomCommand::Subscribe { .. } => "subscribe",
            RoomCommand::Leave => "leave",
            RoomCommand::UpdateTimestamp { .. } => "updateTimestamp",
            RoomCommand::UpdatePlaying { .. } => "updatePlaying",
            RoomCommand::UpdateVideo { .. } => "updateVideo",
            RoomCommand::UpdateQueue { .. } => "updateQueue",
        }
    }
}

/// Server to client notifications
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    RoomState(RoomSnapshot),
}
