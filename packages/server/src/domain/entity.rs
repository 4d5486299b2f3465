//! Entities of the listening room domain.

use std::collections::HashSet;

use super::{
    playback::Transport,
    snapshot::{RoomSnapshot, RoomSummary},
    value_object::{ConnectionId, MemberId, RoomId, Timestamp},
};

/// A named participant of a room
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub joined_at: Timestamp,
}

impl Member {
    pub fn new(id: MemberId, name: String, joined_at: Timestamp) -> Self {
        Self {
            id,
            name,
            joined_at,
        }
    }
}

/// Video metadata relayed as-is from clients.
///
/// `timestamp` is the position last reported by a client through
/// `updateTimestamp`; it is informational and does not drive the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel: String,
    pub timestamp: Option<f64>,
}

/// A video waiting in the queue
#[derive(Debug, Clone, PartialEq)]
pub struct QueueItem {
    pub video: Video,
    pub added_by: Option<String>,
    pub added_at: Option<Timestamp>,
}

/// Room entity: shared playback state plus the connections subscribed to it.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    pub members: Vec<Member>,
    pub current_video: Option<Video>,
    /// FIFO: index 0 plays next
    pub queue: Vec<QueueItem>,
    pub transport: Transport,
    clients: HashSet<ConnectionId>,
}

impl Room {
    /// Create an empty, paused room
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            members: Vec::new(),
            current_video: None,
            queue: Vec::new(),
            transport: Transport::default(),
            clients: HashSet::new(),
        }
    }

    /// Returns `false` if the connection was already subscribed.
    pub fn add_client(&mut self, connection_id: ConnectionId) -> bool {
        self.clients.insert(connection_id)
    }

    pub fn remove_client(&mut self, connection_id: &ConnectionId) -> bool {
        self.clients.remove(connection_id)
    }

    pub fn client_ids(&self) -> impl Iterator<Item = &ConnectionId> {
        self.clients.iter()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove the member with the given id (never by name).
    pub fn remove_member(&mut self, member_id: &MemberId) -> Option<Member> {
        let index = self.members.iter().position(|m| &m.id == member_id)?;
        Some(self.members.remove(index))
    }

    /// Patch the client-reported position of the loaded video.
    ///
    /// Returns `false` when nothing is loaded.
    pub fn update_timestamp(&mut self, timestamp: f64) -> bool {
        match self.current_video.as_mut() {
            Some(video) => {
                video.timestamp = Some(timestamp);
                true
            }
            None => false,
        }
    }

    pub fn set_playing(&mut self, playing: bool, now: Timestamp) -> bool {
        self.transport.set_playing(playing, now)
    }

    /// Replace the loaded video and restart playback from zero.
    ///
    /// The transport is reset even when the video is cleared (`None`).
    pub fn load_video(&mut self, video: Option<Video>, now: Timestamp) {
        self.transport = Transport::start_from_zero(now);
        self.current_video = video;
    }

    /// Last writer wins for the whole queue.
    pub fn replace_queue(&mut self, queue: Vec<QueueItem>) {
        self.queue = queue;
    }

    /// No subscribed connection and no member left.
    pub fn is_abandoned(&self) -> bool {
        self.clients.is_empty() && self.members.is_empty()
    }

    /// Full state with the live playhead computed at `now`.
    pub fn snapshot(&self, now: Timestamp) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.id.clone(),
            members: self.members.clone(),
            current_video: self.current_video.clone(),
            queue: self.queue.clone(),
            playing: self.transport.is_playing(),
            playhead_position_sec: self.transport.playhead_position_sec(),
            started_at: self.transport.started_at(),
            position_sec: self.transport.live_position(now),
            server_now: now,
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id.clone(),
            member_names: self.members.iter().map(|m| m.name.clone()).collect(),
            client_count: self.client_count(),
            playing: self.transport.is_playing(),
            created_at: self.created_at,
        }
    }
}
