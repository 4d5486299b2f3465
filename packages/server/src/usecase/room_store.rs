//! The room store: owner of every room, the connection → member side table
//! and the broadcast fan-out.

use std::{collections::HashMap, sync::Arc};

use ensemble_shared::time::Clock;

use crate::domain::{
    ConnectionId, MemberId, MessagePusher, PusherChannel, RoomId, RoomRepository, RoomSnapshot,
    ServerMessage, Timestamp,
};

/// Authoritative state of all listening rooms.
///
/// The store is not internally synchronized. The server wraps it in a single
/// mutex and handles one message to completion per lock, which gives every
/// mutation and its broadcast a total order.
pub struct RoomStore {
    pub(super) repository: Box<dyn RoomRepository>,
    pub(super) message_pusher: Box<dyn MessagePusher>,
    pub(super) clock: Arc<dyn Clock>,
    /// (connection, room) → member created by that connection in that room
    pub(super) member_links: HashMap<(ConnectionId, RoomId), MemberId>,
}

impl RoomStore {
    pub fn new(
        repository: Box<dyn RoomRepository>,
        message_pusher: Box<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
            member_links: HashMap::new(),
        }
    }

    pub(super) fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    /// Register the outbound channel of a freshly accepted connection.
    pub fn connect(&mut self, connection_id: ConnectionId, channel: PusherChannel) {
        self.message_pusher.register_client(connection_id, channel);
    }

    /// Snapshot of a room with the live playhead computed now.
    pub fn build_state_payload(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        let now = self.now();
        self.repository
            .get(room_id)
            .map(|room| room.snapshot(now))
    }

    /// Member id associated with `connection_id` in `room_id`, if any.
    pub fn member_of(&self, connection_id: &ConnectionId, room_id: &RoomId) -> Option<&MemberId> {
        self.member_links.get(&(*connection_id, room_id.clone()))
    }

    pub fn room_count(&self) -> usize {
        self.repository.count()
    }

    /// Send the current snapshot to every client of the room, optionally
    /// skipping the originating connection.
    pub(super) fn broadcast_room_state(
        &self,
        room_id: &RoomId,
        exclude: Option<&ConnectionId>,
    ) -> usize {
        let Some(room) = self.repository.get(room_id) else {
            return 0;
        };
        let targets: Vec<ConnectionId> = room
            .client_ids()
            .filter(|id| Some(*id) != exclude)
            .copied()
            .collect();
        let snapshot = room.snapshot(self.now());
        tracing::debug!(
            "[broadcast] room={} members={} playing={} targets={}",
            room_id,
            snapshot.members.len(),
            snapshot.playing,
            targets.len()
        );
        self.message_pusher
            .broadcast(&targets, &ServerMessage::RoomState(snapshot))
    }
}
