//! Routing of decoded client commands to room store operations.

use crate::domain::{ConnectionId, RoomCommand, RoomId};

use super::RoomStore;

impl RoomStore {
    /// Apply one command from `connection_id` to `room_id`.
    pub fn handle_command(
        &mut self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        command: RoomCommand,
    ) {
        tracing::debug!(
            "Handling '{}' from '{}' for room '{}'",
            command.kind(),
            connection_id,
            room_id
        );
        match command {
            RoomCommand::Subscribe { user_name } => {
                self.subscribe(connection_id, room_id, user_name)
            }
            RoomCommand::Leave => self.leave(connection_id, room_id),
            RoomCommand::UpdateTimestamp { timestamp } => self.update_timestamp(room_id, timestamp),
            RoomCommand::UpdatePlaying { playing } => self.update_playing(room_id, playing),
            RoomCommand::UpdateVideo { video } => self.update_video(room_id, video),
            RoomCommand::UpdateQueue { queue } => self.update_queue(room_id, queue),
        }
    }
}
