//! UseCase: キューの置き換え（最後の書き込みが優先）

use crate::domain::{QueueItem, RoomId};

use super::RoomStore;

impl RoomStore {
    pub fn update_queue(&mut self, room_id: &RoomId, queue: Vec<QueueItem>) {
        let now = self.now();
        let room = self.repository.get_or_create(room_id, now);
        tracing::debug!("Room '{}' queue replaced ({} items)", room_id, queue.len());
        room.replace_queue(queue);
        self.broadcast_room_state(room_id, None);
    }
}
