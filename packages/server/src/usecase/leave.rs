//! UseCase: メンバーの退出処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomStore::leave()
//! - 接続に紐づくメンバーだけが削除されること
//!
//! ### なぜこのテストが必要か
//! - 同名のメンバーがいる場合に別の人を削除してはならない
//! - 削除対象がない場合はブロードキャストしない

use crate::domain::{ConnectionId, RoomId};

use super::RoomStore;

impl RoomStore {
    /// Remove the member this connection created in the room.
    ///
    /// The connection stays subscribed and keeps receiving snapshots.
    pub fn leave(&mut self, connection_id: &ConnectionId, room_id: &RoomId) {
        let now = self.now();
        let room = self.repository.get_or_create(room_id, now);

        let Some(member_id) = self.member_links.remove(&(*connection_id, room_id.clone())) else {
            tracing::debug!(
                "Connection '{}' has no member in room '{}', nothing to leave",
                connection_id,
                room_id
            );
            return;
        };

        match room.remove_member(&member_id) {
            Some(member) => {
                tracing::info!("Member '{}' ({}) left room '{}'", member.name, member.id, room_id);
                self.broadcast_room_state(room_id, None);
            }
            None => {
                tracing::debug!("Member '{}' already gone from room '{}'", member_id, room_id);
            }
        }
    }
}
