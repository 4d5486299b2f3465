//! UseCase: 接続の切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomStore::disconnect()
//! - 全ルームからの接続の削除、紐づくメンバーの削除、空ルームの掃除
//!
//! ### なぜこのテストが必要か
//! - ルームはクライアントとメンバーの両方が空になったときだけ削除される
//! - 切断した接続のメンバーだけが削除されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：最後の参加者の切断でルームが削除される
//! - エッジケース：メンバーが残っている / 接続が残っている場合はルームを残す

use crate::domain::ConnectionId;

use super::RoomStore;

impl RoomStore {
    /// Drop a closed connection from every room.
    ///
    /// Removes the member the connection created in each room (with a
    /// broadcast), then deletes every room left with neither clients nor
    /// members.
    pub fn disconnect(&mut self, connection_id: &ConnectionId) {
        self.message_pusher.unregister_client(connection_id);

        for room_id in self.repository.room_ids() {
            let link = self.member_links.remove(&(*connection_id, room_id.clone()));
            let Some(room) = self.repository.get_mut(&room_id) else {
                continue;
            };

            let mut member_removed = false;
            if room.remove_client(connection_id) {
                if let Some(member) = link.and_then(|member_id| room.remove_member(&member_id)) {
                    tracing::info!(
                        "Member '{}' ({}) dropped from room '{}' on disconnect",
                        member.name,
                        member.id,
                        room_id
                    );
                    member_removed = true;
                }
            }
            let abandoned = room.is_abandoned();

            if member_removed {
                self.broadcast_room_state(&room_id, None);
            }
            if abandoned {
                self.repository.remove(&room_id);
                tracing::info!("Room '{}' is empty and was removed", room_id);
            }
        }
    }
}
