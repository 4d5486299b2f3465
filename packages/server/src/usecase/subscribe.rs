//! UseCase: ルームへの購読（参加）処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomStore::subscribe()
//! - 接続の登録、メンバーの追加、スナップショットの送信
//!
//! ### なぜこのテストが必要か
//! - 同じ接続からの再購読でメンバーが重複してはならない
//! - 購読した本人には 1 回だけスナップショットが届く
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規メンバーの参加
//! - エッジケース：同一接続からの再購読、ユーザー名なしの購読

use crate::domain::{ConnectionId, Member, MemberId, RoomId, ServerMessage};

use super::RoomStore;

impl RoomStore {
    /// Subscribe a connection to a room, creating the room if needed.
    ///
    /// With a `user_name`, a member is added unless this connection already
    /// has one in the room. The subscriber receives the snapshot directly;
    /// every other client receives it as a broadcast.
    pub fn subscribe(
        &mut self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        user_name: Option<String>,
    ) {
        let now = self.now();
        let link = (*connection_id, room_id.clone());
        let room = self.repository.get_or_create(room_id, now);

        room.add_client(*connection_id);

        if let Some(name) = user_name {
            if self.member_links.contains_key(&link) {
                tracing::debug!(
                    "Connection '{}' already has a member in room '{}'",
                    connection_id,
                    room_id
                );
            } else {
                let member = Member::new(MemberId::generate(), name, now);
                tracing::info!(
                    "Member '{}' ({}) joined room '{}'",
                    member.name,
                    member.id,
                    room_id
                );
                self.member_links.insert(link, member.id.clone());
                room.add_member(member);
            }
        }

        let snapshot = room.snapshot(now);
        if let Err(e) = self
            .message_pusher
            .push_to(connection_id, &ServerMessage::RoomState(snapshot))
        {
            tracing::warn!("Failed to send room state to '{}': {}", connection_id, e);
        }

        self.broadcast_room_state(room_id, Some(connection_id));
    }
}
