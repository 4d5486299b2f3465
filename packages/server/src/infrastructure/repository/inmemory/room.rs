//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセスの終了とともに
//! 全てのルームは失われます（永続化は行いません）。
//!
//! バッキングマップは `with_rooms` で注入できるため、テストごとに
//! 独立したインスタンスを構築できます。

use std::collections::HashMap;

use crate::domain::{Room, RoomId, RoomRepository, Timestamp};

/// インメモリ Room Repository 実装
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    /// Key: room id, Value: Room ドメインモデル
    rooms: HashMap<RoomId, Room>,
}

impl InMemoryRoomRepository {
    /// 空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のバッキングマップから作成
    pub fn with_rooms(rooms: HashMap<RoomId, Room>) -> Self {
        Self { rooms }
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    fn get_or_create(&mut self, room_id: &RoomId, now: Timestamp) -> &mut Room {
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!("Room '{}' created", room_id);
            Room::new(room_id.clone(), now)
        })
    }

    fn remove(&mut self, room_id: &RoomId) -> Option<Room> {
        self.rooms.remove(room_id)
    }

    fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn count(&self) -> usize {
        self.rooms.len()
    }
}
