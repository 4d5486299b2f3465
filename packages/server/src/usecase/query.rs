//! UseCase: ルーム一覧・ルーム状態の参照（HTTP API 用）

use crate::domain::{RoomId, RoomSnapshot, RoomSummary};

use super::{RoomQueryError, RoomStore};

impl RoomStore {
    /// Summaries of every live room, sorted by room id.
    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.repository
            .room_ids()
            .iter()
            .filter_map(|id| self.repository.get(id))
            .map(|room| room.summary())
            .collect()
    }

    /// Current snapshot of one room, without creating it.
    pub fn room_snapshot(&self, room_id: &str) -> Result<RoomSnapshot, RoomQueryError> {
        let room_id = RoomId::new(room_id.to_string())?;
        self.build_state_payload(&room_id)
            .ok_or_else(|| RoomQueryError::RoomNotFound(room_id.into_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ensemble_shared::time::ManualClock;

    use crate::{
        domain::ValueObjectError,
        usecase::{
            RoomQueryError,
            test_support::{T0, connect_client, create_test_store, room_id},
        },
    };

    #[test]
    fn test_list_rooms_sorted_with_members() {
        // テスト項目: ルーム一覧が ID 順でメンバー名と接続数を含む
        // given (前提条件):
        let mut store = create_test_store(Arc::new(ManualClock::new(T0)));
        let alice = connect_client(&mut store);
        let bob = connect_client(&mut store);
        store.subscribe(&alice.id, &room_id("ZETA"), Some("Alice".to_string()));
        store.subscribe(&bob.id, &room_id("ALPHA"), Some("Bob".to_string()));
        store.subscribe(&alice.id, &room_id("ALPHA"), None);

        // when (操作):
        let rooms = store.list_rooms();

        // then (期待する結果):
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id.as_str(), "ALPHA");
        assert_eq!(rooms[0].member_names, vec!["Bob".to_string()]);
        assert_eq!(rooms[0].client_count, 2);
        assert_eq!(rooms[1].id.as_str(), "ZETA");
    }

    #[test]
    fn test_room_snapshot_not_found_does_not_create() {
        // テスト項目: 存在しないルームの参照は NotFound で、ルームは作成されない
        // given (前提条件):
        let store = create_test_store(Arc::new(ManualClock::new(T0)));

        // when (操作):
        let result = store.room_snapshot("NOPE");

        // then (期待する結果):
        assert_eq!(result, Err(RoomQueryError::RoomNotFound("NOPE".to_string())));
        assert_eq!(store.room_count(), 0);
    }

    #[test]
    fn test_room_snapshot_invalid_id() {
        // テスト項目: 空のルーム ID は InvalidRoomId になる
        // given (前提条件):
        let store = create_test_store(Arc::new(ManualClock::new(T0)));

        // when (操作):
        let result = store.room_snapshot(" ");

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomQueryError::InvalidRoomId(ValueObjectError::RoomIdEmpty))
        );
    }
}
