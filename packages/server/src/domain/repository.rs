//! Repository trait 定義
//!
//! ドメイン層が必要とするルーム保管庫のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use super::{
    entity::Room,
    value_object::{RoomId, Timestamp},
};

/// Room Repository trait
///
/// Explicit registry of rooms keyed by room id. Every call runs while the
/// caller holds the room store exclusively, so the methods are synchronous
/// and hand out plain references.
pub trait RoomRepository: Send {
    fn get(&self, room_id: &RoomId) -> Option<&Room>;

    fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room>;

    /// Return the room, creating an empty one stamped `now` if absent.
    fn get_or_create(&mut self, room_id: &RoomId, now: Timestamp) -> &mut Room;

    fn remove(&mut self, room_id: &RoomId) -> Option<Room>;

    /// Ids of every live room, sorted.
    fn room_ids(&self) -> Vec<RoomId>;

    fn count(&self) -> usize;
}
