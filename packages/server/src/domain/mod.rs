//! Domain layer: value objects, entities, the playback state machine and the
//! interfaces the outer layers implement.

pub mod command;
pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod playback;
pub mod repository;
pub mod snapshot;
pub mod value_object;

pub use command::{RoomCommand, ServerMessage};
pub use entity::{Member, QueueItem, Room, Video};
pub use error::{MessagePushError, ValueObjectError};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use playback::Transport;
pub use repository::RoomRepository;
pub use snapshot::{RoomSnapshot, RoomSummary};
pub use value_object::{ConnectionId, MemberId, RoomId, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
