//! UseCase layer: the room store and its operations.
//!
//! Each inbound message is applied by exactly one `RoomStore` method, which
//! mutates the room and performs the resulting fan-out before returning.

mod disconnect;
mod dispatch;
mod error;
mod leave;
mod playback;
mod query;
mod room_store;
mod subscribe;
mod update_queue;

#[cfg(test)]
mod test_support;

pub use error::RoomQueryError;
pub use room_store::RoomStore;
