//! Infrastructure layer: in-memory storage, WebSocket delivery and the wire
//! format.

pub mod dto;
pub mod message_pusher;
pub mod repository;
