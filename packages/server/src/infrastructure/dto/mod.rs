//! Data Transfer Objects (DTOs) for the listening room server.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket message DTOs and inbound parsing
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod error;
pub mod http;
pub mod websocket;

pub use error::ProtocolError;
