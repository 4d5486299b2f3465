//! Ensemble listening room server.
//!
//! Keeps the authoritative playback state of every listening room in memory
//! and fans `room_state` snapshots out to the WebSocket clients subscribed to
//! each room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
