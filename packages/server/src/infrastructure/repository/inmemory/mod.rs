//! In-memory storage backends.

pub mod room;

pub use room::InMemoryRoomRepository;
