//! WebSocket / HTTP front end.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
