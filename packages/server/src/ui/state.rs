//! Server state shared by the handlers.

use tokio::sync::Mutex;

use crate::usecase::RoomStore;

/// Shared application state
pub struct AppState {
    /// The single room store. Holding the lock for a whole message keeps
    /// every mutation and its broadcast in one total order.
    pub store: Mutex<RoomStore>,
}
