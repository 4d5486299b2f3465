//! UseCase layer errors.

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors of read-only room lookups (HTTP API)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomQueryError {
    #[error("invalid room id: {0}")]
    InvalidRoomId(#[from] ValueObjectError),

    #[error("room '{0}' not found")]
    RoomNotFound(String),
}
