//! Domain error types.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("room id must not be empty")]
    RoomIdEmpty,
}

/// Errors raised while pushing a message to a single client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("connection to client '{0}' is closed")]
    ChannelClosed(String),

    #[error("failed to serialize message: {0}")]
    Serialization(String),
}
