//! Errors raised while decoding inbound client messages.
//!
//! None of these is ever reported back to the client: the message is logged
//! and dropped, and the connection stays open.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("malformed message: {0}")]
    InvalidPayload(serde_json::Error),

    #[error("message has no roomId")]
    MissingRoomId,

    #[error("message has no type")]
    MissingType,

    #[error("unknown message type '{0}'")]
    UnknownType(String),

    #[error("'{kind}' message is missing '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl ProtocolError {
    /// Split serde failures into syntax errors and shape errors.
    pub fn from_serde(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match error.classify() {
            Category::Data => ProtocolError::InvalidPayload(error),
            Category::Io | Category::Syntax | Category::Eof => ProtocolError::InvalidJson(error),
        }
    }

    /// Unknown types are a forward-compatible no-op rather than a fault.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, ProtocolError::UnknownType(_))
    }
}
