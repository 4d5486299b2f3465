//! HTTP API response DTOs.

use serde::Serialize;

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub members: Vec<String>,
    pub clients: usize,
    pub playing: bool,
    pub created_at: String,
}
