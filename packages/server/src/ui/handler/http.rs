//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::{http::RoomSummaryDto, websocket::RoomStateMessage},
    ui::state::AppState,
    usecase::RoomQueryError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.store.lock().await.list_rooms();

    // Domain Model から DTO への変換
    Json(rooms.into_iter().map(Into::into).collect())
}

/// Get the current snapshot of one room
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomStateMessage>, StatusCode> {
    let result = state.store.lock().await.room_snapshot(&room_id);
    match result {
        Ok(snapshot) => Ok(Json(snapshot.into())),
        Err(RoomQueryError::RoomNotFound(_)) => Err(StatusCode::NOT_FOUND),
        Err(RoomQueryError::InvalidRoomId(e)) => {
            tracing::debug!("Rejected room lookup '{}': {}", room_id, e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
