//! Conversion logic between DTOs and domain entities.

use ensemble_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    Member, QueueItem, RoomSnapshot, RoomSummary, ServerMessage, Timestamp, Video,
};
use crate::infrastructure::dto::{
    http::RoomSummaryDto,
    websocket::{MemberDto, MessageType, QueueItemDto, RoomStateMessage, RoomStatePayload, VideoDto},
};

// ========================================
// DTO → Domain Entity
// ========================================

impl From<VideoDto> for Video {
    fn from(dto: VideoDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            thumbnail: dto.thumbnail,
            channel: dto.channel,
            timestamp: dto.timestamp,
        }
    }
}

impl From<QueueItemDto> for QueueItem {
    fn from(dto: QueueItemDto) -> Self {
        Self {
            video: dto.video.into(),
            added_by: dto.added_by,
            added_at: dto.added_at.map(Timestamp::new),
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Video> for VideoDto {
    fn from(model: Video) -> Self {
        Self {
            id: model.id,
            title: model.title,
            thumbnail: model.thumbnail,
            channel: model.channel,
            timestamp: model.timestamp,
        }
    }
}

impl From<QueueItem> for QueueItemDto {
    fn from(model: QueueItem) -> Self {
        Self {
            video: model.video.into(),
            added_by: model.added_by,
            added_at: model.added_at.map(|t| t.value()),
        }
    }
}

impl From<Member> for MemberDto {
    fn from(model: Member) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            joined_at: model.joined_at.value(),
        }
    }
}

impl From<RoomSnapshot> for RoomStateMessage {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            r#type: MessageType::RoomState,
            room_id: snapshot.room_id.into_string(),
            state: RoomStatePayload {
                members: snapshot.members.into_iter().map(Into::into).collect(),
                current_video: snapshot.current_video.map(Into::into),
                queue: snapshot.queue.into_iter().map(Into::into).collect(),
                playing: snapshot.playing,
                playhead_position_sec: snapshot.playhead_position_sec,
                started_at_ms: snapshot.started_at.map(|t| t.value()),
                position_sec: snapshot.position_sec,
                server_now_ms: snapshot.server_now.value(),
            },
        }
    }
}

impl From<&ServerMessage> for RoomStateMessage {
    fn from(message: &ServerMessage) -> Self {
        match message {
            ServerMessage::RoomState(snapshot) => snapshot.clone().into(),
        }
    }
}

impl From<RoomSummary> for RoomSummaryDto {
    fn from(model: RoomSummary) -> Self {
        Self {
            id: model.id.into_string(),
            members: model.member_names,
            clients: model.client_count,
            playing: model.playing,
            created_at: timestamp_to_rfc3339(model.created_at.value()).unwrap_or_default(),
        }
    }
}
