//! WebSocket message DTOs.
//!
//! Inbound (client → server), every message carries `roomId`:
//!
//! ```json
//! {"type": "subscribe", "roomId": "ABCD", "userName": "Alice"}
//! {"type": "updatePlaying", "roomId": "ABCD", "state": {"playing": false}}
//! ```
//!
//! Outbound (server → client):
//!
//! ```json
//! {"type": "room_state", "roomId": "ABCD", "state": {"members": [], "positionSec": 0.0, "...": "..."}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{RoomCommand, RoomId};

use super::error::ProtocolError;

/// Outbound message type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "room_state")]
    RoomState,
}

/// Raw envelope of an inbound message; `state` is interpreted per type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMessageDto {
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub room_id: Option<String>,
    pub user_name: Option<String>,
    pub state: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItemDto {
    #[serde(flatten)]
    pub video: VideoDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: String,
    pub name: String,
    pub joined_at: i64,
}

/// Snapshot payload (`state` of a `room_state` message)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatePayload {
    pub members: Vec<MemberDto>,
    pub current_video: Option<VideoDto>,
    pub queue: Vec<QueueItemDto>,
    pub playing: bool,
    pub playhead_position_sec: f64,
    pub started_at_ms: Option<i64>,
    pub position_sec: f64,
    pub server_now_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateMessage {
    pub r#type: MessageType,
    pub room_id: String,
    pub state: RoomStatePayload,
}

/// Decode one inbound text frame into its room and command.
pub fn parse_client_message(text: &str) -> Result<(RoomId, RoomCommand), ProtocolError> {
    let dto: ClientMessageDto = serde_json::from_str(text).map_err(ProtocolError::from_serde)?;

    let room_id = dto
        .room_id
        .and_then(|id| RoomId::new(id).ok())
        .ok_or(ProtocolError::MissingRoomId)?;
    let kind = dto.r#type.ok_or(ProtocolError::MissingType)?;
    let state = dto.state.unwrap_or_default();

    let command = match kind.as_str() {
        "subscribe" => RoomCommand::Subscribe {
            user_name: dto.user_name.filter(|name| !name.is_empty()),
        },
        "leave" => RoomCommand::Leave,
        "updateTimestamp" => {
            let timestamp = state
                .get("currentVideo")
                .and_then(|video| video.get("timestamp"))
                .and_then(Value::as_f64)
                .ok_or(ProtocolError::MissingField {
                    kind: "updateTimestamp",
                    field: "state.currentVideo.timestamp",
                })?;
            RoomCommand::UpdateTimestamp { timestamp }
        }
        "updatePlaying" => {
            let playing = state.get("playing").and_then(Value::as_bool).ok_or(
                ProtocolError::MissingField {
                    kind: "updatePlaying",
                    field: "state.playing",
                },
            )?;
            RoomCommand::UpdatePlaying { playing }
        }
        "updateVideo" => {
            // `null` is meaningful (unload), only an absent field is an error
            let video = state
                .get("currentVideo")
                .cloned()
                .ok_or(ProtocolError::MissingField {
                    kind: "updateVideo",
                    field: "state.currentVideo",
                })?;
            let video: Option<VideoDto> =
                serde_json::from_value(video).map_err(ProtocolError::from_serde)?;
            RoomCommand::UpdateVideo {
                video: video.map(Into::into),
            }
        }
        "updateQueue" => {
            let queue = match state.get("queue") {
                Some(queue @ Value::Array(_)) => queue.clone(),
                _ => {
                    return Err(ProtocolError::MissingField {
                        kind: "updateQueue",
                        field: "state.queue",
                    });
                }
            };
            let queue: Vec<QueueItemDto> =
                serde_json::from_value(queue).map_err(ProtocolError::from_serde)?;
            RoomCommand::UpdateQueue {
                queue: queue.into_iter().map(Into::into).collect(),
            }
        }
        _ => return Err(ProtocolError::UnknownType(kind)),
    };

    Ok((room_id, command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subscribe() {
        // テスト項目: subscribe メッセージがルーム ID とユーザー名付きで解釈される
        // given (前提条件):
        let text = r#"{"type":"subscribe","roomId":"ABCD","userName":"Alice"}"#;

        // when (操作):
        let (room_id, command) = parse_client_message(text).unwrap();

        // then (期待する結果):
        assert_eq!(room_id.as_str(), "ABCD");
        assert_eq!(
            command,
            RoomCommand::Subscribe {
                user_name: Some("Alice".to_string())
            }
        );
    }

    #[test]
    fn test_parse_subscribe_with_empty_user_name() {
        // テスト項目: 空のユーザー名はメンバー登録なしの購読として扱われる
        // given (前提条件):
        let text = r#"{"type":"subscribe","roomId":"ABCD","userName":""}"#;

        // when (操作):
        let (_, command) = parse_client_message(text).unwrap();

        // then (期待する結果):
        assert_eq!(command, RoomCommand::Subscribe { user_name: None });
    }

    #[test]
    fn test_parse_invalid_json() {
        // テスト項目: JSON として不正なメッセージは InvalidJson になる
        // given (前提条件):
        let text = "{not json";

        // when (操作):
        let result = parse_client_message(text);

        // then (期待する結果):
        assert!(matches!(result, Err(ProtocolError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_missing_room_id() {
        // テスト項目: roomId のないメッセージは破棄対象になる
        // given (前提条件):
        let missing = r#"{"type":"leave"}"#;
        let empty = r#"{"type":"leave","roomId":""}"#;

        // when (操作):
        let missing_result = parse_client_message(missing);
        let empty_result = parse_client_message(empty);

        // then (期待する結果):
        assert!(matches!(missing_result, Err(ProtocolError::MissingRoomId)));
        assert!(matches!(empty_result, Err(ProtocolError::MissingRoomId)));
    }

    #[test]
    fn test_parse_unknown_type_is_ignorable() {
        // テスト項目: 未知の type は無視可能なエラーになる
        // given (前提条件):
        let text = r#"{"type":"chat","roomId":"ABCD"}"#;

        // when (操作):
        let error = parse_client_message(text).unwrap_err();

        // then (期待する結果):
        assert!(matches!(error, ProtocolError::UnknownType(ref t) if t == "chat"));
        assert!(error.is_ignorable());
    }

    #[test]
    fn test_parse_update_timestamp() {
        // テスト項目: updateTimestamp の位置が state.currentVideo.timestamp から読まれる
        // given (前提条件):
        let text =
            r#"{"type":"updateTimestamp","roomId":"ABCD","state":{"currentVideo":{"timestamp":12.5}}}"#;

        // when (操作):
        let (_, command) = parse_client_message(text).unwrap();

        // then (期待する結果):
        assert_eq!(command, RoomCommand::UpdateTimestamp { timestamp: 12.5 });
    }

    #[test]
    fn test_parse_update_playing_without_flag() {
        // テスト項目: state.playing のない updatePlaying は MissingField になる
        // given (前提条件):
        let text = r#"{"type":"updatePlaying","roomId":"ABCD","state":{}}"#;

        // when (操作):
        let result = parse_client_message(text);

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(ProtocolError::MissingField {
                kind: "updatePlaying",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_update_video_with_object_and_null() {
        // テスト項目: updateVideo はオブジェクトと null の両方を受け付ける
        // given (前提条件):
        let with_video = r#"{"type":"updateVideo","roomId":"ABCD","state":{"currentVideo":{"id":"abc","title":"Song","thumbnail":"t.jpg","channel":"Ch"}}}"#;
        let with_null = r#"{"type":"updateVideo","roomId":"ABCD","state":{"currentVideo":null}}"#;

        // when (操作):
        let (_, loaded) = parse_client_message(with_video).unwrap();
        let (_, cleared) = parse_client_message(with_null).unwrap();

        // then (期待する結果):
        match loaded {
            RoomCommand::UpdateVideo { video: Some(video) } => {
                assert_eq!(video.id, "abc");
                assert_eq!(video.title, "Song");
                assert_eq!(video.timestamp, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cleared, RoomCommand::UpdateVideo { video: None });
    }

    #[test]
    fn test_parse_update_video_absent_field() {
        // テスト項目: currentVideo フィールド自体がない updateVideo は破棄される
        // given (前提条件):
        let text = r#"{"type":"updateVideo","roomId":"ABCD","state":{}}"#;

        // when (操作):
        let result = parse_client_message(text);

        // then (期待する結果):
        assert!(matches!(result, Err(ProtocolError::MissingField { .. })));
    }

    #[test]
    fn test_parse_update_queue() {
        // テスト項目: updateQueue のキューが順序どおりに解釈される
        // given (前提条件):
        let text = r#"{"type":"updateQueue","roomId":"ABCD","state":{"queue":[
            {"id":"a","title":"A","thumbnail":"a.jpg","channel":"C","addedBy":"Alice","addedAt":1000},
            {"id":"b","title":"B","thumbnail":"b.jpg","channel":"C"}
        ]}}"#;

        // when (操作):
        let (_, command) = parse_client_message(text).unwrap();

        // then (期待する結果):
        let RoomCommand::UpdateQueue { queue } = command else {
            panic!("expected updateQueue");
        };
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].video.id, "a");
        assert_eq!(queue[0].added_by.as_deref(), Some("Alice"));
        assert_eq!(queue[0].added_at.map(|t| t.value()), Some(1000));
        assert_eq!(queue[1].video.id, "b");
        assert_eq!(queue[1].added_by, None);
    }

    #[test]
    fn test_parse_update_queue_not_array() {
        // テスト項目: 配列でない queue は破棄される
        // given (前提条件):
        let text = r#"{"type":"updateQueue","roomId":"ABCD","state":{"queue":"nope"}}"#;

        // when (操作):
        let result = parse_client_message(text);

        // then (期待する結果):
        assert!(matches!(result, Err(ProtocolError::MissingField { .. })));
    }

    #[test]
    fn test_room_state_message_serialization() {
        // テスト項目: room_state メッセージが camelCase の JSON になる
        // given (前提条件):
        let message = RoomStateMessage {
            r#type: MessageType::RoomState,
            room_id: "ABCD".to_string(),
            state: RoomStatePayload {
                members: vec![],
                current_video: None,
                queue: vec![],
                playing: false,
                playhead_position_sec: 0.0,
                started_at_ms: None,
                position_sec: 0.0,
                server_now_ms: 1000,
            },
        };

        // when (操作):
        let json: Value = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "room_state");
        assert_eq!(json["roomId"], "ABCD");
        assert_eq!(json["state"]["currentVideo"], Value::Null);
        assert_eq!(json["state"]["startedAtMs"], Value::Null);
        assert_eq!(json["state"]["serverNowMs"], 1000);
        assert_eq!(json["state"]["playheadPositionSec"], 0.0);
    }
}
