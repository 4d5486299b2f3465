//! Helpers shared by the use case tests.

use std::sync::Arc;

use ensemble_shared::time::ManualClock;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, RoomId, Video},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
};

use super::RoomStore;

pub(crate) const T0: i64 = 1_700_000_000_000;

/// A registered connection whose outbound frames can be inspected
pub(crate) struct TestClient {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<String>,
}

impl TestClient {
    /// Every frame received so far, parsed as JSON
    pub fn drain(&mut self) -> Vec<Value> {
        let mut frames = Vec::new();
        while let Ok(text) = self.rx.try_recv() {
            frames.push(serde_json::from_str(&text).expect("frame should be JSON"));
        }
        frames
    }

    /// `state` of the most recent frame, discarding the others
    pub fn last_state(&mut self) -> Option<Value> {
        self.drain().pop().map(|frame| frame["state"].clone())
    }
}

pub(crate) fn create_test_store(clock: Arc<ManualClock>) -> RoomStore {
    RoomStore::new(
        Box::new(InMemoryRoomRepository::new()),
        Box::new(WebSocketMessagePusher::new()),
        clock,
    )
}

pub(crate) fn connect_client(store: &mut RoomStore) -> TestClient {
    let (tx, rx) = mpsc::unbounded_channel();
    let id = ConnectionId::generate();
    store.connect(id, tx);
    TestClient { id, rx }
}

pub(crate) fn room_id(value: &str) -> RoomId {
    RoomId::new(value.to_string()).unwrap()
}

pub(crate) fn test_video(id: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {}", id),
        thumbnail: format!("https://img.example/{}.jpg", id),
        channel: "Channel".to_string(),
        timestamp: None,
    }
}
