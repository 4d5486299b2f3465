//! UseCase: 再生状態の更新（位置・再生/一時停止・動画の切り替え）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomStore::update_timestamp() / update_playing() / update_video()
//!
//! ### なぜこのテストが必要か
//! - 再生位置の計算はクライアント間の同期の基準になる
//! - 冗長な updatePlaying がタイミングをリセットしたり通知を送ったりしてはならない
//! - updateTimestamp は高頻度なので通知しない

use crate::domain::{RoomId, Video};

use super::RoomStore;

impl RoomStore {
    /// Patch the client-reported position of the loaded video. Never
    /// broadcasts.
    pub fn update_timestamp(&mut self, room_id: &RoomId, timestamp: f64) {
        let now = self.now();
        let room = self.repository.get_or_create(room_id, now);
        if !room.update_timestamp(timestamp) {
            tracing::debug!("Room '{}' has no video, timestamp ignored", room_id);
        }
    }

    /// Play or pause. Broadcasts only on an actual transition.
    pub fn update_playing(&mut self, room_id: &RoomId, playing: bool) {
        let now = self.now();
        let room = self.repository.get_or_create(room_id, now);
        if !room.set_playing(playing, now) {
            tracing::debug!("Room '{}' already playing={}, ignored", room_id, playing);
            return;
        }
        tracing::info!(
            "Room '{}' {} at {:.3}s",
            room_id,
            if playing { "resumed" } else { "paused" },
            room.transport.live_position(now)
        );
        self.broadcast_room_state(room_id, None);
    }

    /// Load a video (or clear it) and restart the transport.
    pub fn update_video(&mut self, room_id: &RoomId, video: Option<Video>) {
        let now = self.now();
        let room = self.repository.get_or_create(room_id, now);
        match &video {
            Some(video) => tracing::info!("Room '{}' now playing '{}'", room_id, video.id),
            None => tracing::info!("Room '{}' cleared its video", room_id),
        }
        room.load_video(video, now);
        self.broadcast_room_state(room_id, None);
    }
}
