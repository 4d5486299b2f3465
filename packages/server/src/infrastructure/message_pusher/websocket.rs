//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - ServerMessage を JSON にシリアライズしてクライアントへ送信
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された sender を受け取り、送信にのみ使用します。
//! sender の先にある送信タスクが終了している（接続が閉じている）場合、
//! チャネルは closed となり、ブロードキャスト対象から外されます。

use std::collections::HashMap;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, ServerMessage},
    infrastructure::dto::websocket::RoomStateMessage,
};

/// WebSocket を使った MessagePusher 実装
#[derive(Debug, Default)]
pub struct WebSocketMessagePusher {
    /// Key: connection id, Value: 送信チャネル
    clients: HashMap<ConnectionId, PusherChannel>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }

    fn serialize(message: &ServerMessage) -> Result<String, MessagePushError> {
        match message {
            ServerMessage::RoomState(_) => serde_json::to_string(&RoomStateMessage::from(message))
                .map_err(|e| MessagePushError::Serialization(e.to_string())),
        }
    }
}

impl MessagePusher for WebSocketMessagePusher {
    fn register_client(&mut self, connection_id: ConnectionId, channel: PusherChannel) {
        self.clients.insert(connection_id, channel);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    fn unregister_client(&mut self, connection_id: &ConnectionId) {
        self.clients.remove(connection_id);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", connection_id);
    }

    fn push_to(
        &self,
        connection_id: &ConnectionId,
        message: &ServerMessage,
    ) -> Result<(), MessagePushError> {
        let sender = self
            .clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        let content = Self::serialize(message)?;
        sender
            .send(content)
            .map_err(|_| MessagePushError::ChannelClosed(connection_id.to_string()))?;
        tracing::debug!("Pushed message to connection '{}'", connection_id);
        Ok(())
    }

    fn broadcast(&self, targets: &[ConnectionId], message: &ServerMessage) -> usize {
        let content = match Self::serialize(message) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to serialize broadcast: {}", e);
                return 0;
            }
        };

        let mut delivered = 0;
        for target in targets {
            let Some(sender) = self.clients.get(target) else {
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
                continue;
            };
            // ブロードキャストでは閉じた接続をスキップし、残りへの送信を続ける
            if sender.is_closed() {
                tracing::debug!("Connection '{}' is closed, skipping", target);
                continue;
            }
            match sender.send(content.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!("Failed to push message to '{}': {}", target, e),
            }
        }
        delivered
    }
}
