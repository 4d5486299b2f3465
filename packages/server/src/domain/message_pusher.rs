//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信（通知）のインターフェース。
//! シリアライズと送信チャネルの管理は Infrastructure 層が担当します。

use tokio::sync::mpsc;

use super::{command::ServerMessage, error::MessagePushError, value_object::ConnectionId};

/// Outbound channel of one connection (serialized JSON text frames)
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Fire-and-forget delivery of server messages to connections.
#[cfg_attr(test, mockall::automock)]
pub trait MessagePusher: Send {
    fn register_client(&mut self, connection_id: ConnectionId, channel: PusherChannel);

    fn unregister_client(&mut self, connection_id: &ConnectionId);

    fn push_to(
        &self,
        connection_id: &ConnectionId,
        message: &ServerMessage,
    ) -> Result<(), MessagePushError>;

    /// Serialize once and send to every open target.
    ///
    /// Unknown or closed targets are skipped; returns how many sends succeeded.
    fn broadcast(&self, targets: &[ConnectionId], message: &ServerMessage) -> usize;
}
