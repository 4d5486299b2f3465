//! Listening room server.
//!
//! Keeps shared playback rooms in memory and broadcasts their state to every
//! subscribed WebSocket client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin ensemble-server
//! cargo run --bin ensemble-server -- --host 127.0.0.1 --port 4000
//! PORT=4000 cargo run --bin ensemble-server
//! ```

use std::sync::Arc;

use clap::Parser;
use ensemble_server::{
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    ui::Server,
    usecase::RoomStore,
};
use ensemble_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "ensemble-server")]
#[command(about = "Listening room server with synchronized playback", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3001)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. RoomStore
    // 4. Server
    let repository = InMemoryRoomRepository::new();
    let message_pusher = WebSocketMessagePusher::new();
    let store = RoomStore::new(
        Box::new(repository),
        Box::new(message_pusher),
        Arc::new(SystemClock),
    );

    let server = Server::new(store);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
