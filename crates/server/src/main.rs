//! Matchroom Server Binary
//!
//! Accepts WebSocket connections, pairs players two at a time, and runs
//! each memory match game as an independent session.

use clap::Parser;

#[tokio::main]
async fn main() {
    mr_core::log();
    let cli = mr_server::Cli::parse();
    mr_server::run(cli).await.unwrap();
}
