//! Game Hosting Server
//!
//! Runs the HTTP server that upgrades peers to WebSocket connections and
//! hands them to the [`mr_hosting::Lobby`] for pairing into sessions.
mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use clap::Parser;
use mr_core::DEFAULT_ADDR;
use mr_core::DEFAULT_PORT;
use mr_hosting::Lobby;

/// Command-line configuration. Board size stays a compile-time constant;
/// only where to listen is configurable.
#[derive(Parser, Debug)]
#[command(name = "mr-server", about = "Two-player memory match game server")]
pub struct Cli {
    /// Bind address.
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Listening port.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

pub async fn run(cli: Cli) -> Result<(), std::io::Error> {
    let lobby = web::Data::new(Lobby::new());
    log::info!("starting matchroom server on {}:{}", cli.addr, cli.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/game/join", web::get().to(handlers::join))
    })
    .bind((cli.addr.as_str(), cli.port))?
    .run()
    .await
}
