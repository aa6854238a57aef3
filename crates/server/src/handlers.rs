use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use mr_hosting::Lobby;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Upgrades the request to a WebSocket and admits the peer to the lobby.
/// Game traffic flows over the upgraded connection from here on.
pub async fn join(
    lobby: web::Data<Lobby>,
    req: HttpRequest,
    body: web::Payload,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            lobby.join(session, stream).await;
            response
        }
        Err(e) => {
            log::warn!("[server] websocket upgrade failed: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
