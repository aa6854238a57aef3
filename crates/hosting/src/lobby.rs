use mr_core::Unique;
use mr_gameroom::Connection;
use mr_gameroom::Session;
use tokio::sync::Mutex;

/// Pairs incoming peers into game sessions, two at a time.
///
/// Holds at most one waiting peer. The first joiner parks here as Player 1;
/// the next joiner completes the pair and the session spawns as its own
/// task. Sessions share no state with the lobby or each other.
pub struct Lobby {
    waiting: Mutex<Option<Connection>>,
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            waiting: Mutex::new(None),
        }
    }
    /// Admits one WebSocket peer: spawns its bridge task and either parks
    /// the connection or pairs it with the waiting one.
    pub async fn join(&self, session: actix_ws::Session, stream: actix_ws::MessageStream) {
        let (connection, tx, rx) = Connection::pair();
        super::spawn(session, stream, tx, rx);
        self.seat(connection).await;
    }
    /// Whether a peer is parked waiting for an opponent.
    pub async fn waiting(&self) -> bool {
        self.waiting.lock().await.is_some()
    }
    async fn seat(&self, connection: Connection) {
        let mut waiting = self.waiting.lock().await;
        match waiting.take() {
            Some(peer) if peer.is_open() => {
                let session = Session::new(peer, connection);
                let id = session.id();
                log::info!("[lobby] paired both players into session {}", id);
                tokio::spawn(async move {
                    match session.run().await {
                        Ok(outcome) => log::info!("[session {}] over: {}", id, outcome),
                        Err(e) => log::warn!("[session {}] aborted: {}", id, e),
                    }
                });
            }
            Some(_stale) => {
                log::info!("[lobby] discarding disconnected waiting peer");
                *waiting = Some(connection);
            }
            None => {
                log::info!("[lobby] player waiting for an opponent");
                *waiting = Some(connection);
            }
        }
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pairs_peers_two_at_a_time() {
        let lobby = Lobby::new();
        let (c1, _tx1, mut rx1) = Connection::pair();
        let (c2, _tx2, mut rx2) = Connection::pair();
        lobby.seat(c1).await;
        assert!(lobby.waiting().await);
        lobby.seat(c2).await;
        assert!(!lobby.waiting().await);
        // the freshly paired session greets both peers
        assert!(rx1.recv().await.unwrap().contains("Game Start"));
        assert!(rx2.recv().await.unwrap().contains("Game Start"));
    }

    #[tokio::test]
    async fn discards_stale_waiting_peer() {
        let lobby = Lobby::new();
        let (c1, tx1, rx1) = Connection::pair();
        lobby.seat(c1).await;
        drop(tx1);
        drop(rx1);
        let (c2, _tx2, _rx2) = Connection::pair();
        lobby.seat(c2).await;
        // the dead peer was dropped, not seated into a session
        assert!(lobby.waiting().await);
    }
}
