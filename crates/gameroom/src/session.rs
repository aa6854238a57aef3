use super::*;
use mr_board::Board;
use mr_core::Arbitrary;
use mr_core::ID;
use mr_core::Unique;
use mr_core::opponent;

/// One live game between two paired peers.
///
/// Imperative shell that owns the [`Engine`] (functional core) and both
/// [`Connection`]s, sequencing broadcasts, the blocking receive from the
/// active seat, and the mismatch reveal delay. Runs as one independent
/// task; all board mutation happens here, single-writer by construction.
pub struct Session {
    id: ID<Self>,
    engine: Engine,
    timer: Timer,
    connections: [Connection; 2],
}

impl Session {
    /// Creates a session on a freshly shuffled board.
    /// The first connection is seat 0 (Player 1) and moves first.
    pub fn new(first: Connection, second: Connection) -> Self {
        Self::from_parts(Board::random(), TimerConfig::default(), first, second)
    }
    /// Creates a session with explicit board and pacing, for scripted games.
    pub fn from_parts(
        board: Board,
        config: TimerConfig,
        first: Connection,
        second: Connection,
    ) -> Self {
        Self {
            id: ID::default(),
            engine: Engine::new(board),
            timer: Timer::new(config),
            connections: [first, second],
        }
    }

    /// Drives the game to completion.
    ///
    /// Any transport failure on either connection aborts the session
    /// immediately without declaring a winner; both connections are
    /// released on every exit path when `self` drops.
    pub async fn run(mut self) -> Result<Outcome, TransportError> {
        log::info!("[session {}] starting", self.id);
        self.broadcast("Game Start")?;
        loop {
            self.broadcast("Your turn")?;
            self.receive_pick().await?;
            self.broadcast("First card chosen")?;
            self.receive_pick().await?;
            self.broadcast("Second card chosen")?;
            match self.engine.resolve() {
                Resolution::Matched { seat } => {
                    log::debug!("[session {}] seat {} matched a pair", self.id, seat);
                }
                Resolution::Mismatched { first, second } => {
                    log::debug!(
                        "[session {}] cells {} and {} mismatched",
                        self.id,
                        first,
                        second
                    );
                    self.timer.start_reveal();
                    if let Some(deadline) = self.timer.deadline() {
                        tokio::time::sleep_until(deadline).await;
                    }
                    self.timer.clear();
                    self.engine.conceal_mismatch();
                }
            }
            self.broadcast("Turn resolved")?;
            if self.engine.complete() {
                break;
            }
        }
        let outcome = self.engine.finish();
        self.conclude(outcome)?;
        log::info!("[session {}] finished: {}", self.id, outcome);
        Ok(outcome)
    }

    /// Blocks until the active seat submits an acceptable move index.
    /// Malformed frames and invalid indices are discarded and the read
    /// retried; the active player is re-prompted by the pending receive.
    async fn receive_pick(&mut self) -> Result<usize, TransportError> {
        let seat = self.engine.turn();
        loop {
            let frame = self.connections[seat].recv().await?;
            let index = match Protocol::decode(&frame) {
                Ok(index) => index,
                Err(e) => {
                    log::debug!("[session {}] seat {} discarded: {}", self.id, seat, e);
                    continue;
                }
            };
            match self.engine.pick(index) {
                Ok(()) => return Ok(index),
                Err(e) => {
                    log::debug!("[session {}] seat {} rejected: {}", self.id, seat, e);
                    continue;
                }
            }
        }
    }

    /// Sends the recipient-specific snapshot pair, active seat first, so
    /// neither player waits on a stale snapshot once the session blocks.
    fn broadcast(&self, message: &str) -> Result<(), TransportError> {
        let active = self.engine.turn();
        for seat in [active, opponent(active)] {
            self.connections[seat].send(&Snapshot::of(&self.engine, seat, message))?;
        }
        Ok(())
    }

    /// Sends the terminal snapshot pair carrying the winner message.
    fn conclude(&self, outcome: Outcome) -> Result<(), TransportError> {
        let message = outcome.to_string();
        for (seat, connection) in self.connections.iter().enumerate() {
            connection.send(&Snapshot::of(&self.engine, seat, &message))?;
        }
        Ok(())
    }
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::UnboundedSender;
    use tokio::task::JoinHandle;

    struct Peer {
        tx: UnboundedSender<String>,
        rx: UnboundedReceiver<String>,
    }

    impl Peer {
        fn picks(&self, indices: &[&str]) {
            for index in indices {
                self.tx.send(index.to_string()).unwrap();
            }
        }
        fn snapshots(&mut self) -> Vec<Snapshot> {
            let mut all = Vec::new();
            while let Ok(frame) = self.rx.try_recv() {
                all.push(serde_json::from_str(&frame).unwrap());
            }
            all
        }
    }

    fn start(faces: Vec<u8>) -> (JoinHandle<Result<Outcome, TransportError>>, Peer, Peer) {
        let (a, tx_a, rx_a) = Connection::pair();
        let (b, tx_b, rx_b) = Connection::pair();
        let board = Board::from_faces(faces).unwrap();
        let config = TimerConfig {
            reveal: Duration::ZERO,
        };
        let session = Session::from_parts(board, config, a, b);
        let handle = tokio::spawn(session.run());
        (handle, Peer { tx: tx_a, rx: rx_a }, Peer { tx: tx_b, rx: rx_b })
    }

    #[tokio::test]
    async fn player_one_sweeps_the_board() {
        let (handle, mut one, mut two) = start(vec![0, 0, 1, 1]);
        one.picks(&["0", "1", "2", "3"]);
        assert_eq!(handle.await.unwrap(), Ok(Outcome::Winner(0)));
        let mine = one.snapshots();
        let theirs = two.snapshots();
        let messages = mine.iter().map(|s| s.message.as_str()).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Game Start",
                "Your turn",
                "First card chosen",
                "Second card chosen",
                "Turn resolved",
                "Your turn",
                "First card chosen",
                "Second card chosen",
                "Turn resolved",
                "Player 1 Wins",
            ]
        );
        // both players observe the same sequence, with your_turn inverted
        // until the terminal snapshot
        assert_eq!(mine.len(), theirs.len());
        for (m, t) in mine.iter().zip(theirs.iter()).take(mine.len() - 1) {
            assert!(m.your_turn);
            assert!(!t.your_turn);
            assert_eq!(m.message, t.message);
        }
        let last = mine.last().unwrap();
        assert!(last.game_over);
        assert!(!last.your_turn);
        assert_eq!((last.score1, last.score2), (2, 0));
        assert!(last.revealed.iter().all(|r| *r));
    }

    #[tokio::test]
    async fn mismatch_hands_turn_to_player_two() {
        let (handle, one, mut two) = start(vec![0, 1, 0, 1]);
        one.picks(&["0", "1"]);
        two.picks(&["0", "2", "1", "3"]);
        assert_eq!(handle.await.unwrap(), Ok(Outcome::Winner(1)));
        let theirs = two.snapshots();
        // after the mismatch resolves, player two holds the turn
        let resolved = theirs
            .iter()
            .find(|s| s.message == "Turn resolved")
            .unwrap();
        assert!(resolved.your_turn);
        assert_eq!((resolved.score1, resolved.score2), (0, 0));
        assert!(resolved.revealed.iter().all(|r| !r));
        let last = theirs.last().unwrap();
        assert_eq!(last.message, "Player 2 Wins");
        assert_eq!((last.score1, last.score2), (0, 2));
        assert!(last.game_over);
    }

    #[tokio::test]
    async fn junk_and_invalid_picks_are_ignored_silently() {
        let (handle, mut one, _two) = start(vec![0, 0, 1, 1]);
        // off-board, malformed, duplicate, and already-revealed indices
        // interleaved with the winning picks
        one.picks(&["99", "banana", "0", "0", "-3", "1", "2", "2", "3"]);
        assert_eq!(handle.await.unwrap(), Ok(Outcome::Winner(0)));
        // rejections produce no snapshots: same cadence as a clean sweep
        let mine = one.snapshots();
        assert_eq!(mine.len(), 10);
        assert_eq!((mine.last().unwrap().score1, mine.last().unwrap().score2), (2, 0));
    }

    #[tokio::test]
    async fn inactive_peer_frames_never_alter_state() {
        let (handle, mut one, two) = start(vec![0, 0, 1, 1]);
        // player two fires moves out of turn; the session never reads them
        two.picks(&["2", "3", "junk"]);
        one.picks(&["0", "1", "2", "3"]);
        assert_eq!(handle.await.unwrap(), Ok(Outcome::Winner(0)));
        let last = one.snapshots().pop().unwrap();
        assert_eq!((last.score1, last.score2), (2, 0));
        assert_eq!(last.message, "Player 1 Wins");
    }

    #[tokio::test]
    async fn disconnection_aborts_without_winner() {
        let (a, tx_a, rx_a) = Connection::pair();
        let (b, _tx_b, _rx_b) = Connection::pair();
        let board = Board::from_faces(vec![0, 0, 1, 1]).unwrap();
        let config = TimerConfig {
            reveal: Duration::ZERO,
        };
        let session = Session::from_parts(board, config, a, b);
        drop(tx_a);
        drop(rx_a);
        let result = tokio::spawn(session.run()).await.unwrap();
        assert_eq!(result, Err(TransportError::Closed));
    }

    #[tokio::test]
    async fn mid_game_disconnection_aborts() {
        let (handle, one, two) = start(vec![0, 1, 0, 1]);
        one.picks(&["0", "1"]);
        // player two walks away right when the turn passes to them
        drop(two);
        assert_eq!(handle.await.unwrap(), Err(TransportError::Closed));
    }
}
