use super::Engine;
use mr_board::Face;
use mr_core::Score;
use mr_core::Seat;
use serde::Deserialize;
use serde::Serialize;

/// One immutable copy of board + turn + score + status, sent to a player
/// whenever the shared state changes.
///
/// Broadcasts are recipient-specific: the two snapshots produced for one
/// state differ only in `your_turn` (and, at game end, in `message`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Face identity under each cell, in cell order.
    pub faces: Vec<Face>,
    /// Which cells are currently face-up, parallel to `faces`.
    pub revealed: Vec<bool>,
    /// True iff the recipient may move next.
    pub your_turn: bool,
    /// Terminal flag; no further snapshots follow once set.
    pub game_over: bool,
    /// Status text (turn prompt, pick notice, final result).
    pub message: String,
    pub score1: Score,
    pub score2: Score,
}

impl Snapshot {
    /// Builds the snapshot of `engine` as seen from `seat`.
    pub fn of(engine: &Engine, seat: Seat, message: &str) -> Self {
        Self {
            faces: engine.board().faces().to_vec(),
            revealed: engine.board().revealed().to_vec(),
            your_turn: engine.turn() == seat && !engine.finished(),
            game_over: engine.finished(),
            message: message.to_string(),
            score1: engine.score(0),
            score2: engine.score(1),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_board::Board;

    #[test]
    fn snapshots_differ_only_in_your_turn() {
        let engine = Engine::new(Board::from_faces(vec![0, 1, 0, 1]).unwrap());
        let mine = Snapshot::of(&engine, 0, "Your turn");
        let theirs = Snapshot::of(&engine, 1, "Your turn");
        assert!(mine.your_turn);
        assert!(!theirs.your_turn);
        assert_eq!(mine.faces, theirs.faces);
        assert_eq!(mine.revealed, theirs.revealed);
        assert_eq!(mine.message, theirs.message);
        assert_eq!((mine.score1, mine.score2), (theirs.score1, theirs.score2));
        assert!(!mine.game_over);
    }
    #[test]
    fn json_roundtrip_preserves_fields() {
        let engine = Engine::new(Board::from_faces(vec![0, 0, 1, 1]).unwrap());
        let snapshot = Snapshot::of(&engine, 0, "Game Start");
        let json = snapshot.to_json();
        let back = serde_json::from_str::<Snapshot>(&json).unwrap();
        assert_eq!(back.faces, vec![0, 0, 1, 1]);
        assert_eq!(back.revealed, vec![false; 4]);
        assert_eq!(back.message, "Game Start");
        assert!(back.your_turn);
        assert!(!back.game_over);
        assert_eq!((back.score1, back.score2), (0, 0));
    }
}
