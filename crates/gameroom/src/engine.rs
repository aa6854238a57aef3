use mr_board::Board;
use mr_core::N;
use mr_core::Score;
use mr_core::Seat;
use mr_core::opponent;

/// Phases of one game session's turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstPick,
    AwaitingSecondPick,
    Resolving,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingFirstPick => write!(f, "awaiting first pick"),
            Self::AwaitingSecondPick => write!(f, "awaiting second pick"),
            Self::Resolving => write!(f, "resolving"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// Outcome of comparing the two picked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Faces matched: the active player scores and keeps the turn.
    Matched { seat: Seat },
    /// Faces differed: cells stay face-up until concealed after the delay.
    Mismatched { first: usize, second: usize },
}

/// Final result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Seat),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(seat) => write!(f, "Player {} Wins", seat + 1),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// A rejected move index. Recoverable: the engine state is unchanged and
/// the same seat remains to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    OutOfRange(usize),
    AlreadyRevealed(usize),
    WrongPhase(Phase),
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(i) => write!(f, "index {} is off the board", i),
            Self::AlreadyRevealed(i) => write!(f, "cell {} is already revealed", i),
            Self::WrongPhase(p) => write!(f, "no pick expected while {}", p),
        }
    }
}

impl std::error::Error for TurnError {}

/// Pure state machine for one memory match game.
///
/// Functional core of the session: owns the board, turn pointer, scores,
/// and phase, with no I/O. The async [`super::Session`] shell sequences
/// picks, resolution, and concealment around it.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    turn: Seat,
    scores: [Score; N],
    phase: Phase,
    first: Option<usize>,
    second: Option<usize>,
}

impl Engine {
    /// Starts a game on a fresh board. Player 1 moves first.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            turn: 0,
            scores: [0; N],
            phase: Phase::AwaitingFirstPick,
            first: None,
            second: None,
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// The seat currently permitted to submit a move.
    pub fn turn(&self) -> Seat {
        self.turn
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn score(&self, seat: Seat) -> Score {
        self.scores[seat]
    }
    pub fn scores(&self) -> [Score; N] {
        self.scores
    }
    /// Whether every cell is face-up.
    pub fn complete(&self) -> bool {
        self.board.is_complete()
    }
    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Accepts one move index from the active player.
    ///
    /// Validates range, phase, and that the cell is still face-down; on
    /// success reveals the cell and advances the phase. Rejection leaves
    /// all state untouched.
    pub fn pick(&mut self, index: usize) -> Result<(), TurnError> {
        match self.phase {
            Phase::AwaitingFirstPick | Phase::AwaitingSecondPick => {}
            phase => return Err(TurnError::WrongPhase(phase)),
        }
        if !self.board.contains(index) {
            return Err(TurnError::OutOfRange(index));
        }
        if self.board.is_revealed(index) {
            return Err(TurnError::AlreadyRevealed(index));
        }
        self.board.reveal(index);
        match self.phase {
            Phase::AwaitingFirstPick => {
                self.first = Some(index);
                self.phase = Phase::AwaitingSecondPick;
            }
            _ => {
                self.second = Some(index);
                self.phase = Phase::Resolving;
            }
        }
        Ok(())
    }

    /// Compares the two picked cells.
    ///
    /// A match scores for the active player, leaves both cells face-up
    /// forever, and keeps the turn. A mismatch leaves the cells face-up
    /// pending [`Self::conceal_mismatch`] after the reveal delay.
    pub fn resolve(&mut self) -> Resolution {
        let (first, second) = match (self.phase, self.first, self.second) {
            (Phase::Resolving, Some(first), Some(second)) => (first, second),
            _ => panic!("resolve called in wrong phase"),
        };
        if self.board.matches(first, second) {
            self.scores[self.turn] += 1;
            self.first = None;
            self.second = None;
            self.phase = Phase::AwaitingFirstPick;
            Resolution::Matched { seat: self.turn }
        } else {
            Resolution::Mismatched { first, second }
        }
    }

    /// Hides a mismatched pair again and hands the turn to the other seat.
    /// Legal only after [`Self::resolve`] returned a mismatch.
    pub fn conceal_mismatch(&mut self) {
        let (first, second) = match (self.phase, self.first, self.second) {
            (Phase::Resolving, Some(first), Some(second)) => (first, second),
            _ => panic!("conceal_mismatch called in wrong phase"),
        };
        self.board.conceal(first);
        self.board.conceal(second);
        self.first = None;
        self.second = None;
        self.turn = opponent(self.turn);
        self.phase = Phase::AwaitingFirstPick;
    }

    /// Transitions to the terminal phase and computes the winner.
    /// Legal only once the board is complete.
    pub fn finish(&mut self) -> Outcome {
        assert!(self.complete(), "finish called before board completion");
        self.phase = Phase::Finished;
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Outcome::Winner(0),
            std::cmp::Ordering::Less => Outcome::Winner(1),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}
