use mr_core::Arbitrary;
use mr_core::NUM_PAIRS;
use rand::seq::SliceRandom;

/// A card's identity under a cell. Each face value appears on exactly
/// two cells of a board.
pub type Face = u8;

/// Errors rejecting a malformed face layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Layout length is zero or odd.
    BadLength(usize),
    /// A face value does not appear exactly twice.
    UnbalancedFace(Face),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadLength(n) => write!(f, "board length {} is not a positive even number", n),
            Self::UnbalancedFace(face) => write!(f, "face {} does not appear exactly twice", face),
        }
    }
}

impl std::error::Error for BoardError {}

/// The authoritative state of one game's card board.
///
/// Owns the shuffled face layout and the revealed mask. Mutated only by the
/// session that created it; everything downstream sees read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    faces: Vec<Face>,
    revealed: Vec<bool>,
}

impl Board {
    /// Creates a board of `2 × pairs` cells with each face in `[0, pairs)`
    /// appearing exactly twice, in a uniformly random permutation, all
    /// cells concealed.
    pub fn shuffled(pairs: usize) -> Self {
        debug_assert!(pairs > 0);
        let mut faces = (0..pairs)
            .flat_map(|pair| [pair as Face, pair as Face])
            .collect::<Vec<_>>();
        faces.shuffle(&mut rand::rng());
        Self {
            revealed: vec![false; faces.len()],
            faces,
        }
    }
    /// Creates a board with a fixed face layout, for deterministic games.
    /// Rejects layouts that break the exactly-twice invariant.
    pub fn from_faces(faces: Vec<Face>) -> Result<Self, BoardError> {
        if faces.is_empty() || faces.len() % 2 != 0 {
            return Err(BoardError::BadLength(faces.len()));
        }
        for face in faces.iter().copied() {
            match faces.iter().filter(|f| **f == face).count() {
                2 => continue,
                _ => return Err(BoardError::UnbalancedFace(face)),
            }
        }
        Ok(Self {
            revealed: vec![false; faces.len()],
            faces,
        })
    }
    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.faces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
    /// Number of distinct pairs.
    pub fn pairs(&self) -> usize {
        self.faces.len() / 2
    }
    /// Tests whether an index addresses a cell on this board.
    pub fn contains(&self, index: usize) -> bool {
        index < self.faces.len()
    }
    /// The face layout, in cell order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
    /// The revealed mask, parallel to [`Self::faces`].
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }
    /// The face under a cell.
    pub fn face(&self, index: usize) -> Option<Face> {
        self.faces.get(index).copied()
    }
    /// Whether a cell is currently face-up.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
    /// Turns a cell face-up.
    pub fn reveal(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.revealed[index] = true;
    }
    /// Turns a cell face-down again.
    pub fn conceal(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.revealed[index] = false;
    }
    /// Whether two cells carry the same face.
    pub fn matches(&self, a: usize, b: usize) -> bool {
        match (self.face(a), self.face(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
    /// Whether every cell is face-up, i.e. the game is over.
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

impl Arbitrary for Board {
    fn random() -> Self {
        Self::shuffled(NUM_PAIRS)
    }
}
