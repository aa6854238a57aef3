use super::Snapshot;

/// A frame that could not be read as a move index.
/// Recoverable: the frame is discarded and the read retried.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed move frame: {:?}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Snapshot serialization and move-index parsing.
/// Centralizes the wire format between the session and its peers;
/// validation against board state stays with the [`super::Engine`].
pub struct Protocol;

impl Protocol {
    /// Serializes one snapshot as a single JSON text frame.
    /// One frame per message keeps delivery atomic and ordered.
    pub fn encode(snapshot: &Snapshot) -> String {
        snapshot.to_json()
    }
    /// Parses a client frame into a move index.
    /// Only classifies the frame; the value is validated by the engine.
    pub fn decode(s: &str) -> Result<usize, ProtocolError> {
        s.trim()
            .parse::<usize>()
            .map_err(|_| ProtocolError::Malformed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_valid_index() {
        assert_eq!(Protocol::decode("0").unwrap(), 0);
        assert_eq!(Protocol::decode("15").unwrap(), 15);
        assert_eq!(Protocol::decode(" 7 ").unwrap(), 7);
    }
    #[test]
    fn decode_malformed_frame() {
        assert!(Protocol::decode("").is_err());
        assert!(Protocol::decode("abc").is_err());
        assert!(Protocol::decode("-1").is_err());
        assert!(Protocol::decode("3.5").is_err());
        assert!(Protocol::decode("{\"index\": 3}").is_err());
    }
}
