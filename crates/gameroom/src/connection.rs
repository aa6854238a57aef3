use super::Protocol;
use super::Snapshot;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// The peer link is gone: socket closed, bridge ended, or write failed.
/// Fatal to the owning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    Closed,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "peer connection closed"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Session-side endpoint of one peer connection.
///
/// The tx channel carries encoded snapshots out to the peer's bridge task;
/// the rx channel carries raw frames back from it. Both directions are
/// FIFO, so each player observes broadcasts in issue order and the session
/// observes moves in send order.
#[derive(Debug)]
pub struct Connection {
    tx: UnboundedSender<String>,
    rx: UnboundedReceiver<String>,
}

impl Connection {
    /// Creates a connection plus the remote endpoints a bridge task pumps:
    /// a sender for inbound frames and a receiver for outbound messages.
    pub fn pair() -> (Self, UnboundedSender<String>, UnboundedReceiver<String>) {
        let (tx_outbound, rx_outbound) = unbounded_channel();
        let (tx_inbound, rx_inbound) = unbounded_channel();
        let connection = Self {
            tx: tx_outbound,
            rx: rx_inbound,
        };
        (connection, tx_inbound, rx_outbound)
    }
    /// Queues one snapshot for delivery. The push is non-blocking; the
    /// bridge task flushes whole frames in order.
    pub fn send(&self, snapshot: &Snapshot) -> Result<(), TransportError> {
        self.tx
            .send(Protocol::encode(snapshot))
            .map_err(|_| TransportError::Closed)
    }
    /// Waits for the next raw frame from the peer.
    pub async fn recv(&mut self) -> Result<String, TransportError> {
        self.rx.recv().await.ok_or(TransportError::Closed)
    }
    /// Whether the peer's bridge is still holding its end.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}
