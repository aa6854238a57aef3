use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Spawns the pump between one WebSocket peer and its session channels.
///
/// Outbound messages from the session are flushed as single text frames;
/// inbound text frames are forwarded raw for the session to decode. The
/// task ends when either side goes away: a closed socket drops the channel
/// ends (surfacing as a transport error in the session), and a finished or
/// aborted session closes the socket.
pub fn spawn(
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
    tx: UnboundedSender<String>,
    mut rx: UnboundedReceiver<String>,
) {
    use futures::StreamExt;
    actix_web::rt::spawn(async move {
        'link: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'link },
                    None => break 'link,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => if tx.send(text.to_string()).is_err() { break 'link },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'link,
                    Some(Err(_)) => break 'link,
                    None => break 'link,
                    _ => continue 'link,
                },
            }
        }
        let _ = session.close(None).await;
        log::debug!("[bridge] disconnected");
    });
}
