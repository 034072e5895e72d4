use crate::components::send_recv::Message;
use crate::util::utils::CR;
use log::{error, info};
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;

pub type BoardStream = BufReader<TcpStream>;

/// Writes one frame and reads the CR-terminated reply.
pub async fn transact(stream: &mut BoardStream, buffer: &[u8]) -> io::Result<Vec<u8>> {
    stream.get_mut().write_all(buffer).await?;
    let mut reply = Vec::with_capacity(16);
    let n = stream.read_until(CR, &mut reply).await?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed by board",
        ));
    }
    Ok(reply)
}

/// Owns the board connection and serves requests until every sender is gone
/// or the socket fails. A failed request is dropped unanswered.
pub async fn client(mut stream: BoardStream, mut msg: mpsc::Receiver<Message>) -> io::Result<()> {
    let peer_addr = stream.get_ref().peer_addr()?;
    info!("Client connected with peer address: {peer_addr}");
    while let Some(message) = msg.recv().await {
        match transact(&mut stream, &message.buffer).await {
            Ok(reply) => {
                if message.response.send(reply).is_err() {
                    error!("Failed to send via channel");
                }
            }
            Err(e) => {
                error!("Board connection to {peer_addr} failed: {e}");
                return Err(e);
            }
        }
    }
    info!("Client for {peer_addr} shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::fake_board::{init_logger, FakeBoard};
    use crate::util::utils::{make_frame, STX};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_transact() {
        let board = FakeBoard::spawn();
        let mut stream = BufReader::new(TcpStream::connect(board.addr()).await.unwrap());
        let reply = transact(&mut stream, &make_frame(b'L', b"Outputs"))
            .await
            .unwrap();
        assert_eq!(reply, [STX, b'L', b'1', CR]);
    }

    #[tokio::test]
    async fn test_client_serves_requests() {
        let board = FakeBoard::spawn();
        let stream = BufReader::new(TcpStream::connect(board.addr()).await.unwrap());
        let (tx, rx) = mpsc::channel(10);
        let client_handler = tokio::spawn(client(stream, rx));

        let frame = vec![STX, b'O', b'M', b'1', b'1', b'1', b'1', b'0', b'0', b'0', b'0', CR];
        let (resp_tx, resp_rx) = oneshot::channel();
        tx.send(Message {
            buffer: frame.clone(),
            response: resp_tx,
        })
        .await
        .unwrap();
        assert_eq!(resp_rx.await.unwrap(), [STX, b'O', b'M', b'_', CR]);
        assert_eq!(board.commands(), vec![frame]);

        drop(tx);
        client_handler.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_client_stops_on_hang_up() {
        init_logger();
        let board = FakeBoard::spawn_with_hang_up(0);
        let stream = BufReader::new(TcpStream::connect(board.addr()).await.unwrap());
        let (tx, rx) = mpsc::channel(10);
        let client_handler = tokio::spawn(client(stream, rx));

        let (resp_tx, resp_rx) = oneshot::channel();
        tx.send(Message {
            buffer: vec![STX, b'O', b'M', b'1', b'1', b'1', b'1', b'0', b'0', b'0', b'0', CR],
            response: resp_tx,
        })
        .await
        .unwrap();
        assert!(resp_rx.await.is_err());
        assert!(client_handler.await.unwrap().is_err());
    }
}
