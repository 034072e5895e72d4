use crate::components::output_command::{CommandMask, OUTPUT_TAG};
use crate::error::OutputError;
use crate::util::utils::is_ack;
use log::debug;
use std::future::Future;
use tokio::sync::{mpsc, oneshot};

/// A request frame for the client task, answered with the raw reply frame.
pub struct Message {
    pub buffer: Vec<u8>,
    pub response: oneshot::Sender<Vec<u8>>,
}

pub trait SendRecv {
    fn get_sender(&self) -> &mpsc::Sender<Message>;

    /// One round trip. The client task dropping the request (socket closed, read failure)
    /// shows up here as `ConnectionLost`.
    fn write(&self, buffer: &[u8]) -> impl Future<Output = Result<Vec<u8>, OutputError>> + Send
    where
        Self: Sync,
    {
        async move {
            let (resp_tx, resp_rx) = oneshot::channel();
            let msg = Message {
                buffer: buffer.to_vec(),
                response: resp_tx,
            };
            self.get_sender()
                .send(msg)
                .await
                .map_err(|_| OutputError::ConnectionLost("client task has stopped".to_string()))?;
            resp_rx
                .await
                .map_err(|_| OutputError::ConnectionLost("no reply from board".to_string()))
        }
    }
}

/// Live reference to the board's output service.
#[derive(Clone, Debug)]
pub struct ServiceHandle {
    drive_sender: mpsc::Sender<Message>,
}

impl ServiceHandle {
    pub fn new(drive_sender: mpsc::Sender<Message>) -> Self {
        Self { drive_sender }
    }

    pub async fn execute(&self, mask: &CommandMask) -> Result<(), OutputError> {
        let cmd = mask.command_builder();
        debug!("Submitting output command {:?}", cmd);
        let reply = self.write(cmd.as_slice()).await?;
        if is_ack(&reply, OUTPUT_TAG) {
            Ok(())
        } else {
            Err(OutputError::ConnectionLost(format!(
                "board rejected output command, reply {:?}",
                reply
            )))
        }
    }
}

impl SendRecv for ServiceHandle {
    fn get_sender(&self) -> &mpsc::Sender<Message> {
        &self.drive_sender
    }
}
