use crate::components::send_recv::ServiceHandle;
use crate::error::ResolveError;
use crate::interface::tcp::{client, transact};
use crate::util::utils::{frame_payload, make_frame, CR, STX};
use log::info;
use std::future::Future;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::sync::mpsc;

pub const LOOKUP_TAG: u8 = b'L';
const FOUND: u8 = b'1';
const NOT_FOUND: u8 = b'0';
const WRONG_TYPE: u8 = b'2';

/// Turns a service identity on a board into a live handle.
///
/// `Ok(None)` means the lookup went through but the object is not usable as an
/// output service. `ResolveError::ObjectNotExist` must be kept distinct from
/// transport failures.
pub trait Resolve {
    fn resolve(
        &self,
        host: &str,
        port: u16,
        identity: &str,
    ) -> impl Future<Output = Result<Option<ServiceHandle>, ResolveError>> + Send;
}

/// Looks the service up over TCP, then hands the connection to a client task.
#[derive(Debug, Clone)]
pub struct TcpResolver {
    queue_depth: usize,
}

impl TcpResolver {
    pub fn new(queue_depth: usize) -> Self {
        Self {
            queue_depth: queue_depth.max(1),
        }
    }
}

impl Default for TcpResolver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Resolve for TcpResolver {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        identity: &str,
    ) -> Result<Option<ServiceHandle>, ResolveError> {
        if identity.is_empty() || identity.bytes().any(|b| b == CR || b == STX) {
            return Err(ResolveError::Protocol(format!(
                "identity {identity:?} cannot be framed"
            )));
        }
        let mut stream = BufReader::new(TcpStream::connect((host, port)).await?);
        let reply = transact(&mut stream, &make_frame(LOOKUP_TAG, identity.as_bytes())).await?;
        match frame_payload(&reply, LOOKUP_TAG) {
            Some(&[FOUND]) => {
                info!("Resolved `{identity}` on {host}:{port}");
                let (tx, rx) = mpsc::channel(self.queue_depth);
                tokio::spawn(client(stream, rx));
                Ok(Some(ServiceHandle::new(tx)))
            }
            Some(&[NOT_FOUND]) => Err(ResolveError::ObjectNotExist(identity.to_string())),
            Some(&[WRONG_TYPE]) => {
                info!("`{identity}` on {host}:{port} is not an output service");
                Ok(None)
            }
            _ => Err(ResolveError::Protocol(format!(
                "unexpected lookup reply {reply:?}"
            ))),
        }
    }
}
