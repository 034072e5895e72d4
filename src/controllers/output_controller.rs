use crate::components::output_command::{CommandMask, OutputChannel};
use crate::components::send_recv::ServiceHandle;
use crate::error::{OutputError, ResolveError};
use crate::interface::resolver::Resolve;
use crate::session::BoardSession;
use log::{debug, info};

/// Client for the four digital outputs of one board.
///
/// Every command is a single round trip carrying a full apply mask and value
/// array; the board applies it atomically. Nothing is cached or read back.
/// Commands are not coordinated between tasks beyond the order the client
/// task receives them in.
pub struct OutputController {
    handle: Option<ServiceHandle>,
}

impl OutputController {
    pub fn new(handle: ServiceHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Resolves the board's output service. Sends no output commands.
    pub async fn connect<R: Resolve>(session: &BoardSession<R>) -> Result<Self, OutputError> {
        let host = session.host().ok_or(OutputError::NotConnected)?;
        let config = session.config();
        let addr = format!("{host}:{}", config.port);
        info!("Resolving output service `{}` at {addr}", config.identity);

        match session
            .resolver()
            .resolve(host, config.port, &config.identity)
            .await
        {
            Ok(Some(handle)) => Ok(Self::new(handle)),
            Ok(None) | Err(ResolveError::ObjectNotExist(_)) => {
                Err(OutputError::ServiceUnavailable {
                    identity: config.identity.clone(),
                })
            }
            Err(e) => Err(OutputError::ConnectFailed {
                addr,
                reason: e.to_string(),
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.handle.is_some()
    }

    pub async fn set_output(&self, channel: usize, state: bool) -> Result<(), OutputError> {
        let channel = OutputChannel::new(channel)?;
        debug!("Setting {channel} to {state}");
        self.submit(CommandMask::single(channel, state)).await
    }

    pub async fn set_all_outputs(&self, state: bool) -> Result<(), OutputError> {
        self.submit(CommandMask::uniform(state)).await
    }

    /// Applies `values[i]` to every channel `i` where `mask[i]` is set. Both
    /// slices must hold exactly four entries.
    pub async fn set_outputs(&self, mask: &[bool], values: &[bool]) -> Result<(), OutputError> {
        let mask = CommandMask::from_slices(mask, values)?;
        self.submit(mask).await
    }

    /// A failed submission means no outputs are known to have changed.
    pub async fn submit(&self, mask: CommandMask) -> Result<(), OutputError> {
        let handle = self.handle.as_ref().ok_or(OutputError::NotConnected)?;
        handle.execute(&mask).await
    }
}
