use crate::components::output_command::CommandMask;
use crate::controllers::output_controller::OutputController;
use crate::error::OutputError;
use crate::interface::resolver::Resolve;
use crate::session::BoardSession;
use tokio::runtime::{Builder, Runtime};

/// [`OutputController`] for callers without a runtime. Each call blocks the
/// current thread until the board has answered.
///
/// Must not be used from inside an async context.
pub struct BlockingOutputController {
    runtime: Runtime,
    inner: OutputController,
}

impl BlockingOutputController {
    pub fn connect<R: Resolve>(session: &BoardSession<R>) -> Result<Self, OutputError> {
        let Some(host) = session.host() else {
            return Err(OutputError::NotConnected);
        };
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OutputError::ConnectFailed {
                addr: format!("{host}:{}", session.config().port),
                reason: format!("cannot start runtime: {e}"),
            })?;
        let inner = runtime.block_on(OutputController::connect(session))?;
        Ok(Self { runtime, inner })
    }

    pub fn set_output(&self, channel: usize, state: bool) -> Result<(), OutputError> {
        self.runtime.block_on(self.inner.set_output(channel, state))
    }

    pub fn set_all_outputs(&self, state: bool) -> Result<(), OutputError> {
        self.runtime.block_on(self.inner.set_all_outputs(state))
    }

    pub fn set_outputs(&self, mask: &[bool], values: &[bool]) -> Result<(), OutputError> {
        self.runtime.block_on(self.inner.set_outputs(mask, values))
    }

    pub fn submit(&self, mask: CommandMask) -> Result<(), OutputError> {
        self.runtime.block_on(self.inner.submit(mask))
    }
}
