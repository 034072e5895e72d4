pub mod components;
pub mod config;
pub mod controllers;
pub mod error;
pub mod interface;
pub mod session;
pub mod util;

pub use components::output_command::{CommandMask, OutputChannel, OUTPUT_COUNT};
pub use components::send_recv::ServiceHandle;
pub use config::BoardConfig;
pub use controllers::blocking::BlockingOutputController;
pub use controllers::output_controller::OutputController;
pub use error::{OutputError, ResolveError};
pub use interface::resolver::{Resolve, TcpResolver};
pub use session::BoardSession;
