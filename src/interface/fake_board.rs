//! Loopback stand-in for a board, speaking the lookup and output frames on a std thread
//! so it works under any runtime, including the blocking adapter's.

use crate::util::utils::{CR, STX};
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

pub const OUTPUT_SERVICE: &str = "Outputs";
/// Registered on the board, but not an output service.
pub const OTHER_SERVICE: &str = "Motors";

pub struct FakeBoard {
    addr: SocketAddr,
    commands: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl FakeBoard {
    pub fn spawn() -> Self {
        Self::start(None)
    }

    /// Closes the connection, without replying, on output command number `after` (0-based).
    pub fn spawn_with_hang_up(after: usize) -> Self {
        Self::start(Some(after))
    }

    fn start(hang_up: Option<usize>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let recorded = commands.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { return };
                let mut writer = stream.try_clone().unwrap();
                let mut reader = BufReader::new(stream);
                let mut seen = 0;
                loop {
                    let mut frame = Vec::new();
                    match reader.read_until(CR, &mut frame) {
                        Ok(0) | Err(_) => break,
                        Ok(_) => {}
                    }
                    let reply = match frame.get(1).copied() {
                        Some(b'L') => {
                            let identity = frame
                                .get(2..frame.len().saturating_sub(1))
                                .unwrap_or_default();
                            let status = if identity == OUTPUT_SERVICE.as_bytes() {
                                b'1'
                            } else if identity == OTHER_SERVICE.as_bytes() {
                                b'2'
                            } else {
                                b'0'
                            };
                            vec![STX, b'L', status, CR]
                        }
                        Some(b'O') => {
                            if hang_up == Some(seen) {
                                break;
                            }
                            seen += 1;
                            recorded.lock().unwrap().push(frame.clone());
                            vec![STX, b'O', b'M', b'_', CR]
                        }
                        _ => vec![STX, b'?', CR],
                    };
                    if writer.write_all(&reply).is_err() {
                        break;
                    }
                }
            }
        });
        Self { addr, commands }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.commands.lock().unwrap().clone()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A bound port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
