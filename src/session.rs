use crate::config::BoardConfig;
use crate::interface::resolver::{Resolve, TcpResolver};

/// An established (or absent) session with a board: the host address, how the
/// board is laid out, and how to reach services on it.
#[derive(Debug, Clone)]
pub struct BoardSession<R = TcpResolver> {
    host: Option<String>,
    config: BoardConfig,
    resolver: R,
}

impl BoardSession<TcpResolver> {
    pub fn connected(host: &str) -> Self {
        Self::with_config(Some(host), BoardConfig::default())
    }

    pub fn disconnected() -> Self {
        Self::with_config(None, BoardConfig::default())
    }

    pub fn with_config(host: Option<&str>, config: BoardConfig) -> Self {
        let resolver = TcpResolver::new(config.queue_depth);
        Self::with_resolver(host, config, resolver)
    }
}

impl<R: Resolve> BoardSession<R> {
    pub fn with_resolver(host: Option<&str>, config: BoardConfig, resolver: R) -> Self {
        Self {
            host: host.map(str::to_string),
            config,
            resolver,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

#[test]
fn test_session_accessors() {
    let session = BoardSession::connected("10.0.0.5");
    assert_eq!(session.host(), Some("10.0.0.5"));
    assert_eq!(session.config(), &BoardConfig::default());

    let session = BoardSession::disconnected();
    assert_eq!(session.host(), None);
}
