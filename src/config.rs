use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_IDENTITY: &str = "Outputs";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoardConfig {
    pub port: u16,
    /// Name the output service is registered under on the board.
    pub identity: String,
    /// Capacity of the request channel feeding the client task.
    pub queue_depth: usize,
}

impl BoardConfig {
    pub fn new(port: u16, identity: &str) -> Self {
        Self {
            port,
            identity: identity.to_string(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            identity: DEFAULT_IDENTITY.to_string(),
            queue_depth: 100,
        }
    }
}

#[test]
fn test_partial_json_takes_defaults() {
    let config = BoardConfig::from_json(r#"{ "port": 9000 }"#).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.identity, DEFAULT_IDENTITY);
    assert_eq!(config.queue_depth, 100);
}

#[test]
fn test_bad_json() {
    assert!(BoardConfig::from_json(r#"{ "port": "eighty" }"#).is_err());
}
