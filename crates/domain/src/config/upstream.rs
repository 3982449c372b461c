use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver to query, as `host:port`.
    #[serde(default = "default_server")]
    pub server: String,

    /// Deadline in seconds for each send and for the reply.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout() -> u64 {
    5
}
