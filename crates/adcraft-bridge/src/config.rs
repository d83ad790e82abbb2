use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the creative pipeline's REST API, including its path
    /// prefix.
    pub api_base_url: String,
    /// Period between status requests while a campaign is being generated.
    pub poll_interval_secs: u64,
    /// Where downloaded creatives are saved. Defaults to the user's download
    /// directory when unset.
    pub download_directory: Option<PathBuf>,
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_owned(),
            poll_interval_secs: 3,
            download_directory: None,
        }
    }
}
