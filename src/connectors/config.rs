use serde::{Deserialize, Serialize};

use crate::configuration::ApiSettings;

/// Review Service connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewServiceConfig {
    /// Base URL for the ReviewBattle API (e.g. http://127.0.0.1:8000)
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ReviewServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl From<ApiSettings> for ReviewServiceConfig {
    fn from(settings: ApiSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout_secs: settings.timeout_secs,
        }
    }
}
