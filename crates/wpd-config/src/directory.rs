//! WordPress.org connection configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://api.wordpress.org".to_string()
}

fn default_web_base() -> String {
    "https://wordpress.org".to_string()
}

/// Default connect/read timeout.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "wpd/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Base URL of the API host (plugin info, version check).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL of the web host (changelog links).
    #[serde(default = "default_web_base")]
    pub web_base: String,

    /// Connect/read timeout for directory requests.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header for directory requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            web_base: default_web_base(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_wordpress_org() {
        let config = DirectoryConfig::default();
        assert_eq!(config.api_base, "https://api.wordpress.org");
        assert_eq!(config.web_base, "https://wordpress.org");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "wpd/0.1");
    }
}
