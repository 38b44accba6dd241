use serde::{Deserialize, Serialize};

use crate::config_type::ConfigType;

/// Connection settings for the cluster management server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base address of the management server, including scheme and port.
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // Default bind address of the management server's web console.
            address: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Settings for the configuration editor itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Which configuration document the editor opens on startup.
    pub default_config_type: ConfigType,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_config_type: ConfigType::default(),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Connection settings for the management server.
    pub server_config: ServerConfig,
    /// Settings for the editor.
    pub editor_config: EditorConfig,
}
