use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "ONTOVIEW_CONFIG";

/// Top-level application settings, deserialized from YAML.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
}

/// HTTP listener settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface the server binds to.
    pub host: String,
    /// Port the server binds to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerSettings {
    /// Returns the bind address in `host:port` form.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upload persistence settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadSettings {
    /// Directory raw uploaded documents are stored in.
    pub dir: PathBuf,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
        }
    }
}

impl Settings {
    /// Reads settings from a YAML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Resolves settings from an explicit path, the `ONTOVIEW_CONFIG`
    /// environment variable, or defaults, in that order.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&env_path));
        }
        Ok(Self::default())
    }
}
