use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port the API listens on by default, also used to build sandbox preview hosts.
pub const API_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Base URL of the travel-api server, e.g. "http://localhost:3001"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    format!("http://localhost:{}", API_PORT)
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl TravelConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("travel-tui")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// The API base URL, in order of precedence: `TRAVEL_API_URL`, the
    /// sandbox preview host, then the config file.
    pub fn api_url(&self) -> String {
        resolve_api_url(
            std::env::var("TRAVEL_API_URL").ok(),
            sandbox_host(std::env::var("CODESANDBOX_HOST").ok(), API_PORT),
            self,
        )
    }
}

/// Sandbox environments publish a host template with a `$PORT` placeholder.
fn sandbox_host(template: Option<String>, port: u16) -> Option<String> {
    template
        .filter(|template| !template.is_empty())
        .map(|template| template.replace("$PORT", &port.to_string()))
}

fn resolve_api_url(
    env_override: Option<String>,
    sandbox_host: Option<String>,
    config: &TravelConfig,
) -> String {
    if let Some(url) = env_override.filter(|url| !url.is_empty()) {
        return url;
    }
    if let Some(host) = sandbox_host {
        return format!("https://{}", host);
    }
    config.api_url.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_api() {
        let config = TravelConfig::default();
        assert_eq!(resolve_api_url(None, None, &config), "http://localhost:3001");
    }

    #[test]
    fn sandbox_host_substitutes_port() {
        let host = sandbox_host(Some("abc123-$PORT.csb.app".to_string()), 3001);
        assert_eq!(host.as_deref(), Some("abc123-3001.csb.app"));
        assert_eq!(
            resolve_api_url(None, host, &TravelConfig::default()),
            "https://abc123-3001.csb.app"
        );
    }

    #[test]
    fn empty_sandbox_template_is_ignored() {
        assert_eq!(sandbox_host(Some(String::new()), 3001), None);
    }

    #[test]
    fn env_override_wins() {
        let url = resolve_api_url(
            Some("http://api.internal:8080".to_string()),
            Some("abc-3001.csb.app".to_string()),
            &TravelConfig::default(),
        );
        assert_eq!(url, "http://api.internal:8080");
    }

    #[test]
    fn config_file_without_key_uses_default() {
        let config: TravelConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, "http://localhost:3001");
    }
}
