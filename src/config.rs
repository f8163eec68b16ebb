use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.privacy-checkr/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP service and summary settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for `serve` and for the summary wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the frontend result view. No link is built when unset.
    #[serde(default)]
    pub frontend_base_url: Option<String>,
    /// Maximum number of characters echoed back as a preview.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_preview_chars() -> usize {
    2000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_base_url: None,
            preview_chars: default_preview_chars(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Blank base URLs count as unset.
    pub fn frontend_base_url(&self) -> Option<&str> {
        self.frontend_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.privacy-checkr/config.toml`
/// 3. `~/.config/privacy-checkr/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Environment overrides (`HOST`, `PORT`, `FRONTEND_BASE_URL`, `PREVIEW_CHARS`)
/// are applied on top of whichever source was used.
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    let mut config = load_file(project_path, config_override)?;
    apply_env(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn load_file(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".privacy-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("privacy-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}

/// Apply environment overrides read through `lookup`.
fn apply_env<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let server = &mut config.server;

    if let Some(host) = lookup("HOST") {
        server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        server.port = port
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a port number, got {:?}", port))?;
    }
    if let Some(url) = lookup("FRONTEND_BASE_URL") {
        server.frontend_base_url = Some(url);
    }
    if let Some(chars) = lookup("PREVIEW_CHARS") {
        server.preview_chars = chars
            .trim()
            .parse()
            .with_context(|| format!("PREVIEW_CHARS must be a number, got {:?}", chars))?;
    }

    Ok(())
}
