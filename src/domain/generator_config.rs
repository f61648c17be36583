//! Generator configuration loaded from an optional TOML file.

use serde::Deserialize;

use crate::domain::AppError;

/// Top-level configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// BOSH director settings.
    #[serde(default)]
    pub director: DirectorConfig,
    /// Installer script settings.
    #[serde(default)]
    pub installer: InstallerConfig,
}

/// BOSH director client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// OAuth client used for the UAA password grant.
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Scopes requested with the UAA token.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    /// Accept self-signed director and UAA certificates.
    #[serde(default = "default_true")]
    pub skip_tls_verify: bool,
    /// Releases a deployment must contain to be picked as the Diego deployment.
    #[serde(default = "default_required_releases")]
    pub required_releases: Vec<String>,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            client_id: default_client_id(),
            scopes: default_scopes(),
            skip_tls_verify: default_true(),
            required_releases: default_required_releases(),
        }
    }
}

/// Values baked into `install.bat` that do not come from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallerConfig {
    /// Redundancy zone reported by the cell.
    #[serde(default = "default_zone")]
    pub zone: String,
    /// Cloud Foundry stack name.
    #[serde(default = "default_stack")]
    pub stack: String,
    /// Port appended to the etcd machine address.
    #[serde(default = "default_etcd_port")]
    pub etcd_port: u16,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self { zone: default_zone(), stack: default_stack(), etcd_port: default_etcd_port() }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_client_id() -> String {
    "bosh_cli".to_string()
}

fn default_scopes() -> Vec<String> {
    vec!["bosh.read".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_required_releases() -> Vec<String> {
    ["cf", "diego", "garden-runc"].iter().map(|s| s.to_string()).collect()
}

fn default_zone() -> String {
    "windows".to_string()
}

fn default_stack() -> String {
    "windows2012R2".to_string()
}

fn default_etcd_port() -> u16 {
    4001
}

/// Parse and validate generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    if config.director.required_releases.is_empty() {
        return Err(AppError::config_error("director.required_releases must not be empty"));
    }
    if config.installer.zone.trim().is_empty() {
        return Err(AppError::config_error("installer.zone must not be empty"));
    }
    Ok(config)
}
