use std::io;

use thiserror::Error;

/// Library-wide error type for installer generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Manifest YAML could not be parsed.
    #[error("Failed to parse deployment manifest: {0}")]
    ManifestParse(String),

    /// No job in the manifest declares a diego.rep section.
    #[error("No rep job found in the deployment manifest")]
    RepJobNotFound,

    /// Consul LAN server list resolved to nothing.
    #[error("Could not find any Consul VMs in your BOSH deployment")]
    ConsulServersNotFound,

    /// loggregator.etcd.machines is missing or empty.
    #[error("No etcd machines configured under loggregator.etcd.machines")]
    EtcdMachinesMissing,

    /// Director responded with an error or could not be reached.
    #[error("BOSH director error during {operation}: {details}")]
    Director { operation: String, details: String },

    /// Director does not have exactly one matching deployment.
    #[error(
        "BOSH director does not have exactly one deployment containing the releases: {releases}"
    )]
    DeploymentNotFound { releases: String },

    /// Installer script template failed to render.
    #[error("Failed to render {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// The local address toward the Consul servers could not be determined.
    #[error("Could not determine machine IP via {target}: {details}")]
    MachineIpProbe { target: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn director<O: Into<String>, D: std::fmt::Display>(operation: O, details: D) -> Self {
        AppError::Director { operation: operation.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ManifestParse(_)
            | AppError::EtcdMachinesMissing
            | AppError::TemplateRender { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::RepJobNotFound
            | AppError::ConsulServersNotFound
            | AppError::DeploymentNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Director { .. } | AppError::MachineIpProbe { .. } => io::ErrorKind::Other,
        }
    }
}
