pub mod deployment;
mod encrypt_key;
pub mod error;
pub mod generator_config;
pub mod installer_arguments;
pub mod manifest;
pub mod resolve;

pub use deployment::{Deployment, DeploymentDetails, Release, select_diego_deployment};
pub use encrypt_key::consul_encrypt_key;
pub use error::AppError;
pub use generator_config::{DirectorConfig, GeneratorConfig, InstallerConfig, parse_config_content};
pub use installer_arguments::{InstallerArguments, cert_files};
pub use manifest::{Job, Manifest, Properties};
pub use resolve::resolve;
