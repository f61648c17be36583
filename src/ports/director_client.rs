//! BOSH director API port definition.

use crate::domain::{AppError, Deployment};

/// Port for the read-only director calls the generator needs.
pub trait DirectorClient {
    /// List deployments with their releases.
    fn deployments(&self) -> Result<Vec<Deployment>, AppError>;

    /// Fetch the raw manifest YAML of one deployment.
    fn deployment_manifest(&self, name: &str) -> Result<String, AppError>;
}
