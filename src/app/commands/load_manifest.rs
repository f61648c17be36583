//! Manifest acquisition from a local file or a BOSH director.

use std::fs;
use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::domain::{AppError, Manifest, select_diego_deployment};
use crate::ports::DirectorClient;

/// Where the deployment manifest comes from.
#[derive(Debug, Clone)]
pub enum ManifestSource {
    /// A manifest YAML file on disk.
    File(PathBuf),
    /// A BOSH director URL, credentials in the userinfo.
    Director(Url),
}

/// Read and parse a manifest file.
pub fn from_file(path: &std::path::Path) -> Result<Manifest, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read manifest {}: {}", path.display(), e))
    })?;
    Manifest::from_yaml(&content)
}

/// Select the Diego deployment on the director and parse its manifest.
pub fn from_director(
    client: &impl DirectorClient,
    required_releases: &[String],
) -> Result<Manifest, AppError> {
    let deployments = client.deployments()?;
    let deployment = select_diego_deployment(&deployments, required_releases)?;
    info!(deployment = %deployment.name, "fetching deployment manifest");

    let content = client.deployment_manifest(&deployment.name)?;
    Manifest::from_yaml(&content)
}
