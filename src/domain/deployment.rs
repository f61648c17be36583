//! Director deployment listing and Diego deployment selection.

use serde::Deserialize;

use crate::domain::AppError;

/// A release referenced by a deployment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// One entry of `GET /deployments`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Deployment {
    pub name: String,
    #[serde(default)]
    pub releases: Vec<Release>,
}

impl Deployment {
    fn has_release(&self, name: &str) -> bool {
        self.releases.iter().any(|release| release.name == name)
    }
}

/// `GET /deployments/<name>` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentDetails {
    #[serde(default)]
    pub manifest: String,
}

/// The single deployment containing every required release. Zero or several
/// candidates both fail.
pub fn select_diego_deployment<'a>(
    deployments: &'a [Deployment],
    required_releases: &[String],
) -> Result<&'a Deployment, AppError> {
    let not_found = || AppError::DeploymentNotFound { releases: required_releases.join(", ") };

    let mut candidates = deployments
        .iter()
        .filter(|deployment| required_releases.iter().all(|name| deployment.has_release(name)));

    let selected = candidates.next().ok_or_else(not_found)?;
    if candidates.next().is_some() {
        return Err(not_found());
    }
    Ok(selected)
}
