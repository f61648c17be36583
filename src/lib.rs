//! diego-installer-gen: turn a Cloud Foundry deployment manifest into a Windows cell installer.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, GenerateRequest, generate};
pub use app::commands::load_manifest::ManifestSource;
pub use domain::{AppError, InstallerArguments, Manifest, resolve};
