//! API Facade for the application.
//!
//! Glues configuration, manifest acquisition, and context creation to the
//! generate command.

use std::path::PathBuf;

use crate::adapters::{
    FilesystemOutputStore, HttpDirectorClient, MinijinjaScriptRenderer, UdpRouteProbe,
};
use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateOptions};
use crate::app::commands::load_manifest::{self, ManifestSource};
use crate::app::config::load_config;

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::AppError;

/// Everything the CLI collects for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source: ManifestSource,
    pub output_dir: PathBuf,
    pub machine_ip: Option<String>,
    pub config_path: Option<PathBuf>,
}

/// Load the manifest, resolve it, and write the installer into `output_dir`.
///
/// The output directory is only created once resolution has succeeded.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome, AppError> {
    let config = load_config(request.config_path.as_deref())?;

    let manifest = match &request.source {
        ManifestSource::File(path) => load_manifest::from_file(path)?,
        ManifestSource::Director(url) => {
            let director = HttpDirectorClient::connect(url, &config.director)?;
            load_manifest::from_director(&director, &config.director.required_releases)?
        }
    };

    let output = FilesystemOutputStore::new(request.output_dir.clone());
    let ctx = AppContext::new(output, MinijinjaScriptRenderer::new(), UdpRouteProbe);

    let options =
        GenerateOptions { machine_ip: request.machine_ip.clone(), installer: config.installer };
    generate::execute(&ctx, &manifest, &options)
}
