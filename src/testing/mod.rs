pub mod ports;

use crate::domain::resolve::{Rule, Scopes};
use crate::domain::{AppError, InstallerArguments, Manifest};

pub use ports::{FakeDirectorClient, FixedRouteProbe, MemoryOutputStore};

/// Parse `yaml` and apply a single resolution rule to a fresh bundle.
pub fn resolve_with(rule: Rule, yaml: &str) -> Result<InstallerArguments, AppError> {
    let manifest = Manifest::from_yaml(yaml)?;
    let scopes = Scopes::for_manifest(&manifest)?;
    let mut args = InstallerArguments::default();
    rule(&scopes, &mut args)?;
    Ok(args)
}
