//! Manifest property resolution.
//!
//! Each rule reads one facet with job-then-global fallback and writes its
//! share of [`InstallerArguments`]. Rules run in a fixed order and the first
//! error aborts resolution.

mod consul;
mod etcd;
mod metron;
mod scope;
mod shared_secret;
mod syslog;
mod tls;

use tracing::debug;

use crate::domain::{AppError, InstallerArguments, Manifest};

pub use consul::{DEFAULT_CONSUL_DOMAIN, consul_requires_ssl};
pub use scope::{Scope, Scopes};

/// A single resolution step.
pub type Rule = fn(&Scopes<'_>, &mut InstallerArguments) -> Result<(), AppError>;

/// Resolution steps in invocation order.
pub const RULES: &[(&str, Rule)] = &[
    ("etcd", etcd::resolve_etcd_cluster),
    ("shared_secret", shared_secret::resolve_shared_secret),
    ("metron_agent", metron::resolve_metron_agent),
    ("syslog", syslog::resolve_syslog),
    ("consul", consul::resolve_consul),
    ("bbs", tls::resolve_bbs),
    ("rep", tls::resolve_rep),
];

/// Resolve every facet for the manifest's first rep job.
///
/// The machine IP is not part of the manifest; callers set it afterwards with
/// [`InstallerArguments::set_machine_ip`].
pub fn resolve(manifest: &Manifest) -> Result<InstallerArguments, AppError> {
    let scopes = Scopes::for_manifest(manifest)?;
    let mut args = InstallerArguments::default();
    for (name, rule) in RULES {
        debug!(rule = *name, "resolving");
        rule(&scopes, &mut args)?;
    }
    Ok(args)
}
