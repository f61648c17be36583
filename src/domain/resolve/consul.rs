use tracing::{debug, warn};

use super::Scopes;
use crate::domain::cert_files::{CONSUL_AGENT_CERT, CONSUL_AGENT_KEY, CONSUL_CA, CONSUL_ENCRYPT_KEY};
use crate::domain::encrypt_key::consul_encrypt_key;
use crate::domain::{AppError, InstallerArguments};

pub const DEFAULT_CONSUL_DOMAIN: &str = "cf.internal";

/// `require_ssl` is on unless the manifest says exactly `false`.
pub fn consul_requires_ssl(require_ssl: Option<&str>) -> bool {
    require_ssl != Some("false")
}

/// Consul servers, TLS material, gossip key and domain.
///
/// Looks at the rep job, then global properties, then the first job that
/// declares consul. An empty server list is fatal.
pub fn resolve_consul(scopes: &Scopes, args: &mut InstallerArguments) -> Result<(), AppError> {
    let (scope, consul) = scopes
        .facet_with_consul_job(|p| p.consul.as_ref())
        .ok_or(AppError::ConsulServersNotFound)?;

    let servers = &consul.agent.servers.lan;
    if servers.is_empty() {
        return Err(AppError::ConsulServersNotFound);
    }
    args.consul_ips = servers.join(",");
    debug!(%scope, servers = %args.consul_ips, "resolved consul servers");

    if consul_requires_ssl(consul.require_ssl.as_deref()) {
        args.consul_require_ssl = true;
        args.add_certs([
            (CONSUL_AGENT_CERT, consul.agent_cert.as_str()),
            (CONSUL_AGENT_KEY, consul.agent_key.as_str()),
            (CONSUL_CA, consul.ca_cert.as_str()),
        ]);
        match consul.encrypt_keys.first() {
            Some(raw) => {
                let key = consul_encrypt_key(raw);
                args.add_certs([(CONSUL_ENCRYPT_KEY, key.as_str())]);
            }
            None => warn!("consul requires SSL but no encrypt_keys are configured"),
        }
    }

    args.consul_domain = if consul.agent.domain.is_empty() {
        DEFAULT_CONSUL_DOMAIN.to_string()
    } else {
        consul.agent.domain.clone()
    };
    Ok(())
}
