//! Typed view of the manifest property facets this tool reads.
//!
//! Every facet is optional at both job and global scope. Unknown keys are
//! ignored.

use serde::Deserialize;

use super::scalar::{null_as_default, optional_scalar, scalar};

/// Facet-keyed property bag found on a job and at the top of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub consul: Option<ConsulProperties>,
    #[serde(default)]
    pub diego: Option<DiegoProperties>,
    #[serde(default)]
    pub loggregator: Option<LoggregatorProperties>,
    #[serde(default)]
    pub metron_endpoint: Option<EndpointProperties>,
    /// Legacy name for `metron_endpoint`.
    #[serde(default)]
    pub loggregator_endpoint: Option<EndpointProperties>,
    #[serde(default)]
    pub metron_agent: Option<MetronAgentProperties>,
    #[serde(default, rename = "syslog_daemon_config")]
    pub syslog: Option<SyslogProperties>,
}

impl Properties {
    /// The `diego.rep` section, if declared.
    pub fn rep(&self) -> Option<&RepProperties> {
        self.diego.as_ref()?.rep.as_ref()
    }

    /// The `diego.rep.bbs` section, if declared.
    pub fn bbs(&self) -> Option<&BbsProperties> {
        self.rep()?.bbs.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsulProperties {
    /// Kept as text: manifests carry both `false` and `"false"`.
    #[serde(default, deserialize_with = "optional_scalar")]
    pub require_ssl: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub ca_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub agent_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub agent_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encrypt_keys: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent: ConsulAgent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsulAgent {
    #[serde(default, deserialize_with = "scalar")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: ConsulServers,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsulServers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lan: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiegoProperties {
    #[serde(default)]
    pub rep: Option<RepProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepProperties {
    #[serde(default)]
    pub bbs: Option<BbsProperties>,
    #[serde(default)]
    pub require_tls: Option<bool>,
    #[serde(default, deserialize_with = "scalar")]
    pub ca_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub server_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub server_key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BbsProperties {
    #[serde(default, deserialize_with = "scalar")]
    pub ca_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub client_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub client_key: String,
    #[serde(default)]
    pub require_ssl: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggregatorProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub etcd: EtcdProperties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tls: LoggregatorTls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EtcdProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub machines: Vec<String>,
}

/// `loggregator.tls`. `ca` and `ca_cert` belong to different schema
/// generations and are read by different metron variants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggregatorTls {
    #[serde(default, deserialize_with = "scalar")]
    pub ca: String,
    #[serde(default, deserialize_with = "scalar")]
    pub ca_cert: String,
    #[serde(default)]
    pub metron: Option<CertKeyPair>,
}

/// A `cert`/`key` pair as used by `loggregator.tls.metron` and `metron_agent.tls_client`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertKeyPair {
    #[serde(default, deserialize_with = "scalar")]
    pub cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub key: String,
}

/// `metron_agent.tls`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientTls {
    #[serde(default, deserialize_with = "scalar")]
    pub client_cert: String,
    #[serde(default, deserialize_with = "scalar")]
    pub client_key: String,
}

/// Shape shared by `metron_endpoint` and `loggregator_endpoint`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointProperties {
    #[serde(default, deserialize_with = "scalar")]
    pub shared_secret: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetronAgentProperties {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub preferred_protocol: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tls: ClientTls,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tls_client: CertKeyPair,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyslogProperties {
    #[serde(default, deserialize_with = "scalar")]
    pub address: String,
    #[serde(default, deserialize_with = "scalar")]
    pub port: String,
}
