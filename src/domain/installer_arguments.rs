//! Resolved installer settings handed to the script renderer.

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known certificate file names written next to `install.bat`.
pub mod cert_files {
    pub const BBS_CA: &str = "bbs_ca.crt";
    pub const BBS_CLIENT_CERT: &str = "bbs_client.crt";
    pub const BBS_CLIENT_KEY: &str = "bbs_client.key";
    pub const REP_CA: &str = "rep_ca.crt";
    pub const REP_SERVER_CERT: &str = "rep_server.crt";
    pub const REP_SERVER_KEY: &str = "rep_server.key";
    pub const METRON_AGENT_CERT: &str = "metron_agent.crt";
    pub const METRON_AGENT_KEY: &str = "metron_agent.key";
    pub const METRON_CA: &str = "metron_ca.crt";
    pub const CONSUL_AGENT_CERT: &str = "consul_agent.crt";
    pub const CONSUL_AGENT_KEY: &str = "consul_agent.key";
    pub const CONSUL_CA: &str = "consul_ca.crt";
    pub const CONSUL_ENCRYPT_KEY: &str = "consul_encrypt.key";
}

/// Settings accumulated by the resolver, one field group per manifest facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallerArguments {
    pub consul_require_ssl: bool,
    pub consul_ips: String,
    pub consul_domain: String,
    pub etcd_cluster: String,
    pub zone: String,
    pub shared_secret: String,
    pub syslog_host_ip: String,
    pub syslog_port: String,
    pub bbs_require_ssl: bool,
    pub rep_require_tls: bool,
    pub machine_ip: String,
    pub metron_prefer_tls: bool,
    /// Certificate file name to PEM (or key) content.
    pub certs: BTreeMap<String, String>,
}

impl InstallerArguments {
    /// Record a group of certificate files contributed by one facet.
    pub fn add_certs<'a>(&mut self, entries: impl IntoIterator<Item = (&'static str, &'a str)>) {
        for (name, content) in entries {
            self.certs.insert(name.to_string(), content.to_string());
        }
    }

    pub fn cert(&self, name: &str) -> Option<&str> {
        self.certs.get(name).map(String::as_str)
    }

    /// First entry of the comma-joined Consul address list.
    pub fn first_consul_ip(&self) -> Option<&str> {
        self.consul_ips.split(',').map(str::trim).find(|ip| !ip.is_empty())
    }

    pub fn set_machine_ip(&mut self, machine_ip: impl Into<String>) {
        self.machine_ip = machine_ip.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_certs_overwrites_existing_name() {
        let mut args = InstallerArguments::default();
        args.add_certs([(cert_files::BBS_CA, "old")]);
        args.add_certs([(cert_files::BBS_CA, "new"), (cert_files::BBS_CLIENT_KEY, "key")]);

        assert_eq!(args.certs.len(), 2);
        assert_eq!(args.cert(cert_files::BBS_CA), Some("new"));
    }

    #[test]
    fn first_consul_ip_takes_leading_entry() {
        let args = InstallerArguments {
            consul_ips: "10.0.0.5,10.0.0.6".to_string(),
            ..Default::default()
        };
        assert_eq!(args.first_consul_ip(), Some("10.0.0.5"));
        assert_eq!(InstallerArguments::default().first_consul_ip(), None);
    }
}
