//! Metron agent TLS material.
//!
//! Three manifest generations place the agent certificates in different
//! spots. Each is a [`MetronVariant`]; the first whose predicate holds wins.

use tracing::debug;

use super::Scopes;
use crate::domain::cert_files::{METRON_AGENT_CERT, METRON_AGENT_KEY, METRON_CA};
use crate::domain::manifest::{LoggregatorTls, MetronAgentProperties};
use crate::domain::{AppError, InstallerArguments};

/// Fields a variant may read, all from one scope.
struct MetronSource<'a> {
    preferred_protocol: &'a str,
    agent: &'a MetronAgentProperties,
    loggregator_tls: &'a LoggregatorTls,
}

impl MetronSource<'_> {
    fn prefers_tls(&self) -> bool {
        self.preferred_protocol == "tls"
    }
}

struct MetronCerts<'a> {
    cert: &'a str,
    key: &'a str,
    ca: &'a str,
}

struct MetronVariant {
    name: &'static str,
    matches: for<'a> fn(&MetronSource<'a>) -> bool,
    extract: for<'a> fn(&MetronSource<'a>) -> MetronCerts<'a>,
}

const VARIANTS: &[MetronVariant] = &[
    MetronVariant {
        name: "loggregator.tls.metron",
        matches: |src| src.loggregator_tls.metron.as_ref().is_some_and(|m| !m.cert.is_empty()),
        extract: |src| {
            let metron = src.loggregator_tls.metron.as_ref();
            MetronCerts {
                cert: metron.map_or("", |m| m.cert.as_str()),
                key: metron.map_or("", |m| m.key.as_str()),
                ca: &src.loggregator_tls.ca_cert,
            }
        },
    },
    MetronVariant {
        name: "metron_agent.tls",
        matches: |src| src.prefers_tls() && !src.loggregator_tls.ca_cert.is_empty(),
        extract: |src| MetronCerts {
            cert: &src.agent.tls.client_cert,
            key: &src.agent.tls.client_key,
            ca: &src.loggregator_tls.ca_cert,
        },
    },
    MetronVariant {
        name: "metron_agent.tls_client",
        matches: |src| src.prefers_tls(),
        extract: |src| MetronCerts {
            cert: &src.agent.tls_client.cert,
            key: &src.agent.tls_client.key,
            ca: &src.loggregator_tls.ca,
        },
    },
];

/// Enable metron TLS when a scope sets `metron_agent.preferred_protocol`
/// and one of the known certificate layouts applies.
pub fn resolve_metron_agent(
    scopes: &Scopes,
    args: &mut InstallerArguments,
) -> Result<(), AppError> {
    let Some((scope, props)) = scopes.first_where(|p| {
        p.metron_agent.as_ref().is_some_and(|agent| agent.preferred_protocol.is_some())
    }) else {
        return Ok(());
    };
    let Some(agent) = props.metron_agent.as_ref() else {
        return Ok(());
    };

    let empty_tls = LoggregatorTls::default();
    let source = MetronSource {
        preferred_protocol: agent.preferred_protocol.as_deref().unwrap_or_default(),
        agent,
        loggregator_tls: props.loggregator.as_ref().map_or(&empty_tls, |l| &l.tls),
    };

    let Some(variant) = VARIANTS.iter().find(|variant| (variant.matches)(&source)) else {
        debug!(%scope, protocol = source.preferred_protocol, "metron agent TLS not enabled");
        return Ok(());
    };

    debug!(%scope, variant = variant.name, "resolved metron agent TLS");
    let certs = (variant.extract)(&source);
    args.metron_prefer_tls = true;
    args.add_certs([
        (METRON_AGENT_CERT, certs.cert),
        (METRON_AGENT_KEY, certs.key),
        (METRON_CA, certs.ca),
    ]);
    Ok(())
}
