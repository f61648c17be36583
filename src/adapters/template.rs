use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::AppError;
use crate::ports::{ScriptContext, ScriptRenderer};

const INSTALL_SCRIPT_NAME: &str = "install.bat";
const INSTALL_SCRIPT_TEMPLATE: &str = include_str!("../assets/install.bat.j2");

/// Installer script renderer using Minijinja.
pub struct MinijinjaScriptRenderer;

impl MinijinjaScriptRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaScriptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRenderer for MinijinjaScriptRenderer {
    fn file_name(&self) -> &str {
        INSTALL_SCRIPT_NAME
    }

    fn render(&self, context: &ScriptContext<'_>) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(crlf_template(), context).map_err(|err| AppError::TemplateRender {
            template: INSTALL_SCRIPT_NAME.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
static CRLF_TEMPLATE: OnceLock<String> = OnceLock::new();

/// cmd.exe scripts use CRLF regardless of how the template was checked out.
fn crlf_template() -> &'static str {
    CRLF_TEMPLATE.get_or_init(|| {
        INSTALL_SCRIPT_TEMPLATE
            .trim_end_matches(['\r', '\n'])
            .replace("\r\n", "\n")
            .replace('\n', "\r\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstallerArguments, cert_files};

    fn render(args: &InstallerArguments) -> String {
        let context = ScriptContext { arguments: args, stack: "windows2012R2", etcd_port: 4001 };
        MinijinjaScriptRenderer::new().render(&context).unwrap()
    }

    fn minimal_args() -> InstallerArguments {
        InstallerArguments {
            consul_ips: "10.0.0.5".to_string(),
            consul_domain: "cf.internal".to_string(),
            etcd_cluster: "10.0.0.9".to_string(),
            zone: "windows".to_string(),
            shared_secret: "secret".to_string(),
            machine_ip: "10.0.0.100".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn insecure_cell_omits_optional_sections() {
        let script = render(&minimal_args());

        assert_eq!(
            script,
            [
                r"msiexec /passive /norestart /i %~dp0\DiegoWindows.msi ^",
                "  REP_REQUIRE_TLS=false ^",
                "  CONSUL_DOMAIN=cf.internal ^",
                "  CONSUL_IPS=10.0.0.5 ^",
                "  CF_ETCD_CLUSTER=http://10.0.0.9:4001 ^",
                "  STACK=windows2012R2 ^",
                "  REDUNDANCY_ZONE=windows ^",
                "  LOGGREGATOR_SHARED_SECRET=secret ^",
                "  MACHINE_IP=10.0.0.100",
                "",
                r"msiexec /passive /norestart /i %~dp0\GardenWindows.msi ^",
                "  MACHINE_IP=10.0.0.100",
            ]
            .join("\r\n")
        );
    }

    #[test]
    fn secure_cell_references_every_cert_file() {
        let mut args = minimal_args();
        args.bbs_require_ssl = true;
        args.rep_require_tls = true;
        args.consul_require_ssl = true;
        args.metron_prefer_tls = true;
        args.syslog_host_ip = "10.0.0.30".to_string();
        args.syslog_port = "514".to_string();
        args.add_certs([(cert_files::CONSUL_ENCRYPT_KEY, "key")]);

        let script = render(&args);

        for line in [
            r"  BBS_CA_FILE=%~dp0\bbs_ca.crt ^",
            "  REP_REQUIRE_TLS=true ^",
            r"  REP_SERVER_KEY_FILE=%~dp0\rep_server.key ^",
            "  SYSLOG_HOST_IP=10.0.0.30 ^",
            r"  CONSUL_ENCRYPT_FILE=%~dp0\consul_encrypt.key ^",
            r"  CONSUL_AGENT_KEY_FILE=%~dp0\consul_agent.key ^",
            r"  METRON_AGENT_KEY_FILE=%~dp0\metron_agent.key",
        ] {
            assert!(script.contains(&format!("{}\r\n", line)), "missing line: {}", line);
        }
        assert!(script.ends_with("  SYSLOG_PORT=514"));
        assert!(!script.contains("True"), "MSI properties take lowercase booleans");
        assert!(!script.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn consul_encrypt_line_requires_the_key_file() {
        let mut args = minimal_args();
        args.consul_require_ssl = true;

        let script = render(&args);

        assert!(!script.contains("CONSUL_ENCRYPT_FILE"));
        assert!(script.contains("  MACHINE_IP=10.0.0.100 ^\r\n  CONSUL_CA_FILE="));
    }
}
