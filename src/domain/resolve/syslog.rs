use tracing::debug;

use super::Scopes;
use crate::domain::{AppError, InstallerArguments};

/// Copy `syslog_daemon_config` address and port; absent syslog is not an error.
pub fn resolve_syslog(scopes: &Scopes, args: &mut InstallerArguments) -> Result<(), AppError> {
    let Some((scope, syslog)) = scopes.facet(|p| p.syslog.as_ref()) else {
        debug!("no syslog_daemon_config declared");
        return Ok(());
    };

    debug!(%scope, address = %syslog.address, "resolved syslog target");
    args.syslog_host_ip = syslog.address.clone();
    args.syslog_port = syslog.port.clone();
    Ok(())
}
