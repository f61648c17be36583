//! Mutual-TLS settings for the rep's BBS client and its own server.
//!
//! The defaults differ: BBS TLS must be switched off explicitly, rep server
//! TLS must be switched on explicitly.

use tracing::{debug, warn};

use super::Scopes;
use crate::domain::cert_files::{
    BBS_CA, BBS_CLIENT_CERT, BBS_CLIENT_KEY, REP_CA, REP_SERVER_CERT, REP_SERVER_KEY,
};
use crate::domain::manifest::Properties;
use crate::domain::{AppError, InstallerArguments};

/// `diego.rep.bbs.require_ssl`: missing means true.
pub fn resolve_bbs(scopes: &Scopes, args: &mut InstallerArguments) -> Result<(), AppError> {
    let Some((scope, bbs)) = scopes.facet(Properties::bbs) else {
        warn!("no diego.rep.bbs section at job or global scope; BBS TLS left disabled");
        return Ok(());
    };

    if bbs.require_ssl.unwrap_or(true) {
        debug!(%scope, "BBS client TLS enabled");
        args.bbs_require_ssl = true;
        args.add_certs([
            (BBS_CLIENT_CERT, bbs.client_cert.as_str()),
            (BBS_CLIENT_KEY, bbs.client_key.as_str()),
            (BBS_CA, bbs.ca_cert.as_str()),
        ]);
    }
    Ok(())
}

/// `diego.rep.require_tls`: missing means false.
///
/// Read from the job when the job declares `diego.rep.bbs`, otherwise from
/// global properties.
pub fn resolve_rep(scopes: &Scopes, args: &mut InstallerArguments) -> Result<(), AppError> {
    let Some((scope, rep)) = scopes
        .job_if_else_global(|p| p.bbs().is_some())
        .and_then(|(scope, props)| props.rep().map(|rep| (scope, rep)))
    else {
        return Ok(());
    };

    if rep.require_tls.unwrap_or(false) {
        debug!(%scope, "rep server TLS enabled");
        args.rep_require_tls = true;
        args.add_certs([
            (REP_CA, rep.ca_cert.as_str()),
            (REP_SERVER_CERT, rep.server_cert.as_str()),
            (REP_SERVER_KEY, rep.server_key.as_str()),
        ]);
    }
    Ok(())
}
