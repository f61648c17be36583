//! Resolve installer arguments and write `install.bat` plus certificates.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, InstallerArguments, InstallerConfig, Manifest, resolve};
use crate::ports::{OutputStore, RouteProbe, ScriptContext, ScriptRenderer};

/// Inputs that do not come from the manifest.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Cell IP; probed toward the first Consul server when absent.
    pub machine_ip: Option<String>,
    pub installer: InstallerConfig,
}

/// What was written.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub script_path: PathBuf,
    pub cert_count: usize,
    pub arguments: InstallerArguments,
}

pub fn execute<O, R, P>(
    ctx: &AppContext<O, R, P>,
    manifest: &Manifest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    O: OutputStore,
    R: ScriptRenderer,
    P: RouteProbe,
{
    let mut arguments = resolve(manifest)?;

    let machine_ip = match options.machine_ip.as_deref().map(str::trim).filter(|ip| !ip.is_empty())
    {
        Some(ip) => ip.to_string(),
        None => {
            let consul_ip = arguments.first_consul_ip().ok_or(AppError::ConsulServersNotFound)?;
            ctx.route_probe().local_address_towards(consul_ip)?
        }
    };
    arguments.set_machine_ip(machine_ip);
    arguments.zone = options.installer.zone.clone();

    let context = ScriptContext {
        arguments: &arguments,
        stack: &options.installer.stack,
        etcd_port: options.installer.etcd_port,
    };
    let script = ctx.renderer().render(&context)?;
    let script_name = ctx.renderer().file_name();
    ctx.output().write_file(script_name, &script)?;

    for (name, content) in &arguments.certs {
        ctx.output().write_file(name, content)?;
    }
    info!(certs = arguments.certs.len(), machine_ip = %arguments.machine_ip, "installer generated");

    Ok(GenerateOutcome {
        script_path: ctx.output().root().join(script_name),
        cert_count: arguments.certs.len(),
        arguments,
    })
}
