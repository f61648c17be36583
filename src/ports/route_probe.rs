use crate::domain::AppError;

/// Resolves which local address the cell uses to reach a remote host.
pub trait RouteProbe {
    fn local_address_towards(&self, remote_ip: &str) -> Result<String, AppError>;
}
