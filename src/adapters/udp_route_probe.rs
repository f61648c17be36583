use std::net::{IpAddr, UdpSocket};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::RouteProbe;

/// Arbitrary port; connecting a UDP socket sends nothing.
const PROBE_PORT: u16 = 65530;

/// Finds the local address by "connecting" a UDP socket to the remote host
/// and reading back the address the routing table picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpRouteProbe;

impl RouteProbe for UdpRouteProbe {
    fn local_address_towards(&self, remote_ip: &str) -> Result<String, AppError> {
        let probe_error = |details: String| AppError::MachineIpProbe {
            target: format!("{}:{}", remote_ip, PROBE_PORT),
            details,
        };

        let remote: IpAddr =
            remote_ip.trim().parse().map_err(|e| probe_error(format!("invalid IP: {}", e)))?;
        let bind_addr = if remote.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };

        let socket = UdpSocket::bind(bind_addr).map_err(|e| probe_error(e.to_string()))?;
        socket.connect((remote, PROBE_PORT)).map_err(|e| probe_error(e.to_string()))?;
        let local = socket.local_addr().map_err(|e| probe_error(e.to_string()))?;

        debug!(remote = %remote, local = %local.ip(), "probed machine IP");
        Ok(local.ip().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_route_uses_loopback_address() {
        let ip = UdpRouteProbe.local_address_towards("127.0.0.1").unwrap();
        assert_eq!(ip, "127.0.0.1");
    }

    #[test]
    fn invalid_address_is_reported() {
        let err = UdpRouteProbe.local_address_towards("consul.service").unwrap_err();
        assert!(matches!(err, AppError::MachineIpProbe { .. }));
        assert!(err.to_string().contains("consul.service:65530"));
    }
}
