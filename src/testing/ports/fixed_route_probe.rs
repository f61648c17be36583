use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::RouteProbe;

/// Answers every probe with the same address and records the targets.
pub struct FixedRouteProbe {
    ip: String,
    probed: Mutex<Vec<String>>,
}

impl FixedRouteProbe {
    pub fn new(ip: &str) -> Self {
        Self { ip: ip.to_string(), probed: Mutex::new(Vec::new()) }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl RouteProbe for FixedRouteProbe {
    fn local_address_towards(&self, remote_ip: &str) -> Result<String, AppError> {
        self.probed.lock().unwrap().push(remote_ip.to_string());
        Ok(self.ip.clone())
    }
}
