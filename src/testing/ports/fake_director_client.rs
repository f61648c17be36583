use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, Deployment};
use crate::ports::DirectorClient;

pub struct FakeDirectorClient {
    deployments: Vec<Deployment>,
    manifests: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FakeDirectorClient {
    pub fn new(deployments: Vec<Deployment>) -> Self {
        Self { deployments, manifests: HashMap::new(), requested: Mutex::new(Vec::new()) }
    }

    pub fn with_manifest(mut self, name: &str, yaml: &str) -> Self {
        self.manifests.insert(name.to_string(), yaml.to_string());
        self
    }

    /// Deployment names whose manifest was fetched, in call order.
    pub fn requested_manifests(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DirectorClient for FakeDirectorClient {
    fn deployments(&self) -> Result<Vec<Deployment>, AppError> {
        Ok(self.deployments.clone())
    }

    fn deployment_manifest(&self, name: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(name.to_string());
        self.manifests
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::director("deployment manifest", format!("404 for {}", name)))
    }
}
