//! BOSH deployment manifest model.

mod properties;
mod scalar;

use serde::Deserialize;

use crate::domain::AppError;

pub use properties::{
    BbsProperties, CertKeyPair, ClientTls, ConsulAgent, ConsulProperties, ConsulServers,
    DiegoProperties, EndpointProperties, EtcdProperties, LoggregatorProperties, LoggregatorTls,
    MetronAgentProperties, Properties, RepProperties, SyslogProperties,
};

/// The subset of a deployment manifest read by the resolver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "scalar::null_as_default")]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub properties: Option<Properties>,
    /// Job list used by 2.0 manifests.
    #[serde(default, deserialize_with = "scalar::null_as_default")]
    pub instance_groups: Vec<Job>,
}

/// A job (1.0 manifests) or instance group (2.0 manifests).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "scalar::scalar")]
    pub name: String,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Job {
    /// True when this job runs the Diego rep.
    pub fn is_rep_job(&self) -> bool {
        self.properties.as_ref().and_then(Properties::rep).is_some()
    }

    fn declares_consul(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| p.consul.is_some())
    }
}

impl Manifest {
    /// Parse manifest YAML.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::ManifestParse(e.to_string()))
    }

    /// `jobs`, or `instance_groups` when `jobs` is empty.
    pub fn job_list(&self) -> &[Job] {
        if self.jobs.is_empty() { &self.instance_groups } else { &self.jobs }
    }

    /// The first job that declares a `diego.rep` section.
    pub fn first_rep_job(&self) -> Result<&Job, AppError> {
        self.job_list().iter().find(|job| job.is_rep_job()).ok_or(AppError::RepJobNotFound)
    }

    /// The first job that declares a `consul` section.
    pub fn first_consul_job(&self) -> Option<&Job> {
        self.job_list().iter().find(|job| job.declares_consul())
    }

    /// Deployment-wide properties.
    pub fn global_properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }
}
