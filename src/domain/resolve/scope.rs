use std::fmt;

use crate::domain::manifest::{Manifest, Properties};
use crate::domain::AppError;

/// Where a facet value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The rep job's own properties.
    Job,
    /// Deployment-wide properties.
    Global,
    /// Properties of the first job declaring a consul section.
    ConsulJob,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Job => "job",
            Scope::Global => "global",
            Scope::ConsulJob => "consul job",
        };
        write!(f, "{}", name)
    }
}

/// The property bags a resolution rule may read, in fallback order.
#[derive(Debug, Clone, Copy)]
pub struct Scopes<'a> {
    job: Option<&'a Properties>,
    global: Option<&'a Properties>,
    consul_job: Option<&'a Properties>,
}

impl<'a> Scopes<'a> {
    pub fn new(job: Option<&'a Properties>, global: Option<&'a Properties>) -> Self {
        Self { job, global, consul_job: None }
    }

    pub fn with_consul_job(mut self, consul_job: Option<&'a Properties>) -> Self {
        self.consul_job = consul_job;
        self
    }

    /// Scopes anchored on the manifest's first rep job.
    pub fn for_manifest(manifest: &'a Manifest) -> Result<Self, AppError> {
        let rep_job = manifest.first_rep_job()?;
        let consul_job = manifest.first_consul_job().and_then(|job| job.properties.as_ref());
        Ok(Self::new(rep_job.properties.as_ref(), manifest.global_properties())
            .with_consul_job(consul_job))
    }

    fn job_then_global(&self) -> impl Iterator<Item = (Scope, &'a Properties)> {
        [(Scope::Job, self.job), (Scope::Global, self.global)]
            .into_iter()
            .filter_map(|(scope, props)| props.map(|p| (scope, p)))
    }

    /// The first scope, job before global, whose properties satisfy `present`.
    pub fn first_where(
        &self,
        present: impl Fn(&Properties) -> bool,
    ) -> Option<(Scope, &'a Properties)> {
        self.job_then_global().find(|(_, props)| present(props))
    }

    /// The job when it satisfies `present`, otherwise global whatever it holds.
    pub fn job_if_else_global(
        &self,
        present: impl Fn(&Properties) -> bool,
    ) -> Option<(Scope, &'a Properties)> {
        match self.job {
            Some(job) if present(job) => Some((Scope::Job, job)),
            _ => self.global.map(|global| (Scope::Global, global)),
        }
    }

    /// Resolve one facet with job-then-global fallback.
    pub fn facet<T: ?Sized>(
        &self,
        accessor: impl Fn(&'a Properties) -> Option<&'a T>,
    ) -> Option<(Scope, &'a T)> {
        self.job_then_global().find_map(|(scope, props)| accessor(props).map(|v| (scope, v)))
    }

    /// Like [`Scopes::facet`], consulting the consul job last.
    pub fn facet_with_consul_job<T: ?Sized>(
        &self,
        accessor: impl Fn(&'a Properties) -> Option<&'a T>,
    ) -> Option<(Scope, &'a T)> {
        self.facet(&accessor).or_else(|| {
            self.consul_job.and_then(|props| accessor(props).map(|v| (Scope::ConsulJob, v)))
        })
    }
}
