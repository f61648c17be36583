use tracing::debug;

use super::Scopes;
use crate::domain::{AppError, InstallerArguments};

/// `loggregator.etcd.machines[0]`, job before global.
pub fn resolve_etcd_cluster(
    scopes: &Scopes,
    args: &mut InstallerArguments,
) -> Result<(), AppError> {
    let (scope, loggregator) =
        scopes.facet(|p| p.loggregator.as_ref()).ok_or(AppError::EtcdMachinesMissing)?;
    let machine = loggregator.etcd.machines.first().ok_or(AppError::EtcdMachinesMissing)?;

    debug!(%scope, machine = %machine, "resolved etcd cluster");
    args.etcd_cluster = machine.clone();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::resolve_with;

    #[test]
    fn job_machines_win_over_global() {
        let args = resolve_with(
            resolve_etcd_cluster,
            r#"
jobs:
  - name: cell
    properties:
      diego: { rep: {} }
      loggregator:
        etcd:
          machines: [10.0.0.9, 10.0.0.10]
properties:
  loggregator:
    etcd:
      machines: [10.0.1.9]
"#,
        )
        .unwrap();
        assert_eq!(args.etcd_cluster, "10.0.0.9");
    }

    #[test]
    fn falls_back_to_global_machines() {
        let args = resolve_with(
            resolve_etcd_cluster,
            r#"
jobs:
  - name: cell
    properties:
      diego: { rep: {} }
properties:
  loggregator:
    etcd:
      machines: [10.0.1.9]
"#,
        )
        .unwrap();
        assert_eq!(args.etcd_cluster, "10.0.1.9");
    }

    #[test]
    fn empty_machine_list_is_fatal() {
        let err = resolve_with(
            resolve_etcd_cluster,
            r#"
jobs:
  - name: cell
    properties:
      diego: { rep: {} }
      loggregator:
        etcd:
          machines: []
"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::EtcdMachinesMissing));
    }

    #[test]
    fn missing_loggregator_everywhere_is_fatal() {
        let err = resolve_with(
            resolve_etcd_cluster,
            "jobs:\n  - name: cell\n    properties:\n      diego: { rep: {} }\n",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::EtcdMachinesMissing));
    }
}
