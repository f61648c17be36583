use tracing::debug;

use super::Scopes;
use crate::domain::manifest::Properties;
use crate::domain::{AppError, InstallerArguments};

/// Loggregator shared secret from `metron_endpoint`, or the legacy
/// `loggregator_endpoint`.
///
/// The scope is chosen first: the job when it sets either field, otherwise
/// global. Within that scope `metron_endpoint` wins.
pub fn resolve_shared_secret(
    scopes: &Scopes,
    args: &mut InstallerArguments,
) -> Result<(), AppError> {
    let Some((scope, props)) = scopes.first_where(declares_endpoint) else {
        debug!("no metron_endpoint or loggregator_endpoint declared");
        return Ok(());
    };

    if let Some(endpoint) = props.metron_endpoint.as_ref().or(props.loggregator_endpoint.as_ref())
    {
        debug!(%scope, "resolved loggregator shared secret");
        args.shared_secret = endpoint.shared_secret.clone();
    }
    Ok(())
}

fn declares_endpoint(props: &Properties) -> bool {
    props.metron_endpoint.is_some() || props.loggregator_endpoint.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::resolve_with;

    fn secret(yaml: &str) -> String {
        resolve_with(resolve_shared_secret, yaml).unwrap().shared_secret
    }

    #[test]
    fn job_legacy_loggregator_endpoint() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
      loggregator_endpoint: { shared_secret: foo }
properties: {}
"#
            ),
            "foo"
        );
    }

    #[test]
    fn job_metron_endpoint() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
      metron_endpoint: { shared_secret: foo }
properties: {}
"#
            ),
            "foo"
        );
    }

    #[test]
    fn global_legacy_loggregator_endpoint() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
properties:
  loggregator_endpoint: { shared_secret: foo }
"#
            ),
            "foo"
        );
    }

    #[test]
    fn global_metron_endpoint() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
properties:
  metron_endpoint: { shared_secret: foo }
"#
            ),
            "foo"
        );
    }

    #[test]
    fn current_field_wins_within_a_scope() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
      loggregator_endpoint: { shared_secret: legacy }
      metron_endpoint: { shared_secret: current }
"#
            ),
            "current"
        );
    }

    #[test]
    fn job_legacy_field_beats_global_current_field() {
        assert_eq!(
            secret(
                r#"
jobs:
  - properties:
      diego: { rep: {} }
      loggregator_endpoint: { shared_secret: job }
properties:
  metron_endpoint: { shared_secret: global }
"#
            ),
            "job"
        );
    }

    #[test]
    fn absent_everywhere_leaves_secret_empty() {
        assert_eq!(secret("jobs:\n  - properties:\n      diego: { rep: {} }\n"), "");
    }
}
