use serde::Serialize;

use crate::domain::{AppError, InstallerArguments};

/// Everything the installer script template can reference.
#[derive(Debug, Serialize)]
pub struct ScriptContext<'a> {
    #[serde(flatten)]
    pub arguments: &'a InstallerArguments,
    pub stack: &'a str,
    pub etcd_port: u16,
}

/// Trait for rendering the installer script.
///
/// Keeps the template engine out of the application layer.
pub trait ScriptRenderer {
    /// File name the rendered script is written to.
    fn file_name(&self) -> &str;

    /// Render the script for the given context.
    fn render(&self, context: &ScriptContext<'_>) -> Result<String, AppError>;
}
