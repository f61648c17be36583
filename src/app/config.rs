use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, GeneratorConfig, parse_config_content};

/// Load configuration from `path`, or defaults when no path is given.
///
/// An explicitly named file that cannot be read is an error.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, AppError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded generator config");
    parse_config_content(&content)
}
