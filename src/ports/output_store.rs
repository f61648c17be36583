use std::path::Path;

use crate::domain::AppError;

/// Destination for the generated script and certificate files.
pub trait OutputStore {
    /// Write `content` to the file `name`, replacing any previous file.
    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError>;

    /// Location reported to the user.
    fn root(&self) -> &Path;
}
