use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Filesystem-based output directory.
///
/// The directory is created by the first write, so a run that fails before
/// writing leaves nothing behind.
#[derive(Debug, Clone)]
pub struct FilesystemOutputStore {
    root: PathBuf,
}

impl FilesystemOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputStore for FilesystemOutputStore {
    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        let mut components = Path::new(name).components();
        if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
            return Err(AppError::config_error(format!(
                "Refusing to write '{}': output files must be plain file names",
                name
            )));
        }

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        fs::write(&path, content)?;
        info!(path = %path.display(), "wrote output file");
        Ok(())
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
