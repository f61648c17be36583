use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::OutputStore;

/// In-memory output directory.
pub struct MemoryOutputStore {
    root: PathBuf,
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), files: Mutex::new(BTreeMap::new()) }
    }

    pub fn file(&self, name: &str) -> Option<String> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl OutputStore for MemoryOutputStore {
    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
