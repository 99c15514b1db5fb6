use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the data directory. Input and output files
/// for a dataset live side by side under the same root.
#[derive(Debug, Clone)]
pub struct DataDirStorage {
    data_dir: String,
}

impl DataDirStorage {
    pub fn new(data_dir: String) -> Self {
        Self { data_dir }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        Path::new(&self.data_dir).join(file)
    }

    fn with_path(path: &Path, e: std::io::Error) -> EtlError {
        EtlError::IoError(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    }
}

impl Storage for DataDirStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| Self::with_path(&full_path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Self::with_path(parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| Self::with_path(&full_path, e))
    }
}
