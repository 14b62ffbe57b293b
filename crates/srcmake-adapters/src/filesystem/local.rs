//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use srcmake_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SrcmakeError, SrcmakeResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SrcmakeResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SrcmakeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SrcmakeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));

        let file = path.join("Foo.h");
        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing/Foo.h");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        assert!(matches!(
            err,
            SrcmakeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
