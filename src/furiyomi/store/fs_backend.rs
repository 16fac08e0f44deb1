use super::backend::CollectionBackend;
use crate::error::{FuriError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Collections as plain files in one directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FuriError::Io)?;
        }
        Ok(())
    }
}

impl CollectionBackend for FsBackend {
    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(FuriError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.path(name);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(FuriError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(FuriError::Io(e));
        }
        tracing::trace!(path = %target.display(), bytes = content.len(), "wrote collection");
        Ok(())
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_collection_reads_as_none() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        assert!(backend.read("marked.txt").unwrap().is_none());
    }

    #[test]
    fn write_creates_root_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        backend.write("queue.txt", "a\n\n***\n").unwrap();
        backend.write("queue.txt", "a\n\nb\n").unwrap();

        assert_eq!(backend.read("queue.txt").unwrap().unwrap(), "a\n\nb\n");
        let names: Vec<_> = fs::read_dir(backend.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["queue.txt"]);
    }
}
