use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `TextCollection` handles the "what" (splitting, normalization,
/// idempotent mutation).
pub trait CollectionBackend {
    /// Read the raw content of a collection.
    /// Returns Ok(None) if it was never written.
    fn read(&self, name: &str) -> Result<Option<String>>;

    /// Replace the content of a collection.
    /// MUST be atomic (e.g. write to tmp then rename) so a reader never sees
    /// a partially written collection.
    fn write(&self, name: &str, content: &str) -> Result<()>;

    /// Location of the collection, real for FsBackend, virtual otherwise.
    fn path(&self, name: &str) -> PathBuf;
}

impl<T: CollectionBackend + ?Sized> CollectionBackend for &T {
    fn read(&self, name: &str) -> Result<Option<String>> {
        (**self).read(name)
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        (**self).write(name, content)
    }

    fn path(&self, name: &str) -> PathBuf {
        (**self).path(name)
    }
}
