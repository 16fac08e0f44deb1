use super::backend::CollectionBackend;
use crate::error::{FuriError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory collection backend for testing.
///
/// Uses `RefCell` for interior mutability since furiyomi is single-threaded,
/// which lets `CollectionBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with raw file content.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        self
    }

    /// Raw content of a collection, as it would be on disk.
    pub fn file(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl CollectionBackend for MemBackend {
    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.file(name))
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FuriError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", name))
    }
}
