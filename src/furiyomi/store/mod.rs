//! # Storage Layer
//!
//! Text collections are ordered lists of strings, one plain file each, kept
//! in the furiyomi data directory:
//!
//! ```text
//! <data dir>/
//! ├── anki.txt            # active flashcard expressions, one per line
//! ├── marked.txt          # lines marked as known, blank-line separated
//! ├── marked.trimmed.txt  # derived: marked lines that still teach a word
//! ├── queue.txt           # study queue, `***` marks the cursor
//! └── config.json         # tool configuration
//! ```
//!
//! Raw I/O sits behind the [`backend::CollectionBackend`] trait:
//!
//! - [`fs_backend::FsBackend`]: production, files in a directory, written
//!   atomically (temp file, then rename).
//! - [`mem_backend::MemBackend`]: in-memory, for tests.
//!
//! [`collection::TextCollection`] adds splitting, normalization and
//! idempotent mutation on top. There is no cross-process locking: a
//! collection file edited by another process while furiyomi runs is
//! overwritten by the next mutation.

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::CollectionBackend;
pub use collection::{CollectionSpec, Mutation, TextCollection};
