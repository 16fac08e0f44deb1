//! Study queue with an explicit cursor.
//!
//! On disk the queue is an ordinary collection where one `***` line marks the
//! cursor: entries above it were taken, entries below are still pending. In
//! memory the sentinel is never an entry; the cursor is the number of taken
//! entries, absent when the file has no sentinel (nothing taken yet).

use crate::error::{FuriError, Result};
use crate::store::collection::QUEUE;
use crate::store::{CollectionBackend, Mutation};
use tracing::warn;

/// Line persisting the queue cursor.
pub const SENTINEL: &str = "***";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyQueue {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl StudyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a queue from collection lines. The first sentinel becomes the
    /// cursor, any later one is dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue = Self::new();
        for line in lines {
            let line = line.into();
            if line != SENTINEL {
                queue.entries.push(line);
            } else if queue.cursor.is_none() {
                queue.cursor = Some(queue.entries.len());
            } else {
                warn!(
                    position = queue.entries.len(),
                    "dropping extra queue sentinel"
                );
            }
        }
        queue
    }

    pub fn load<B: CollectionBackend>(backend: &B) -> Result<Self> {
        let content = backend.read(QUEUE.name)?.unwrap_or_default();
        Ok(Self::from_lines(QUEUE.parse(&content)))
    }

    pub fn save<B: CollectionBackend>(&self, backend: &B) -> Result<()> {
        backend.write(QUEUE.name, &QUEUE.serialize(&self.to_lines()))
    }

    /// Lines as persisted, sentinel included when a cursor exists.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.entries.clone();
        if let Some(cursor) = self.cursor {
            lines.insert(cursor, SENTINEL.to_string());
        }
        lines
    }

    /// Every entry, taken or not, without the sentinel.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn contains(&self, line: &str) -> bool {
        self.entries.iter().any(|e| e == line)
    }

    fn start(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Entries after the cursor.
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.start()
    }

    /// Appends an entry at the end of the queue.
    pub fn add<B: CollectionBackend>(&mut self, backend: &B, line: &str) -> Result<Mutation> {
        if line == SENTINEL {
            return Err(FuriError::Store(format!(
                "{} marks the queue position and cannot be queued",
                SENTINEL
            )));
        }
        if self.contains(line) {
            return Ok(Mutation::Unchanged);
        }
        let mut next = self.clone();
        next.entries.push(line.to_string());
        next.save(backend)?;
        *self = next;
        Ok(Mutation::Changed)
    }

    /// Removes an entry. Removing a taken entry moves the cursor back so the
    /// pending entries stay pending.
    pub fn remove<B: CollectionBackend>(&mut self, backend: &B, line: &str) -> Result<Mutation> {
        let Some(pos) = self.entries.iter().position(|e| e == line) else {
            return Ok(Mutation::Unchanged);
        };
        let mut next = self.clone();
        next.entries.remove(pos);
        if let Some(cursor) = next.cursor.as_mut() {
            if pos < *cursor {
                *cursor -= 1;
            }
        }
        next.save(backend)?;
        *self = next;
        Ok(Mutation::Changed)
    }

    /// Takes the next pending entry and moves the cursor past it. The entry
    /// stays in the queue. An exhausted queue yields `None` and writes nothing.
    pub fn take<B: CollectionBackend>(&mut self, backend: &B) -> Result<Option<String>> {
        let start = self.start();
        let Some(entry) = self.entries.get(start).cloned() else {
            return Ok(None);
        };
        let next = Self {
            entries: self.entries.clone(),
            cursor: Some(start + 1),
        };
        next.save(backend)?;
        *self = next;
        Ok(Some(entry))
    }
}
