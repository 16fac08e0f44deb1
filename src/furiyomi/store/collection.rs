use super::backend::CollectionBackend;
use crate::error::Result;
use crate::model::{cleanup_card, PARAGRAPH_BREAK};

/// How a named collection is laid out on disk.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub delimiter: &'static str,
    pub normalize: Option<fn(&str) -> String>,
}

/// Expressions of active flashcards, one per line, furigana markup removed.
pub const ANKI: CollectionSpec = CollectionSpec {
    name: "anki.txt",
    delimiter: "\n",
    normalize: Some(cleanup_card),
};

/// Lines manually marked as known.
pub const MARKED: CollectionSpec = CollectionSpec {
    name: "marked.txt",
    delimiter: PARAGRAPH_BREAK,
    normalize: None,
};

/// Marked lines that still teach at least one word. Derived, write-only.
pub const MARKED_TRIMMED: CollectionSpec = CollectionSpec {
    name: "marked.trimmed.txt",
    delimiter: PARAGRAPH_BREAK,
    normalize: None,
};

/// Lines scheduled for study, with the `***` cursor line.
pub const QUEUE: CollectionSpec = CollectionSpec {
    name: "queue.txt",
    delimiter: PARAGRAPH_BREAK,
    normalize: None,
};

/// Outcome of an idempotent mutation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Changed,
    Unchanged,
}

impl Mutation {
    pub fn changed(self) -> bool {
        self == Mutation::Changed
    }
}

impl CollectionSpec {
    /// Splits raw file content into entries.
    pub fn parse(&self, content: &str) -> Vec<String> {
        let content = content.trim();
        if content.is_empty() {
            return Vec::new();
        }
        content
            .split(self.delimiter)
            .map(|entry| {
                let entry = entry.trim_end();
                match self.normalize {
                    Some(normalize) => normalize(entry),
                    None => entry.to_string(),
                }
            })
            .collect()
    }

    /// Joins entries into file content, with a trailing newline.
    pub fn serialize<S: AsRef<str>>(&self, entries: &[S]) -> String {
        let mut out = entries
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(self.delimiter);
        out.push('\n');
        out
    }
}

/// An ordered list of strings persisted as one file.
///
/// `add` and `remove` are idempotent; an effective mutation rewrites the whole
/// file before returning [`Mutation::Changed`], a no-op touches nothing.
#[derive(Debug, Clone)]
pub struct TextCollection {
    spec: CollectionSpec,
    lines: Vec<String>,
}

impl TextCollection {
    pub fn empty(spec: CollectionSpec) -> Self {
        Self {
            spec,
            lines: Vec::new(),
        }
    }

    pub fn load<B: CollectionBackend>(backend: &B, spec: CollectionSpec) -> Result<Self> {
        let lines = match backend.read(spec.name)? {
            Some(content) => spec.parse(&content),
            None => Vec::new(),
        };
        Ok(Self { spec, lines })
    }

    pub fn spec(&self) -> &CollectionSpec {
        &self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn save<B: CollectionBackend>(&self, backend: &B) -> Result<()> {
        backend.write(self.spec.name, &self.spec.serialize(&self.lines))
    }

    pub fn add<B: CollectionBackend>(&mut self, backend: &B, line: &str) -> Result<Mutation> {
        if self.contains(line) {
            return Ok(Mutation::Unchanged);
        }
        let mut lines = self.lines.clone();
        lines.push(line.to_string());
        self.commit(backend, lines)?;
        Ok(Mutation::Changed)
    }

    pub fn remove<B: CollectionBackend>(&mut self, backend: &B, line: &str) -> Result<Mutation> {
        let Some(pos) = self.lines.iter().position(|l| l == line) else {
            return Ok(Mutation::Unchanged);
        };
        let mut lines = self.lines.clone();
        lines.remove(pos);
        self.commit(backend, lines)?;
        Ok(Mutation::Changed)
    }

    /// Replaces every entry and persists.
    pub fn replace<B: CollectionBackend>(&mut self, backend: &B, lines: Vec<String>) -> Result<()> {
        self.commit(backend, lines)
    }

    /// Writes `lines` and only then adopts them, so a failed write leaves
    /// memory matching the file.
    fn commit<B: CollectionBackend>(&mut self, backend: &B, lines: Vec<String>) -> Result<()> {
        backend.write(self.spec.name, &self.spec.serialize(&lines))?;
        self.lines = lines;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn missing_and_empty_files_are_empty_collections() {
        let backend = MemBackend::new().with_file("marked.txt", "\n\n  \n");
        assert!(TextCollection::load(&backend, MARKED).unwrap().is_empty());
        assert!(TextCollection::load(&backend, QUEUE).unwrap().is_empty());
    }

    #[test]
    fn parse_strips_trailing_whitespace_per_entry() {
        let backend = MemBackend::new().with_file("marked.txt", "一  \n\n二\t\n三\n");
        let marked = TextCollection::load(&backend, MARKED).unwrap();
        assert_eq!(marked.lines(), ["一", "二\t\n三"]);
    }

    #[test]
    fn anki_entries_are_cleaned() {
        let backend = MemBackend::new().with_file("anki.txt", "漢字[かんじ]\n 日本[にほん]<br>\n");
        let anki = TextCollection::load(&backend, ANKI).unwrap();
        assert_eq!(anki.lines(), ["漢字", "日本"]);
    }

    #[test]
    fn add_persists_with_trailing_newline() {
        let backend = MemBackend::new();
        let mut marked = TextCollection::empty(MARKED);
        assert_eq!(marked.add(&backend, "一").unwrap(), Mutation::Changed);
        assert_eq!(marked.add(&backend, "二").unwrap(), Mutation::Changed);
        assert_eq!(backend.file("marked.txt").unwrap(), "一\n\n二\n");
    }

    #[test]
    fn mutations_are_idempotent() {
        let backend = MemBackend::new();
        let mut marked = TextCollection::empty(MARKED);
        assert!(marked.add(&backend, "一").unwrap().changed());
        let writes = backend.writes();

        assert_eq!(marked.add(&backend, "一").unwrap(), Mutation::Unchanged);
        assert_eq!(marked.remove(&backend, "二").unwrap(), Mutation::Unchanged);
        assert_eq!(backend.writes(), writes);
        assert_eq!(marked.lines(), ["一"]);

        assert_eq!(marked.remove(&backend, "一").unwrap(), Mutation::Changed);
        assert_eq!(backend.file("marked.txt").unwrap(), "\n");
    }

    #[test]
    fn write_failure_is_reported() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut marked = TextCollection::empty(MARKED);
        assert!(marked.add(&backend, "一").is_err());
        assert!(marked.is_empty());

        backend.set_simulate_write_error(false);
        assert_eq!(marked.add(&backend, "一").unwrap(), Mutation::Changed);
        backend.set_simulate_write_error(true);
        assert!(marked.remove(&backend, "一").is_err());
        assert_eq!(marked.lines(), ["一"]);
        assert_eq!(backend.file("marked.txt").unwrap(), "一\n");
    }

    #[test]
    fn file_round_trip_keeps_order() {
        let backend = MemBackend::new();
        let mut queue = TextCollection::empty(QUEUE);
        queue
            .replace(&backend, vec!["c".into(), "a".into(), "b".into()])
            .unwrap();
        let reloaded = TextCollection::load(&backend, QUEUE).unwrap();
        assert_eq!(reloaded.lines(), ["c", "a", "b"]);
    }
}
