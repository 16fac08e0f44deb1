//! # Known-Vocabulary Database
//!
//! The database owns every user collection and derives from them the set of
//! base forms the learner presumably knows:
//!
//! - every Japanese base form on an active flashcard (`anki.txt`) or in the
//!   study queue (`queue.txt`) is known;
//! - the marked lines (`marked.txt`) are then walked in stored order, and each
//!   one that still contributes a new base form is kept in
//!   `marked.trimmed.txt`. A marked line is trimmed when everything it teaches
//!   is already covered by cards, the queue or an earlier marked line.
//!
//! Derivation always starts from an empty set. It runs on `open`, `reload`,
//! `process_subtitles` and after every effective mutation; a no-op mutation
//! reports [`Mutation::Unchanged`] and leaves the derived state and the
//! [`generation`](KnownDatabase::generation) alone.
//!
//! Collections are only mutated through the database, so the derived state is
//! never stale with respect to the in-memory collections.

use crate::analyzer::Segmenter;
use crate::cache::SegmentationCache;
use crate::error::Result;
use crate::model::Segment;
use crate::queue::StudyQueue;
use crate::script::has_japanese_text;
use crate::store::collection::{ANKI, MARKED, MARKED_TRIMMED};
use crate::store::{CollectionBackend, Mutation, TextCollection};
use std::collections::HashSet;
use tracing::{debug, info};

pub struct KnownDatabase<S: Segmenter, B: CollectionBackend> {
    backend: B,
    segmenter: S,
    cache: SegmentationCache,
    anki: TextCollection,
    marked: TextCollection,
    queue: StudyQueue,
    trimmed: TextCollection,
    subs: Vec<String>,
    known: HashSet<String>,
    generation: u64,
}

impl<S: Segmenter, B: CollectionBackend> KnownDatabase<S, B> {
    /// Loads every collection from `backend` and derives the known set.
    pub fn open(backend: B, segmenter: S) -> Result<Self> {
        let mut db = Self {
            anki: TextCollection::empty(ANKI),
            marked: TextCollection::empty(MARKED),
            queue: StudyQueue::new(),
            trimmed: TextCollection::empty(MARKED_TRIMMED),
            backend,
            segmenter,
            cache: SegmentationCache::new(),
            subs: Vec::new(),
            known: HashSet::new(),
            generation: 0,
        };
        db.reload()?;
        Ok(db)
    }

    /// Re-reads the collections from the backend and re-derives.
    pub fn reload(&mut self) -> Result<()> {
        self.anki = TextCollection::load(&self.backend, ANKI)?;
        self.marked = TextCollection::load(&self.backend, MARKED)?;
        self.queue = StudyQueue::load(&self.backend)?;
        info!(
            anki = self.anki.len(),
            marked = self.marked.len(),
            queue = self.queue.entries().len(),
            "loaded collections"
        );
        let subs = std::mem::take(&mut self.subs);
        self.process_subtitles(subs)
    }

    /// Makes `subs` the current subtitle lines, analyzes every line not seen
    /// yet in one batch, and re-derives.
    pub fn process_subtitles(&mut self, subs: Vec<String>) -> Result<()> {
        self.subs = subs;
        let lines = self
            .subs
            .iter()
            .chain(self.anki.lines())
            .chain(self.marked.lines())
            .chain(self.queue.entries());
        let analyzed = self.cache.fill(&mut self.segmenter, lines)?;
        debug!(analyzed, cached = self.cache.len(), "segmented collection lines");
        self.update_known()
    }

    /// Rebuilds `known` and `marked.trimmed` from scratch.
    pub fn update_known(&mut self) -> Result<()> {
        let mut known = HashSet::new();
        for line in self.anki.lines().iter().chain(self.queue.entries()) {
            let segments = self.cache.segments(&mut self.segmenter, line)?;
            known.extend(japanese_bases(segments).map(str::to_string));
        }

        let mut trimmed = Vec::new();
        for line in self.marked.lines() {
            let segments = self.cache.segments(&mut self.segmenter, line)?;
            let mut teaches = false;
            for base in japanese_bases(segments) {
                teaches |= known.insert(base.to_string());
            }
            if teaches {
                trimmed.push(line.clone());
            }
        }

        self.known = known;
        self.trimmed.replace(&self.backend, trimmed)?;
        self.generation += 1;
        info!(
            known = self.known.len(),
            trimmed = self.trimmed.len(),
            generation = self.generation,
            "derived known vocabulary"
        );
        Ok(())
    }

    /// Wraps every unknown Japanese segment of `text` in `fmt`, a template
    /// whose `{}` stands for the segment.
    pub fn highlight(&mut self, text: &str, fmt: &str) -> Result<String> {
        let segments = self.cache.segments(&mut self.segmenter, text)?;
        let mut markup = String::with_capacity(text.len());
        for segment in segments {
            if is_unknown(&self.known, segment) {
                markup.push_str(&fmt.replacen("{}", &segment.surface, 1));
            } else {
                markup.push_str(&segment.surface);
            }
        }
        Ok(markup)
    }

    /// `(highlighted, total)` characters of `text`.
    pub fn highlight_stats(&mut self, text: &str) -> Result<(usize, usize)> {
        let segments = self.cache.segments(&mut self.segmenter, text)?;
        let mut red = 0;
        let mut total = 0;
        for segment in segments {
            let len = segment.char_len();
            if is_unknown(&self.known, segment) {
                red += len;
            }
            total += len;
        }
        Ok((red, total))
    }

    pub fn num_in_queue(&self) -> usize {
        self.queue.remaining()
    }

    /// Takes the next queued line. Queue membership is unchanged, so nothing
    /// is re-derived.
    pub fn take_from_queue(&mut self) -> Result<Option<String>> {
        self.queue.take(&self.backend)
    }

    pub fn mark(&mut self, line: &str) -> Result<Mutation> {
        let mutation = self.marked.add(&self.backend, line)?;
        self.after(mutation, line)
    }

    pub fn unmark(&mut self, line: &str) -> Result<Mutation> {
        let mutation = self.marked.remove(&self.backend, line)?;
        self.after(mutation, line)
    }

    pub fn enqueue(&mut self, line: &str) -> Result<Mutation> {
        let mutation = self.queue.add(&self.backend, line)?;
        self.after(mutation, line)
    }

    pub fn dequeue(&mut self, line: &str) -> Result<Mutation> {
        let mutation = self.queue.remove(&self.backend, line)?;
        self.after(mutation, line)
    }

    /// Marks `line` when unmarked and the reverse. Returns whether it is
    /// marked afterwards.
    pub fn toggle_mark(&mut self, line: &str) -> Result<bool> {
        if self.is_marked(line) {
            self.unmark(line)?;
            Ok(false)
        } else {
            self.mark(line)?;
            Ok(true)
        }
    }

    /// Queues `line` when absent and the reverse. Returns whether it is
    /// queued afterwards.
    pub fn toggle_queue(&mut self, line: &str) -> Result<bool> {
        if self.is_queued(line) {
            self.dequeue(line)?;
            Ok(false)
        } else {
            self.enqueue(line)?;
            Ok(true)
        }
    }

    /// Replaces the flashcard collection with `cards` (raw expressions, which
    /// may carry furigana markup) and reloads.
    pub fn replace_cards<T: AsRef<str>>(&mut self, cards: &[T]) -> Result<()> {
        let cards: Vec<&str> = cards
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();
        self.backend.write(ANKI.name, &ANKI.serialize(&cards))?;
        info!(cards = cards.len(), "replaced flashcard collection");
        self.reload()
    }

    fn after(&mut self, mutation: Mutation, line: &str) -> Result<Mutation> {
        if mutation.changed() {
            self.cache.fill(&mut self.segmenter, [line])?;
            self.update_known()?;
        }
        Ok(mutation)
    }

    pub fn is_marked(&self, line: &str) -> bool {
        self.marked.contains(line)
    }

    pub fn is_queued(&self, line: &str) -> bool {
        self.queue.contains(line)
    }

    pub fn is_known(&self, base: &str) -> bool {
        self.known.contains(base)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Number of derivations run so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn anki(&self) -> &[String] {
        self.anki.lines()
    }

    pub fn marked(&self) -> &[String] {
        self.marked.lines()
    }

    pub fn trimmed(&self) -> &[String] {
        self.trimmed.lines()
    }

    pub fn queue(&self) -> &StudyQueue {
        &self.queue
    }

    pub fn subs(&self) -> &[String] {
        &self.subs
    }

    pub fn cache(&self) -> &SegmentationCache {
        &self.cache
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn japanese_bases(segments: &[Segment]) -> impl Iterator<Item = &str> {
    segments
        .iter()
        .map(|s| s.base.as_str())
        .filter(|base| has_japanese_text(base))
}

fn is_unknown(known: &HashSet<String>, segment: &Segment) -> bool {
    has_japanese_text(&segment.surface) && !known.contains(&segment.base)
}
