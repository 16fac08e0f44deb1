//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every furiyomi operation, whatever the UI.
//!
//! The facade:
//! - **Opens** the known-vocabulary database for the operations that need it
//! - **Dispatches** to the command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! ## Generic Over Tools and Storage
//!
//! `FuriApi<S, C, B>` is generic over the segmenter, the phonetic converter
//! and the collection backend:
//! - Production: `FuriApi<MecabSegmenter, KakasiConverter, FsBackend>`
//! - Testing: `FuriApi<TableSegmenter, KanaConverter, MemBackend>`
//!
//! The analyzer tools start lazily, so operations that never segment text
//! (`queue count`, `queue take`, `kanji`, `config`, `paths`) work on a
//! machine without them, and so does highlighting when every input is empty.

use crate::analyzer::{PhoneticConverter, Segmenter};
use crate::commands::{self, CmdResult, FuriPaths};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::store::CollectionBackend;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, FileCoverage, MessageLevel, Stats};

pub struct FuriApi<S: Segmenter, C: PhoneticConverter, B: CollectionBackend> {
    backend: B,
    segmenter: S,
    converter: C,
    paths: FuriPaths,
}

type Database<'a, S, B> = KnownDatabase<&'a mut S, &'a B>;

impl<S: Segmenter, C: PhoneticConverter, B: CollectionBackend> FuriApi<S, C, B> {
    pub fn new(backend: B, segmenter: S, converter: C, paths: FuriPaths) -> Self {
        Self {
            backend,
            segmenter,
            converter,
            paths,
        }
    }

    pub fn paths(&self) -> &FuriPaths {
        &self.paths
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn database(&mut self) -> Result<Database<'_, S, B>> {
        KnownDatabase::open(&self.backend, &mut self.segmenter)
    }

    pub fn highlight(&mut self, files: &[PathBuf], fmt: &str) -> Result<CmdResult> {
        commands::highlight::run(&mut self.database()?, files, fmt)
    }

    pub fn furigana(&mut self, text: &str) -> Result<CmdResult> {
        commands::furigana::run(&mut self.segmenter, &mut self.converter, text)
    }

    pub fn mark(&mut self, line: &str) -> Result<CmdResult> {
        commands::mark::mark(&mut self.database()?, line)
    }

    pub fn unmark(&mut self, line: &str) -> Result<CmdResult> {
        commands::mark::unmark(&mut self.database()?, line)
    }

    pub fn toggle_mark(&mut self, line: &str) -> Result<CmdResult> {
        commands::mark::toggle(&mut self.database()?, line)
    }

    pub fn queue_count(&self) -> Result<CmdResult> {
        commands::queue::count(&self.backend)
    }

    pub fn queue_take(&self) -> Result<CmdResult> {
        commands::queue::take(&self.backend)
    }

    pub fn queue_add(&mut self, line: &str) -> Result<CmdResult> {
        commands::queue::add(&mut self.database()?, line)
    }

    pub fn queue_remove(&mut self, line: &str) -> Result<CmdResult> {
        commands::queue::remove(&mut self.database()?, line)
    }

    pub fn import_cards(&mut self, path: &Path) -> Result<CmdResult> {
        commands::cards::import(&mut self.database()?, path)
    }

    pub fn kanji(&self, ksdata: &Path, all_cards: Option<&Path>) -> Result<CmdResult> {
        commands::kanji::run(&self.backend, ksdata, all_cards)
    }

    pub fn stats(&mut self) -> Result<CmdResult> {
        commands::stats::run(&self.database()?)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn file_paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.paths, &self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::memory::{KanaConverter, TableSegmenter};
    use crate::store::mem_backend::MemBackend;

    fn api(backend: MemBackend) -> FuriApi<TableSegmenter, KanaConverter, MemBackend> {
        let segmenter = TableSegmenter::new().with_word("猫", "猫", "ネコ");
        let paths = FuriPaths {
            data: PathBuf::from("/nonexistent/furiyomi"),
        };
        FuriApi::new(backend, segmenter, KanaConverter::new(), paths)
    }

    #[test]
    fn mutations_persist_between_calls() {
        let mut api = api(MemBackend::new());
        api.mark("猫だ").unwrap();
        api.queue_add("犬").unwrap();

        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.marked, 1);
        assert_eq!(stats.queued, 1);
        assert_eq!(api.backend().file("marked.txt").unwrap(), "猫だ\n");
    }

    #[test]
    fn queue_take_skips_the_analyzer() {
        let mut api = api(MemBackend::new().with_file("queue.txt", "猫\n\n犬\n"));
        assert_eq!(api.queue_take().unwrap().output, ["猫"]);
        assert_eq!(api.queue_count().unwrap().output, ["1"]);
        assert_eq!(api.segmenter.calls(), 0);
        api.queue_remove("猫").unwrap();
        assert_eq!(api.queue_count().unwrap().output, ["1"]);
    }

    #[test]
    fn furigana_uses_converter() {
        let mut api = api(MemBackend::new());
        assert_eq!(api.furigana("猫").unwrap().output, ["猫[ねこ]"]);
    }

    #[test]
    fn toggle_mark_round_trip() {
        let mut api = api(MemBackend::new());
        api.toggle_mark("猫").unwrap();
        api.toggle_mark("猫").unwrap();
        assert_eq!(api.backend().file("marked.txt").unwrap(), "\n");
    }
}
