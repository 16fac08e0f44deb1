use crate::analyzer::Segmenter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::store::CollectionBackend;
use std::fs;
use std::path::Path;

/// Replaces the flashcard collection with the expressions listed in `path`,
/// one card per line.
pub fn import<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    path: &Path,
) -> Result<CmdResult> {
    let content = fs::read_to_string(path)?;
    let cards: Vec<&str> = content.lines().collect();
    let before = db.known_count();
    db.replace_cards(&cards)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} cards from {}",
        db.anki().len(),
        path.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "{} known words (was {})",
        db.known_count(),
        before
    )));
    Ok(result)
}
