use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::kanjistudy::{compare, load_ratings, KanjiReport};
use crate::model::cleanup_card;
use crate::store::collection::ANKI;
use crate::store::{CollectionBackend, TextCollection};
use std::fs;
use std::path::Path;

/// Compares the kanji of the active flashcards with a Kanji Study backup.
///
/// `all_cards` lists every card including suspended ones, one per line; when
/// given, familiar kanji found only on suspended cards are flagged.
pub fn run<B: CollectionBackend>(
    backend: &B,
    ksdata: &Path,
    all_cards: Option<&Path>,
) -> Result<CmdResult> {
    let active = TextCollection::load(backend, ANKI)?;
    let all = match all_cards {
        Some(path) => Some(
            fs::read_to_string(path)?
                .lines()
                .map(cleanup_card)
                .collect::<Vec<_>>(),
        ),
        None => None,
    };
    let ratings = load_ratings(ksdata)?;
    let report = compare(active.lines(), all.as_deref(), &ratings);

    let mut result = CmdResult::default();
    if active.is_empty() {
        result.add_message(CmdMessage::warning(
            "No flashcards yet, import them with `furiyomi cards import`",
        ));
    }
    Ok(result.with_output(render(&report)).with_kanji(report))
}

fn render(report: &KanjiReport) -> Vec<String> {
    let line = |kanji: &[char]| kanji.iter().collect::<String>();
    let familiar = report
        .familiar
        .iter()
        .map(|f| {
            if f.suspended {
                format!("({})", f.kanji)
            } else {
                f.kanji.to_string()
            }
        })
        .collect::<String>();
    vec![
        "New kanji on a reading flashcard:".to_string(),
        line(&report.new),
        "Seen kanji on a reading flashcard:".to_string(),
        line(&report.seen),
        "Familiar/Known kanji not on an active reading flashcard (suspended in parentheses):"
            .to_string(),
        familiar,
    ]
}
