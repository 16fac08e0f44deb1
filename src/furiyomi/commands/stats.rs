use crate::analyzer::Segmenter;
use crate::commands::{CmdResult, Stats};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::store::CollectionBackend;

pub fn run<S: Segmenter, B: CollectionBackend>(db: &KnownDatabase<S, B>) -> Result<CmdResult> {
    let stats = Stats {
        cards: db.anki().len(),
        marked: db.marked().len(),
        trimmed: db.trimmed().len(),
        queued: db.queue().entries().len(),
        pending: db.num_in_queue(),
        known: db.known_count(),
    };
    let output = vec![
        format!("cards    {}", stats.cards),
        format!("marked   {} ({} still teaching)", stats.marked, stats.trimmed),
        format!("queue    {} ({} pending)", stats.queued, stats.pending),
        format!("known    {}", stats.known),
    ];
    Ok(CmdResult::default().with_output(output).with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::memory::TableSegmenter;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn counts_collections() {
        let backend = MemBackend::new()
            .with_file("anki.txt", "猫\n")
            .with_file("marked.txt", "猫\n\n犬\n")
            .with_file("queue.txt", "鳥\n\n***\n\n魚\n");
        let db = KnownDatabase::open(backend, TableSegmenter::new()).unwrap();
        let stats = run(&db).unwrap().stats.unwrap();
        assert_eq!(
            stats,
            Stats {
                cards: 1,
                marked: 2,
                trimmed: 1,
                queued: 2,
                pending: 1,
                known: 4,
            }
        );
    }
}
