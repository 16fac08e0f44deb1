//! Study queue commands.
//!
//! Counting and taking only move the cursor, so they work on the queue file
//! directly and never start the analyzer. Adding and removing change what is
//! known and go through the database.

use crate::analyzer::Segmenter;
use crate::commands::mark::report;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::queue::StudyQueue;
use crate::store::CollectionBackend;

pub fn count<B: CollectionBackend>(backend: &B) -> Result<CmdResult> {
    let queue = StudyQueue::load(backend)?;
    Ok(CmdResult::default().with_output(vec![queue.remaining().to_string()]))
}

pub fn take<B: CollectionBackend>(backend: &B) -> Result<CmdResult> {
    let mut queue = StudyQueue::load(backend)?;
    match queue.take(backend)? {
        Some(line) => {
            let mut result = CmdResult::default().with_output(vec![line]);
            result.add_message(CmdMessage::info(format!(
                "{} remaining",
                queue.remaining()
            )));
            Ok(result)
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("Queue is empty"));
            Ok(result)
        }
    }
}

pub fn add<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    line: &str,
) -> Result<CmdResult> {
    let mutation = db.enqueue(line)?;
    let mut result = report(mutation, "Queued", "Already queued", line);
    result.add_message(CmdMessage::info(format!("{} in queue", db.num_in_queue())));
    Ok(result)
}

pub fn remove<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    line: &str,
) -> Result<CmdResult> {
    let mutation = db.dequeue(line)?;
    Ok(report(mutation, "Removed from queue", "Not queued", line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::memory::TableSegmenter;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn take_returns_next_entry() {
        let backend = MemBackend::new().with_file("queue.txt", "a\n\n***\n\nb\n\nc\n");
        assert_eq!(count(&backend).unwrap().output, ["2"]);

        let result = take(&backend).unwrap();
        assert_eq!(result.output, ["b"]);
        assert_eq!(result.messages[0].content, "1 remaining");
        assert_eq!(backend.file("queue.txt").unwrap(), "a\n\nb\n\n***\n\nc\n");
    }

    #[test]
    fn take_from_empty_queue_warns() {
        let backend = MemBackend::new();
        let result = take(&backend).unwrap();
        assert!(result.output.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(backend.file("queue.txt").is_none());
    }

    #[test]
    fn add_and_remove_go_through_database() {
        let mut db = KnownDatabase::open(MemBackend::new(), TableSegmenter::new()).unwrap();
        let result = add(&mut db, "猫").unwrap();
        assert_eq!(result.messages[1].content, "1 in queue");
        assert!(db.is_known("猫"));

        remove(&mut db, "猫").unwrap();
        assert!(!db.is_queued("猫"));
        assert!(!db.is_known("猫"));
    }
}
