use crate::analyzer::Segmenter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::store::{CollectionBackend, Mutation};

pub fn mark<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    line: &str,
) -> Result<CmdResult> {
    let mutation = db.mark(line)?;
    Ok(report(mutation, "Marked as known", "Already marked", line))
}

pub fn unmark<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    line: &str,
) -> Result<CmdResult> {
    let mutation = db.unmark(line)?;
    Ok(report(mutation, "Unmarked", "Not marked", line))
}

pub fn toggle<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    line: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let verb = if db.toggle_mark(line)? {
        "Marked as known"
    } else {
        "Unmarked"
    };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, line)));
    Ok(result)
}

pub(crate) fn report(mutation: Mutation, changed: &str, unchanged: &str, line: &str) -> CmdResult {
    let mut result = CmdResult::default();
    let message = match mutation {
        Mutation::Changed => CmdMessage::success(format!("{}: {}", changed, line)),
        Mutation::Unchanged => CmdMessage::info(format!("{}: {}", unchanged, line)),
    };
    result.add_message(message);
    result
}
