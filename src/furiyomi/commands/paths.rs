use crate::commands::{CmdResult, FuriPaths};
use crate::config::CONFIG_FILENAME;
use crate::error::Result;
use crate::store::collection::{ANKI, MARKED, MARKED_TRIMMED, QUEUE};
use crate::store::CollectionBackend;

/// Where every collection and the config file live.
pub fn run<B: CollectionBackend>(paths: &FuriPaths, backend: &B) -> Result<CmdResult> {
    let mut files: Vec<_> = [ANKI, MARKED, MARKED_TRIMMED, QUEUE]
        .iter()
        .map(|spec| backend.path(spec.name))
        .collect();
    files.push(paths.data.join(CONFIG_FILENAME));
    let output = files.iter().map(|p| p.display().to_string()).collect();
    Ok(CmdResult::default().with_output(output).with_paths(files))
}
