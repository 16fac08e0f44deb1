use crate::analyzer::Segmenter;
use crate::commands::{CmdResult, FileCoverage};
use crate::error::Result;
use crate::known::KnownDatabase;
use crate::model::split_paragraphs;
use crate::store::CollectionBackend;
use std::fs;
use std::path::{Path, PathBuf};

/// Highlights subtitle files against the known vocabulary.
///
/// A single file is rendered paragraph by paragraph, unknown words wrapped in
/// `fmt`. Several files are summarized, one coverage entry per file.
pub fn run<S: Segmenter, B: CollectionBackend>(
    db: &mut KnownDatabase<S, B>,
    files: &[PathBuf],
    fmt: &str,
) -> Result<CmdResult> {
    if let [path] = files {
        let subs = read_subtitles(path)?;
        db.process_subtitles(subs.clone())?;
        let output = subs
            .iter()
            .map(|line| db.highlight(line, fmt))
            .collect::<Result<Vec<_>>>()?;
        return Ok(CmdResult::default().with_output(output));
    }

    let mut coverage = Vec::with_capacity(files.len());
    for path in files {
        let subs = read_subtitles(path)?;
        db.process_subtitles(subs.clone())?;
        let (mut red, mut total) = (0, 0);
        for line in &subs {
            let (r, t) = db.highlight_stats(line)?;
            red += r;
            total += t;
        }
        tracing::info!(path = %path.display(), red, total, "measured coverage");
        coverage.push(FileCoverage {
            path: path.clone(),
            red,
            total,
        });
    }
    let output = coverage.iter().map(|c| c.to_string()).collect();
    Ok(CmdResult::default()
        .with_output(output)
        .with_coverage(coverage))
}

fn read_subtitles(path: &Path) -> Result<Vec<String>> {
    Ok(split_paragraphs(&fs::read_to_string(path)?))
}
