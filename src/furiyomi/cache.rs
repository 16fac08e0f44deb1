use crate::analyzer::Segmenter;
use crate::error::{FuriError, Result};
use crate::model::{reconstruct, Segment};
use std::collections::{HashMap, HashSet};

/// Line → segments, so each distinct line reaches the analyzer once no
/// matter how many collections contain it.
///
/// Every stored entry reconstructs its line exactly. A line whose analysis
/// does not reconstruct is rejected before it is stored, and a second,
/// different segmentation of a stored line is refused.
#[derive(Debug, Default)]
pub struct SegmentationCache {
    lines: HashMap<String, Vec<Segment>>,
}

impl SegmentationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        line.is_empty() || self.lines.contains_key(line)
    }

    /// Cached segments, without analyzing.
    pub fn get(&self, line: &str) -> Option<&[Segment]> {
        if line.is_empty() {
            return Some(&[]);
        }
        self.lines.get(line).map(|segments| segments.as_slice())
    }

    /// Stores the segmentation of `line` after checking it.
    pub fn insert(&mut self, line: &str, segments: Vec<Segment>) -> Result<()> {
        let rebuilt = reconstruct(&segments);
        if rebuilt != line {
            return Err(FuriError::ProtocolViolation(format!(
                "segments of {:?} reconstruct to {:?}",
                line, rebuilt
            )));
        }
        if let Some(existing) = self.lines.get(line) {
            if *existing != segments {
                return Err(FuriError::CacheInconsistency {
                    line: line.to_string(),
                });
            }
            return Ok(());
        }
        if !line.is_empty() {
            self.lines.insert(line.to_string(), segments);
        }
        Ok(())
    }

    /// Analyzes every line of the batch not cached yet, in one batch call.
    /// Returns the number of lines sent to the analyzer.
    pub fn fill<S, I, L>(&mut self, segmenter: &mut S, lines: I) -> Result<usize>
    where
        S: Segmenter,
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut missing: Vec<String> = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if !self.contains(line) && seen.insert(line.to_string()) {
                missing.push(line.to_string());
            }
        }
        if missing.is_empty() {
            return Ok(0);
        }

        let batch: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
        let analyzed = segmenter.analyze_batch(&batch)?;
        if analyzed.len() != batch.len() {
            return Err(FuriError::ProtocolViolation(format!(
                "analyzer answered {} of {} lines",
                analyzed.len(),
                batch.len()
            )));
        }
        for (line, segments) in batch.iter().zip(analyzed) {
            self.insert(line, segments)?;
        }
        tracing::debug!(analyzed = batch.len(), cached = self.len(), "filled segmentation cache");
        Ok(batch.len())
    }

    /// Segments of `line`, analyzing it on first use.
    pub fn segments<S: Segmenter>(&mut self, segmenter: &mut S, line: &str) -> Result<&[Segment]> {
        if !self.contains(line) {
            let segments = segmenter.analyze(line)?;
            self.insert(line, segments)?;
        }
        Ok(self.get(line).unwrap_or(&[]))
    }
}
