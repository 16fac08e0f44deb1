//! # Analyzer Layer
//!
//! The two linguistic tools furiyomi relies on are capabilities behind
//! traits, so alignment and known-word logic never see a process:
//!
//! - [`Segmenter`]: splits a line into [`Segment`]s (surface, base, reading).
//! - [`PhoneticConverter`]: rewrites a reading into hiragana.
//!
//! ## Implementations
//!
//! - [`mecab::MecabSegmenter`] / [`kakasi::KakasiConverter`]: production,
//!   each wrapping one long-lived [`process::LineProcess`].
//! - [`memory::TableSegmenter`] / [`memory::KanaConverter`]: in-memory, for
//!   tests and offline use.
//!
//! ## Wire Protocol
//!
//! Both tools read one line and answer with one line, in a legacy Japanese
//! encoding. Characters the encoding cannot carry travel as a placeholder
//! byte and are restored afterwards (see [`placeholder`]).

use crate::error::Result;
use crate::model::Segment;

pub mod kakasi;
pub mod mecab;
pub mod memory;
pub mod placeholder;
pub mod process;

/// Morphological analysis of text into segments.
///
/// The surfaces of the returned segments must concatenate to `line` exactly.
pub trait Segmenter {
    fn analyze(&mut self, line: &str) -> Result<Vec<Segment>>;

    /// Analyze several lines, in order.
    fn analyze_batch(&mut self, lines: &[&str]) -> Result<Vec<Vec<Segment>>> {
        lines.iter().map(|line| self.analyze(line)).collect()
    }
}

/// Conversion of a reading into the normalized (hiragana) script.
pub trait PhoneticConverter {
    fn to_reading_script(&mut self, text: &str) -> Result<String>;
}

impl<T: Segmenter + ?Sized> Segmenter for &mut T {
    fn analyze(&mut self, line: &str) -> Result<Vec<Segment>> {
        (**self).analyze(line)
    }
}

impl<T: PhoneticConverter + ?Sized> PhoneticConverter for &mut T {
    fn to_reading_script(&mut self, text: &str) -> Result<String> {
        (**self).to_reading_script(text)
    }
}
