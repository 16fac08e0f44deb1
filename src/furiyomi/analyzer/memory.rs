use super::{PhoneticConverter, Segmenter};
use crate::error::Result;
use crate::model::Segment;
use std::collections::HashMap;

/// In-memory segmenter for testing and offline use.
///
/// Tokenizes by greedy longest match against a word table. Characters not
/// covered by the table become single-character tokens without a reading,
/// and whitespace runs become gap segments, as with the process-backed
/// segmenter.
#[derive(Debug, Default, Clone)]
pub struct TableSegmenter {
    words: HashMap<String, (String, String)>,
    longest: usize,
    calls: usize,
}

impl TableSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface form with its base form and katakana reading.
    pub fn with_word(mut self, surface: &str, base: &str, reading: &str) -> Self {
        self.longest = self.longest.max(surface.chars().count());
        self.words
            .insert(surface.to_string(), (base.to_string(), reading.to_string()));
        self
    }

    /// Number of `analyze` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Segmenter for TableSegmenter {
    fn analyze(&mut self, line: &str) -> Result<Vec<Segment>> {
        self.calls += 1;
        let chars: Vec<char> = line.chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if chars[i].is_whitespace() {
                let start = i;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                segments.push(Segment::gap(chars[start..i].iter().collect::<String>()));
                continue;
            }
            let max = self.longest.min(chars.len() - i);
            let matched = (1..=max).rev().find_map(|len| {
                let candidate: String = chars[i..i + len].iter().collect();
                self.words
                    .get(&candidate)
                    .map(|(base, reading)| (len, Segment::new(candidate.clone(), base, reading)))
            });
            match matched {
                Some((len, segment)) => {
                    segments.push(segment);
                    i += len;
                }
                None => {
                    let ch = chars[i].to_string();
                    segments.push(Segment::new(ch.clone(), ch, ""));
                    i += 1;
                }
            }
        }
        Ok(segments)
    }
}

/// In-memory converter that maps katakana to hiragana and leaves every other
/// character alone.
#[derive(Debug, Default, Clone)]
pub struct KanaConverter {
    calls: usize,
}

impl KanaConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'ァ'..='ヶ' => char::from_u32(ch as u32 - 0x60).unwrap_or(ch),
            _ => ch,
        })
        .collect()
}

impl PhoneticConverter for KanaConverter {
    fn to_reading_script(&mut self, text: &str) -> Result<String> {
        self.calls += 1;
        Ok(katakana_to_hiragana(text))
    }
}
