use serde::{Deserialize, Serialize};

/// Paragraph break used by subtitle files and most collections.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// One analyzer token of a line.
///
/// `surface` is the exact slice of the source line, so the surfaces of a
/// line's segments concatenate back to the line. `base` is the dictionary
/// form used as known-word identity and `reading` is the analyzer's reading
/// (katakana), empty when the analyzer has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub surface: String,
    pub base: String,
    pub reading: String,
}

impl Segment {
    pub fn new(
        surface: impl Into<String>,
        base: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            base: base.into(),
            reading: reading.into(),
        }
    }

    /// Whitespace the analyzer skipped over, kept so the line reconstructs.
    pub fn gap(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            base: text.clone(),
            surface: text,
            reading: String::new(),
        }
    }

    /// Length of the surface in characters.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

/// Concatenates the surfaces of `segments`.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.surface.as_str()).collect()
}

/// Normalizes a flashcard expression before it is compared against text:
/// drops `<br>` tags, ASCII spaces and every `[reading]` group.
pub fn cleanup_card(card: &str) -> String {
    let mut s = card.replace("<br>", "").replace(' ', "");
    while let Some(open) = s.find('[') {
        let Some(close) = s[open..].find(']').map(|i| open + i) else {
            break;
        };
        s.replace_range(open..=close, "");
    }
    s
}

/// Splits subtitle text into paragraphs the way subtitle files are read.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(PARAGRAPH_BREAK)
        .map(|s| s.to_string())
        .collect()
}
