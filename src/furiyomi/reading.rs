//! Furigana markup.
//!
//! Each analyzer token is aligned against its reading and, when it contains
//! kanji, rendered in the `base[reading]` furigana syntax. The phonetic parts
//! a token shares with its reading at either end (okurigana such as the `べる`
//! of `食べる`, or the `お` of `お茶`) are kept outside the brackets, so only
//! the kanji core gets annotated:
//!
//! ```text
//! 漢字  カンジ  ->  " 漢字[かんじ]"
//! 食べる タベル  ->  " 食[た]べる"
//! お茶  オチャ  ->  "お 茶[ちゃ]"
//! ```
//!
//! The leading space delimits the annotated run for the furigana renderer.

use crate::analyzer::{PhoneticConverter, Segmenter};
use crate::error::Result;
use crate::script::{is_ascii_word, is_numeral_run};

/// One token after alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned {
    pub text: String,
    pub annotated: bool,
}

impl Aligned {
    fn plain(surface: &str) -> Self {
        Self {
            text: surface.to_string(),
            annotated: false,
        }
    }
}

/// Characters `start..end` of `chars`; an inverted range is empty.
fn span(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    if start >= end {
        String::new()
    } else {
        chars[start..end].iter().collect()
    }
}

/// Renders `surface` with the bracketed `reading` around its kanji core.
/// `reading` must already be in the normalized script.
pub fn annotate(surface: &str, reading: &str) -> String {
    let kanji: Vec<char> = surface.chars().collect();
    let kana: Vec<char> = reading.chars().collect();
    let (kl, rl) = (kanji.len(), kana.len());

    let mut right = 0;
    for i in 1..kl {
        if i > rl || kanji[kl - i] != kana[rl - i] {
            break;
        }
        right = i;
    }
    let mut left = 0;
    for i in 0..kl.saturating_sub(1) {
        if i >= rl || kanji[i] != kana[i] {
            break;
        }
        left = i + 1;
    }

    match (left, right) {
        (0, 0) => format!(" {}[{}]", surface, reading),
        (0, r) => format!(
            " {}[{}]{}",
            span(&kanji, 0, kl - r),
            span(&kana, 0, rl - r),
            span(&kana, rl - r, rl)
        ),
        (l, 0) => format!(
            "{} {}[{}]",
            span(&kana, 0, l),
            span(&kanji, l, kl),
            span(&kana, l, rl)
        ),
        (l, r) => format!(
            "{} {}[{}]{}",
            span(&kana, 0, l),
            span(&kanji, l, kl - r),
            span(&kana, l, rl - r),
            span(&kana, rl - r, rl)
        ),
    }
}

/// Aligns one token against the analyzer's raw (katakana) reading.
pub fn align<C: PhoneticConverter>(
    surface: &str,
    raw_reading: &str,
    converter: &mut C,
) -> Result<Aligned> {
    // already phonetic, punctuation, or not Japanese
    if surface == raw_reading || raw_reading.is_empty() {
        return Ok(Aligned::plain(surface));
    }
    // katakana tokens come back identical once converted
    let reading = converter.to_reading_script(raw_reading)?;
    if reading == surface {
        return Ok(Aligned::plain(surface));
    }
    if is_numeral_run(surface) {
        return Ok(Aligned::plain(surface));
    }
    Ok(Aligned {
        text: annotate(surface, &reading),
        annotated: true,
    })
}

/// Joins aligned tokens into the final markup.
///
/// An ASCII word right after an annotation gets a separating space so it does
/// not run into the bracketed reading.
pub fn join_aligned(tokens: &[Aligned]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&token.text);
        let Some(next) = tokens.get(i + 1) else {
            continue;
        };
        if token.annotated && is_ascii_word(&next.text) {
            out.push(' ');
        }
    }
    out.trim().replace("< br>", "<br>")
}

/// Adds furigana to every kanji word of `text`.
pub fn add_furigana<S: Segmenter, C: PhoneticConverter>(
    text: &str,
    segmenter: &mut S,
    converter: &mut C,
) -> Result<String> {
    let segments = segmenter.analyze(text)?;
    let tokens = segments
        .iter()
        .map(|segment| align(&segment.surface, &segment.reading, converter))
        .collect::<Result<Vec<_>>>()?;
    Ok(join_aligned(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::memory::{KanaConverter, TableSegmenter};

    fn segmenter() -> TableSegmenter {
        TableSegmenter::new()
            .with_word("ひらがな", "ひらがな", "ヒラガナ")
            .with_word("カタカナ", "カタカナ", "カタカナ")
            .with_word("漢字", "漢字", "カンジ")
            .with_word("食べる", "食べる", "タベル")
            .with_word("お茶", "お茶", "オチャ")
            .with_word("三", "三", "サン")
            .with_word("日本語", "日本語", "ニホンゴ")
            .with_word("お見舞い", "お見舞い", "オミマイ")
    }

    fn furigana(text: &str) -> String {
        add_furigana(text, &mut segmenter(), &mut KanaConverter::new()).unwrap()
    }

    fn strip_readings(markup: &str) -> String {
        let mut out = markup.to_string();
        while let (Some(open), Some(close)) = (out.find('['), out.find(']')) {
            if close < open {
                break;
            }
            out.replace_range(open..=close, "");
        }
        out
    }

    #[test]
    fn scripts() {
        assert_eq!(furigana("ひらがな"), "ひらがな");
        assert_eq!(furigana("カタカナ"), "カタカナ");
        assert_eq!(furigana("漢字"), "漢字[かんじ]");
        assert_eq!(furigana("Romaji"), "Romaji");
        assert_eq!(furigana("①②③"), "①②③");
        assert_eq!(furigana("<div>&nbsp;"), "<div>&nbsp;");
    }

    #[test]
    fn okurigana_stays_outside_brackets() {
        assert_eq!(furigana("食べる"), "食[た]べる");
        assert_eq!(furigana("お茶"), "お 茶[ちゃ]");
        assert_eq!(furigana("お見舞い"), "お 見舞[みま]い");
    }

    #[test]
    fn numerals_are_never_annotated() {
        assert_eq!(furigana("三"), "三");
    }

    #[test]
    fn ascii_word_after_annotation_is_separated() {
        assert_eq!(furigana("日本語abc"), "日本語[にほんご] abc");
        assert_eq!(furigana("漢字 abc"), "漢字[かんじ] abc");
    }

    #[test]
    fn annotations_inside_a_sentence_keep_their_delimiter() {
        assert_eq!(furigana("これは漢字"), "これは 漢字[かんじ]");
    }

    #[test]
    fn empty_reading_passes_through() {
        let mut converter = KanaConverter::new();
        assert_eq!(align("、", "", &mut converter).unwrap(), Aligned::plain("、"));
        assert_eq!(converter.calls(), 0);
    }

    #[test]
    fn annotate_clamps_short_readings() {
        assert_eq!(annotate("漢", "か"), " 漢[か]");
        assert_eq!(annotate("あ漢あ", "あ"), "あ 漢[]あ");
    }

    #[test]
    fn non_japanese_code_points_pass_through() {
        let mut segmenter = TableSegmenter::new();
        let mut converter = KanaConverter::new();
        for n in 0x21u32..0x3100 {
            let Some(ch) = char::from_u32(n) else {
                continue;
            };
            if ch.is_whitespace() {
                continue;
            }
            let text = ch.to_string();
            let out = add_furigana(&text, &mut segmenter, &mut converter).unwrap();
            assert_eq!(strip_readings(&out), text, "code point {:#x}", n);
        }
    }
}
