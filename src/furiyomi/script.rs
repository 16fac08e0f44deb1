//! Japanese script detection.
//!
//! Classification goes through the Unicode character *name* rather than code
//! point ranges: a character counts as Japanese when its name mentions
//! `HIRAGANA`, `KATAKANA` or `CJK`, which also covers marks such as `ー`
//! (KATAKANA-HIRAGANA PROLONGED SOUND MARK).

const JAPANESE_NAME_MARKERS: [&str; 3] = ["HIRAGANA", "KATAKANA", "CJK"];

/// Numerals that never receive a reading annotation.
pub const NUMERALS: &str = "一二三四五六七八九十０１２３４５６７８９";

/// Returns true if the character's Unicode name marks it as Japanese script.
pub fn is_japanese_char(ch: char) -> bool {
    match unicode_names2::name(ch) {
        Some(name) => {
            let name = name.to_string();
            JAPANESE_NAME_MARKERS
                .iter()
                .any(|marker| name.contains(marker))
        }
        None => false,
    }
}

/// Returns true if at least one character of `text` is Japanese script.
pub fn has_japanese_text(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

/// Returns true if the character's Unicode name marks it as a CJK ideograph.
pub fn is_cjk_char(ch: char) -> bool {
    unicode_names2::name(ch)
        .map(|name| name.to_string().contains("CJK"))
        .unwrap_or(false)
}

/// Returns true if `text` is a non-empty contiguous run of [`NUMERALS`].
pub fn is_numeral_run(text: &str) -> bool {
    !text.is_empty() && NUMERALS.contains(text)
}

/// Returns true if `text` is one or more ASCII letters or digits.
pub fn is_ascii_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_japanese_script() {
        assert!(has_japanese_text("ひらがな"));
        assert!(has_japanese_text("カタカナ"));
        assert!(has_japanese_text("漢字"));
        assert!(has_japanese_text("abcー"));
    }

    #[test]
    fn rejects_non_japanese_text() {
        assert!(!has_japanese_text(""));
        assert!(!has_japanese_text("Romaji 123"));
        assert!(!has_japanese_text("①②③"));
        assert!(!has_japanese_text("<div>&nbsp;"));
        assert!(!has_japanese_text("😀"));
    }

    #[test]
    fn cjk_is_narrower_than_japanese() {
        assert!(is_cjk_char('漢'));
        assert!(!is_cjk_char('か'));
        assert!(!is_cjk_char('a'));
    }

    #[test]
    fn numeral_runs() {
        assert!(is_numeral_run("三"));
        assert!(is_numeral_run("一二三"));
        assert!(is_numeral_run("０１"));
        assert!(!is_numeral_run(""));
        assert!(!is_numeral_run("二一"));
        assert!(!is_numeral_run("百"));
    }

    #[test]
    fn ascii_words() {
        assert!(is_ascii_word("Romaji"));
        assert!(is_ascii_word("br"));
        assert!(is_ascii_word("42"));
        assert!(!is_ascii_word(""));
        assert!(!is_ascii_word("a b"));
        assert!(!is_ascii_word("漢"));
    }
}
