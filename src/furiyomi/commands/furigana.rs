use crate::analyzer::{PhoneticConverter, Segmenter};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::reading::add_furigana;

pub fn run<S: Segmenter, C: PhoneticConverter>(
    segmenter: &mut S,
    converter: &mut C,
    text: &str,
) -> Result<CmdResult> {
    let markup = add_furigana(text, segmenter, converter)?;
    Ok(CmdResult::default().with_output(vec![markup]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::memory::{KanaConverter, TableSegmenter};

    #[test]
    fn annotates_kanji_words() {
        let mut segmenter = TableSegmenter::new()
            .with_word("漢字", "漢字", "カンジ")
            .with_word("読む", "読む", "ヨム");
        let result = run(&mut segmenter, &mut KanaConverter::new(), "漢字を読む").unwrap();
        assert_eq!(result.output, ["漢字[かんじ]を 読[よ]む"]);
    }

    #[test]
    fn blank_text_stays_blank() {
        let result = run(&mut TableSegmenter::new(), &mut KanaConverter::new(), "  ").unwrap();
        assert_eq!(result.output, [""]);
    }
}
