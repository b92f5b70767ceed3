//! Sentence splitting on terminal punctuation

use std::sync::LazyLock;

use regex::Regex;

/// Terminal punctuation followed by whitespace; the split falls right after
/// the punctuation mark
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split `text` into trimmed, non-empty sentences.
///
/// Every returned sentence borrows from `text`, so it is always a verbatim
/// substring of it. Text without any terminal punctuation (a `.`, `!` or `?`
/// followed by whitespace or the end of the text) has no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if !has_terminator(text) {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in BOUNDARY.find_iter(text) {
        // The punctuation mark is a single ASCII byte
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn has_terminator(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?']) || BOUNDARY.is_match(text)
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split_sentences("The sky is blue. Water is wet."),
            vec!["The sky is blue.", "Water is wet."]
        );
    }

    #[test]
    fn test_all_terminators() {
        assert_eq!(
            split_sentences("Really? Yes!  Fine.\nDone"),
            vec!["Really?", "Yes!", "Fine.", "Done"]
        );
    }

    #[test]
    fn test_punctuation_without_space_does_not_split() {
        assert_eq!(
            split_sentences("Version 1.2 shipped. It works."),
            vec!["Version 1.2 shipped.", "It works."]
        );
        assert_eq!(split_sentences("Wait!! What?"), vec!["Wait!!", "What?"]);
    }

    #[test]
    fn test_trailing_fragment_is_kept() {
        // Passage windows routinely end mid-sentence
        assert_eq!(
            split_sentences("sky is blue. Water is"),
            vec!["sky is blue.", "Water is"]
        );
    }

    #[test]
    fn test_no_terminator_has_no_sentences() {
        assert!(split_sentences("alpha beta gamma delta").is_empty());
        assert!(split_sentences("see v1.2 and e.g.x").is_empty());
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_single_sentence_without_trailing_space() {
        assert_eq!(split_sentences("Just one."), vec!["Just one."]);
    }

    #[test]
    fn test_sentences_are_substrings() {
        let text = "First one. Second one?  Third!   tail";
        for sentence in split_sentences(text) {
            assert!(text.contains(sentence));
        }
    }
}
