//! Plain-text rendering of answers and passages

use passage_qa::chunker::normalize_whitespace;
use passage_qa::config::AnswerConfig;
use passage_qa::Answer;

/// Marks text cut by [`shorten`]
const PLACEHOLDER: &str = " [...]";

/// Greedy word wrap to `width` columns; words longer than `width` keep
/// their own line
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// Collapse whitespace and, if still wider than `width`, drop trailing
/// words and append a placeholder
pub fn shorten(text: &str, width: usize) -> String {
    let collapsed = normalize_whitespace(text);
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(PLACEHOLDER.chars().count());
    let mut out = String::new();
    let mut out_len = 0;
    for word in collapsed.split(' ') {
        let word_len = word.chars().count();
        let needed = if out_len == 0 { word_len } else { word_len + 1 };
        if out_len + needed > budget {
            break;
        }
        if out_len > 0 {
            out.push(' ');
        }
        out.push_str(word);
        out_len += needed;
    }

    if out.is_empty() {
        PLACEHOLDER.trim_start().to_string()
    } else {
        out + PLACEHOLDER
    }
}

/// Human-readable answer block
pub fn format_answer(answer: &Answer, layout: &AnswerConfig) -> String {
    let mut out = format!(
        "Answer:\n{}\n\nSource: {}\nSnippet:\n{}",
        wrap(&answer.answer, layout.wrap_width),
        answer.source,
        shorten(&answer.passage, layout.snippet_width),
    );
    if let Some(scores) = &answer.scores {
        out.push_str(&format!(
            "\nScores -> passage: {:.4}, sentence: {:.4}",
            scores.passage, scores.sentence
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_qa::qa::Scores;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aaa bbb ccc ddd", 7), "aaa bbb\nccc ddd");
        assert_eq!(wrap("a  b\nc", 90), "a b c");
        assert_eq!(wrap("", 10), "");
        assert_eq!(wrap("toolongword x", 4), "toolongword\nx");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short  text", 400), "short text");
        assert_eq!(shorten("Hello  world!", 11), "Hello [...]");
        assert_eq!(shorten("Supercalifragilistic", 10), "[...]");
        let long = "word ".repeat(200);
        let short = shorten(&long, 400);
        assert!(short.chars().count() <= 400);
        assert!(short.ends_with(" [...]"));
    }

    #[test]
    fn test_format_answer_with_scores() {
        let answer = Answer {
            answer: "The sky is blue.".into(),
            source: "sky_full.txt".into(),
            passage_index: 0,
            passage: "The sky is blue. Water is wet.".into(),
            scores: Some(Scores {
                passage: 0.5,
                sentence: 0.70710677,
            }),
        };
        let text = format_answer(&answer, &AnswerConfig::default());
        assert!(text.starts_with("Answer:\nThe sky is blue.\n"));
        assert!(text.contains("Source: sky_full.txt"));
        assert!(text.ends_with("Scores -> passage: 0.5000, sentence: 0.7071"));
    }

    #[test]
    fn test_format_answer_without_scores() {
        let answer = Answer {
            answer: "no punctuation here".into(),
            source: "doc".into(),
            passage_index: 2,
            passage: "no punctuation here".into(),
            scores: None,
        };
        let text = format_answer(&answer, &AnswerConfig::default());
        assert!(!text.contains("Scores"));
    }
}
