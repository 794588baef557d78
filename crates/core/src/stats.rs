use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Words-per-minute rates used to estimate reading and speaking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingModel {
    pub reading_wpm: usize,
    pub speaking_wpm: Option<usize>,
}

impl ReadingModel {
    /// Word counter preset: 225 wpm reading, 130 wpm speaking.
    pub const STANDARD: Self = Self {
        reading_wpm: 225,
        speaking_wpm: Some(130),
    };

    /// Text analyser preset: 200 wpm reading, no speaking estimate.
    pub const QUICK: Self = Self {
        reading_wpm: 200,
        speaking_wpm: None,
    };
}

impl Default for ReadingModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub graphemes: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_time_minutes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
    /// Share of all words in the text, as a percentage rounded to 2 decimals.
    pub density: f64,
}

const KEYWORD_LIMIT: usize = 8;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "who", "did", "get", "let", "say", "she", "too", "use", "that", "with", "this",
    "from", "they", "will", "would", "there", "their", "what", "about", "which", "when", "your",
    "were", "been", "them", "then", "than", "these", "those", "into", "more", "some", "such",
    "also", "just", "only", "over", "very", "most", "other", "each", "where", "while", "should",
    "could", "because", "being", "does", "doing", "here", "after", "before", "between", "both",
    "same", "own", "off", "why", "yourself", "itself", "myself",
];

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

static PARAGRAPH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("paragraph pattern is valid"));

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Count non-empty segments after splitting on `re`.
fn count_segments(re: &Regex, text: &str) -> usize {
    re.split(text).filter(|s| !s.trim().is_empty()).count()
}

/// Analyze a block of text. Empty input yields zero-valued stats.
pub fn analyze(text: &str, model: ReadingModel) -> TextStats {
    let words = text.split_whitespace().count();

    TextStats {
        words,
        chars: text.chars().count(),
        chars_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        graphemes: text.graphemes(true).count(),
        sentences: count_segments(&SENTENCE_SPLIT, text),
        paragraphs: count_segments(&PARAGRAPH_SPLIT, text),
        lines: text.lines().count(),
        reading_time_minutes: words.div_ceil(model.reading_wpm),
        speaking_time_minutes: model.speaking_wpm.map(|wpm| words.div_ceil(wpm)),
    }
}

/// Most frequent meaningful words, highest count first.
///
/// Ties keep the order in which words first appeared.
pub fn keyword_density(text: &str) -> Vec<KeywordCount> {
    let lowered = text.to_lowercase();
    let total_words = text.split_whitespace().count();

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in WORD_TOKEN.find_iter(&lowered).map(|m| m.as_str()) {
        if token.chars().count() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|w| (w, counts[w])).collect();
    // `sort_by` is stable, which keeps first-occurrence order for ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(KEYWORD_LIMIT);

    ranked
        .into_iter()
        .map(|(word, count)| KeywordCount {
            word: word.to_string(),
            count,
            density: density(count, total_words),
        })
        .collect()
}

fn density(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = count as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_text() {
        let stats = analyze("", ReadingModel::STANDARD);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.reading_time_minutes, 0);
        assert_eq!(stats.speaking_time_minutes, Some(0));
    }

    #[test]
    fn test_analyze_whitespace_only() {
        let stats = analyze("   \n\t ", ReadingModel::STANDARD);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.chars_no_spaces, 0);
        assert_eq!(stats.paragraphs, 0);
    }

    #[test]
    fn test_analyze_counts() {
        let text = "Hello world. How are you?\n\nI am fine!";
        let stats = analyze(text, ReadingModel::STANDARD);
        assert_eq!(stats.words, 8);
        assert_eq!(stats.chars, text.chars().count());
        assert_eq!(stats.chars_no_spaces, 29);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.reading_time_minutes, 1);
        assert_eq!(stats.speaking_time_minutes, Some(1));
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 226].join(" ");
        let stats = analyze(&text, ReadingModel::STANDARD);
        assert_eq!(stats.reading_time_minutes, 2);
        assert_eq!(stats.speaking_time_minutes, Some(2));

        let text = vec!["word"; 200].join(" ");
        let stats = analyze(&text, ReadingModel::QUICK);
        assert_eq!(stats.reading_time_minutes, 1);
        assert_eq!(stats.speaking_time_minutes, None);
    }

    #[test]
    fn test_graphemes_count_clusters() {
        let stats = analyze("e\u{301}", ReadingModel::default());
        assert_eq!(stats.chars, 2);
        assert_eq!(stats.graphemes, 1);
    }

    #[test]
    fn test_keyword_density_orders_by_count() {
        let text = "Rust is fast. Rust is safe. Cargo builds Rust and cargo tests.";
        let keywords = keyword_density(text);
        assert_eq!(keywords[0].word, "rust");
        assert_eq!(keywords[0].count, 3);
        assert_eq!(keywords[1].word, "cargo");
        assert_eq!(keywords[1].count, 2);
        // Ties keep first-occurrence order.
        let rest: Vec<&str> = keywords[2..].iter().map(|k| k.word.as_str()).collect();
        assert_eq!(rest, vec!["fast", "safe", "builds", "tests"]);
    }

    #[test]
    fn test_keyword_density_drops_short_and_stop_words() {
        let keywords = keyword_density("The cat and the dog are on it");
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_keyword_density_truncates_to_eight() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
        assert_eq!(keyword_density(text).len(), 8);
    }

    #[test]
    fn test_keyword_density_percentage() {
        let keywords = keyword_density("rust rust code");
        assert_eq!(keywords[0].density, 66.67);
        assert!(keyword_density("").is_empty());
    }
}
