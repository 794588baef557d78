use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{ToolError, ToolResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palindrome {
    pub is_palindrome: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dedup {
    pub text: String,
    pub removed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindReplace {
    pub find: String,
    pub replace: String,
    #[serde(default)]
    pub use_regex: bool,
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static SLUG_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("slug pattern is valid"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));

static HORIZONTAL_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space pattern is valid"));

/// Reverse the text one grapheme cluster at a time.
pub fn reverse_chars(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

pub fn reverse_words(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

pub fn check_palindrome(text: &str) -> Palindrome {
    let cleaned: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let is_palindrome = cleaned.iter().eq(cleaned.iter().rev());

    let message = if is_palindrome {
        "Yes, it's a palindrome!"
    } else {
        "No, it's not a palindrome."
    };

    Palindrome {
        is_palindrome,
        message: message.to_string(),
    }
}

/// Keep the first occurrence of every line, in order.
pub fn dedup_lines(text: &str) -> Dedup {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut seen = HashSet::new();
    let unique: Vec<&str> = lines.iter().copied().filter(|l| seen.insert(*l)).collect();

    Dedup {
        removed: lines.len() - unique.len(),
        text: unique.join("\n"),
    }
}

pub fn slugify(text: &str) -> String {
    let slug = text.to_lowercase();
    let slug = WHITESPACE_RUN.replace_all(slug.trim(), "-");
    let slug = slug.replace('&', "-and-");
    let slug = SLUG_DISALLOWED.replace_all(&slug, "");
    HYPHEN_RUN.replace_all(&slug, "-").into_owned()
}

/// Replace every occurrence of `options.find` in `text`.
///
/// An empty `find` leaves the text untouched in both literal and regex mode.
pub fn find_replace(text: &str, options: &FindReplace) -> ToolResult<String> {
    if options.find.is_empty() {
        return Ok(text.to_string());
    }

    if options.use_regex {
        let re = RegexBuilder::new(&options.find)
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|e| ToolError::Regex(format!("Invalid regular expression: {e}")))?;
        return Ok(re.replace_all(text, options.replace.as_str()).into_owned());
    }

    if options.case_insensitive {
        let re = RegexBuilder::new(&regex::escape(&options.find))
            .case_insensitive(true)
            .build()
            .map_err(|e| ToolError::Regex(format!("Invalid regular expression: {e}")))?;
        return Ok(re
            .replace_all(text, regex::NoExpand(&options.replace))
            .into_owned());
    }

    Ok(text
        .split(options.find.as_str())
        .collect::<Vec<_>>()
        .join(&options.replace))
}

pub fn sort_lines(text: &str, order: SortOrder) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    match order {
        SortOrder::Asc => lines.sort(),
        SortOrder::Desc => lines.sort_by(|a, b| b.cmp(a)),
    }
    lines.join("\n")
}

/// Collapse runs of spaces and tabs and trim every line.
pub fn remove_extra_spaces(text: &str) -> String {
    text.lines()
        .map(|line| HORIZONTAL_SPACE_RUN.replace_all(line.trim(), " "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_chars() {
        assert_eq!(reverse_chars("hello"), "olleh");
        assert_eq!(reverse_chars("ae\u{301}b"), "be\u{301}a");
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("  one two\n three "), "three two one");
        assert_eq!(reverse_words(""), "");
    }

    #[test]
    fn test_palindrome() {
        let result = check_palindrome("A man, a plan, a canal: Panama");
        assert!(result.is_palindrome);
        assert_eq!(result.message, "Yes, it's a palindrome!");

        let result = check_palindrome("Rust");
        assert!(!result.is_palindrome);
        assert_eq!(result.message, "No, it's not a palindrome.");
    }

    #[test]
    fn test_dedup_lines() {
        let result = dedup_lines("a\na\na");
        assert_eq!(result.text, "a");
        assert_eq!(result.removed, 2);
    }

    #[test]
    fn test_dedup_lines_keeps_order_and_empty_lines() {
        let result = dedup_lines("b\n\na\nb\n\nc");
        assert_eq!(result.text, "b\n\na\nc");
        assert_eq!(result.removed, 2);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("Hello World! This is a Title"),
            "hello-world-this-is-a-title"
        );
        assert_eq!(slugify("  Tom & Jerry  "), "tom-and-jerry");
        assert_eq!(slugify("Crème brûlée"), "crme-brle");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_find_replace_literal() {
        let options = FindReplace {
            find: "a.c".into(),
            replace: "X".into(),
            ..Default::default()
        };
        assert_eq!(find_replace("a.c abc a.c", &options).unwrap(), "X abc X");
    }

    #[test]
    fn test_find_replace_regex() {
        let options = FindReplace {
            find: r"(\d+)-(\d+)".into(),
            replace: "$2-$1".into(),
            use_regex: true,
            ..Default::default()
        };
        assert_eq!(find_replace("10-20 and 3-4", &options).unwrap(), "20-10 and 4-3");
    }

    #[test]
    fn test_find_replace_case_insensitive() {
        let options = FindReplace {
            find: "rust".into(),
            replace: "$Crab".into(),
            case_insensitive: true,
            ..Default::default()
        };
        assert_eq!(find_replace("Rust RUST", &options).unwrap(), "$Crab $Crab");
    }

    #[test]
    fn test_find_replace_invalid_pattern() {
        let options = FindReplace {
            find: "(unclosed".into(),
            use_regex: true,
            ..Default::default()
        };
        let err = find_replace("text", &options).unwrap_err();
        assert!(matches!(err, ToolError::Regex(_)));
        assert!(err.to_string().starts_with("Invalid regular expression:"));
    }

    #[test]
    fn test_find_replace_empty_find_is_noop() {
        let options = FindReplace {
            replace: "X".into(),
            use_regex: true,
            ..Default::default()
        };
        assert_eq!(find_replace("abc", &options).unwrap(), "abc");
    }

    #[test]
    fn test_sort_lines() {
        assert_eq!(sort_lines("b\nc\na", SortOrder::Asc), "a\nb\nc");
        assert_eq!(sort_lines("b\nc\na", SortOrder::Desc), "c\nb\na");
    }

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(
            remove_extra_spaces("  too   many \t spaces \nnext    line"),
            "too many spaces\nnext line"
        );
    }
}
