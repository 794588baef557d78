use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Snake,
    Kebab,
    Alternating,
}

impl std::str::FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "title" => Ok(Self::Title),
            "sentence" => Ok(Self::Sentence),
            "camel" => Ok(Self::Camel),
            "snake" => Ok(Self::Snake),
            "kebab" => Ok(Self::Kebab),
            "alternating" => Ok(Self::Alternating),
            other => Err(format!("Unknown case: {other}")),
        }
    }
}

static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^\s*\w|[.!?]\s+\w)").expect("sentence pattern is valid"));

static CAMEL_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)").expect("camel pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Convert `text` to the requested case.
pub fn convert_case(text: &str, case: Case) -> String {
    match case {
        Case::Upper => text.to_uppercase(),
        Case::Lower => text.to_lowercase(),
        Case::Title => title_case(text),
        Case::Sentence => sentence_case(text),
        Case::Camel => camel_case(text),
        Case::Snake => WHITESPACE_RUN
            .replace_all(&text.to_lowercase(), "_")
            .into_owned(),
        Case::Kebab => WHITESPACE_RUN
            .replace_all(&text.to_lowercase(), "-")
            .into_owned(),
        Case::Alternating => alternating_case(text),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Uppercase the first word character after any non-word character.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;

    for c in text.to_lowercase().chars() {
        if is_word_char(c) {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }

    out
}

fn sentence_case(text: &str) -> String {
    SENTENCE_START
        .replace_all(&text.to_lowercase(), |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

fn camel_case(text: &str) -> String {
    CAMEL_BREAK
        .replace_all(&text.to_lowercase(), |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

fn alternating_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(convert_case("Hello World", Case::Upper), "HELLO WORLD");
        assert_eq!(convert_case("Hello World", Case::Lower), "hello world");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(convert_case("the QUICK brown-fox", Case::Title), "The Quick Brown-Fox");
        assert_eq!(convert_case("hello.world", Case::Title), "Hello.World");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            convert_case("HELLO THERE. how ARE you? fine!  ok", Case::Sentence),
            "Hello there. How are you? Fine!  Ok"
        );
        assert_eq!(convert_case("  leading space", Case::Sentence), "  Leading space");
        // Punctuation without following whitespace does not start a sentence.
        assert_eq!(convert_case("v1.two", Case::Sentence), "V1.two");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(convert_case("the quick fox", Case::Camel), "theQuickFox");
        assert_eq!(convert_case("Hello_World--again", Case::Camel), "helloWorldAgain");
        assert_eq!(convert_case("trailing ", Case::Camel), "trailing ");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(convert_case("Hello  Big World", Case::Snake), "hello_big_world");
        assert_eq!(convert_case("Hello  Big World", Case::Kebab), "hello-big-world");
        // Existing punctuation is left alone.
        assert_eq!(convert_case("a-b c", Case::Snake), "a-b_c");
    }

    #[test]
    fn test_alternating_case() {
        assert_eq!(convert_case("hello world", Case::Alternating), "hElLo wOrLd");
    }

    #[test]
    fn test_case_from_str() {
        assert_eq!("Camel".parse::<Case>(), Ok(Case::Camel));
        assert!("pascal".parse::<Case>().is_err());
    }
}
