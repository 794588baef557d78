//! Pattern-based minifiers.
//!
//! These work on raw text, not on a parsed grammar, and only suit simple
//! inputs. Whitespace inside CSS strings, `<pre>` blocks or JS template
//! literals is collapsed like any other whitespace, and `minify_js` joins
//! lines with a space, so code that relies on automatic semicolon
//! insertion can change meaning.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!(stringify!($name), " is valid")));
    };
}

pattern!(BLOCK_COMMENT, r"/\*[\s\S]*?\*/");
pattern!(HTML_COMMENT, r"<!--[\s\S]*?-->");
pattern!(LINE_COMMENT, r#"(?m)(^|[^:"'\\])//[^\n]*"#);
pattern!(WHITESPACE_RUN, r"\s+");
pattern!(CSS_PUNCTUATION, r"\s*([{}:;,>])\s*");
pattern!(CSS_TRAILING_SEMICOLON, r";+\}");
pattern!(BETWEEN_TAGS, r">\s+<");
pattern!(JS_PUNCTUATION, r"\s*([{}();,:=])\s*");

/// Remove every match of `re`, repeating until removal exposes no new match.
fn strip_all(re: &Regex, input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = re.replace_all(&current, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Minify CSS. Idempotent: minifying the output again changes nothing.
pub fn minify_css(input: &str) -> String {
    let css = strip_all(&BLOCK_COMMENT, input);
    let css = WHITESPACE_RUN.replace_all(&css, " ");
    let css = CSS_PUNCTUATION.replace_all(&css, "$1");
    let css = CSS_TRAILING_SEMICOLON.replace_all(&css, "}");
    css.trim().to_string()
}

pub fn minify_html(input: &str) -> String {
    let html = strip_all(&HTML_COMMENT, input);
    let html = WHITESPACE_RUN.replace_all(&html, " ");
    let html = BETWEEN_TAGS.replace_all(&html, "><");
    html.trim().to_string()
}

pub fn minify_js(input: &str) -> String {
    let js = strip_all(&BLOCK_COMMENT, input);
    let js = LINE_COMMENT.replace_all(&js, "$1");
    let js = WHITESPACE_RUN.replace_all(&js, " ");
    let js = JS_PUNCTUATION.replace_all(&js, "$1");
    js.trim().to_string()
}
