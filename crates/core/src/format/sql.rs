use sqlformat::{FormatOptions, Indent, QueryParams};

use crate::error::{ToolError, ToolResult};

/// Reject input the formatter would silently mangle: unterminated quotes
/// and unbalanced parentheses. Comments are skipped.
fn check_balanced(sql: &str) -> ToolResult<()> {
    let chars: Vec<char> = sql.chars().collect();
    let mut depth: i64 = 0;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            quote @ ('\'' | '"' | '`') => {
                let start = i;
                // Only PostgreSQL `E'...'` literals treat backslash as an escape.
                let backslash_escapes = quote == '\''
                    && i > 0
                    && matches!(chars[i - 1], 'E' | 'e')
                    && (i < 2 || !(chars[i - 2].is_alphanumeric() || chars[i - 2] == '_'));
                i += 1;
                loop {
                    match chars.get(i) {
                        None => {
                            return Err(ToolError::parse(
                                "SQL",
                                format!("unterminated string literal starting at position {start}"),
                            ))
                        }
                        // Doubled quote is an escaped quote.
                        Some(&c) if c == quote && chars.get(i + 1) == Some(&quote) => i += 2,
                        Some(&c) if c == quote => break,
                        Some('\\') if backslash_escapes => i += 2,
                        Some(_) => i += 1,
                    }
                }
            }
            '-' if chars.get(i + 1) == Some(&'-') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let start = i;
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                if i >= chars.len() {
                    return Err(ToolError::parse(
                        "SQL",
                        format!("unterminated comment starting at position {start}"),
                    ));
                }
                i += 1;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ToolError::parse(
                        "SQL",
                        format!("unexpected ')' at position {i}"),
                    ));
                }
            }
            _ => {}
        }
        i += 1;
    }

    if depth > 0 {
        return Err(ToolError::parse("SQL", "missing closing ')'"));
    }
    Ok(())
}

/// Pretty-print SQL with upper-case keywords, two-space indentation and a
/// blank line between statements.
pub fn format_sql(input: &str) -> ToolResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    check_balanced(input)?;

    let options = FormatOptions {
        indent: Indent::Spaces(2),
        uppercase: true,
        lines_between_queries: 2,
        ..Default::default()
    };

    Ok(sqlformat::format(input, &QueryParams::None, options))
}
