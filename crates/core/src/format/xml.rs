use quick_xml::events::{BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::{ToolError, ToolResult};

fn invalid(cause: impl std::fmt::Display) -> ToolError {
    ToolError::parse("XML", cause)
}

/// Shape a text run for output. Whitespace-only runs vanish. Edges touching
/// the parent's start or end tag are trimmed; edges touching a sibling
/// element shrink to one space so mixed content keeps its word breaks.
fn shape_text(text: &str, first_child: bool, last_child: bool) -> Option<String> {
    let core = text.trim();
    if core.is_empty() {
        return None;
    }

    let mut shaped = String::with_capacity(core.len() + 2);
    if !first_child && text.starts_with(char::is_whitespace) {
        shaped.push(' ');
    }
    shaped.push_str(core);
    if !last_child && text.ends_with(char::is_whitespace) {
        shaped.push(' ');
    }
    Some(shaped)
}

/// Write the pending text (if any) as a single text node.
fn flush_text(
    writer: &mut Writer<Vec<u8>>,
    pending: &mut String,
    first_child: bool,
    last_child: bool,
) -> ToolResult<()> {
    if let Some(text) = shape_text(pending, first_child, last_child) {
        writer
            .write_event(Event::Text(BytesText::from_escaped(text)))
            .map_err(invalid)?;
    }
    pending.clear();
    Ok(())
}

/// Re-serialize an XML document without comments or whitespace-only text.
///
/// Entity references are copied through unresolved, so the output stays
/// escaped exactly like the input.
fn reformat(input: &str, mut writer: Writer<Vec<u8>>) -> ToolResult<String> {
    let mut reader = Reader::from_str(input);
    let mut depth = 0usize;
    let mut roots = 0usize;
    let mut pending = String::new();
    let mut after_start = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| invalid(format!("{e} (at byte {})", reader.buffer_position())))?;

        match event {
            Event::Eof => break,
            Event::Comment(_) => {}
            Event::Text(text) => pending.push_str(&String::from_utf8_lossy(&text)),
            Event::GeneralRef(reference) => {
                pending.push('&');
                pending.push_str(&String::from_utf8_lossy(&reference));
                pending.push(';');
            }
            other => {
                if depth == 0 && !pending.trim().is_empty() {
                    return Err(invalid("text content outside of the root element"));
                }
                let closes_parent = matches!(other, Event::End(_));
                flush_text(&mut writer, &mut pending, after_start, closes_parent)?;
                after_start = matches!(other, Event::Start(_));

                match &other {
                    Event::Start(_) | Event::Empty(_) if depth == 0 => {
                        roots += 1;
                        if roots > 1 {
                            return Err(invalid("extra content at the end of the document"));
                        }
                    }
                    _ => {}
                }

                match &other {
                    Event::Start(_) => depth += 1,
                    Event::End(tag) => {
                        if depth == 0 {
                            let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                            return Err(invalid(format!("unexpected closing tag </{name}>")));
                        }
                        depth -= 1;
                    }
                    _ => {}
                }

                writer.write_event(other).map_err(invalid)?;
            }
        }
    }

    if depth > 0 {
        return Err(invalid("unexpected end of document, unclosed element"));
    }
    if !pending.trim().is_empty() {
        return Err(invalid("text content outside of the root element"));
    }
    if roots == 0 {
        return Err(invalid("document has no root element"));
    }

    String::from_utf8(writer.into_inner()).map_err(invalid)
}

/// Re-indent with two spaces, dropping comments and keeping text-only
/// elements on one line.
pub fn beautify_xml(input: &str) -> ToolResult<String> {
    reformat(input, Writer::new_with_indent(Vec::new(), b' ', 2))
}

pub fn minify_xml(input: &str) -> ToolResult<String> {
    reformat(input, Writer::new(Vec::new()))
}
