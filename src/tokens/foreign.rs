//! Generic handling of elements outside the core schema.

use super::{EndTag, StartTag, Token, TokenSink, TokenSource};
use crate::error::KmlError;
use crate::model::{ForeignElement, ForeignNode};

/// Capture the element opened by `start` and everything inside it.
///
/// Whitespace-only text between child elements is dropped.
pub fn read_foreign(
    source: &mut dyn TokenSource,
    start: &StartTag,
) -> Result<ForeignElement, KmlError> {
    let mut element = ForeignElement {
        namespace: start.namespace.clone(),
        local_name: start.local_name.to_string(),
        attributes: start.attributes.clone(),
        children: Vec::new(),
    };
    loop {
        match source.next_token()? {
            Token::Start(child) => {
                let child = read_foreign(source, &child)?;
                element.children.push(ForeignNode::Element(child));
            }
            Token::Text(text) => {
                if !text.trim().is_empty() {
                    element.children.push(ForeignNode::Text(text));
                }
            }
            Token::End(end) if end.closes(start) => return Ok(element),
            Token::End(end) => return Err(mismatched(&EndTag::of(start), &end, start)),
            Token::Eof => {
                return Err(KmlError::structure(
                    format!("unexpected end of document inside <{}>", start.local_name),
                    start.local_name.as_str(),
                ));
            }
        }
    }
}

/// Discard tokens up to and including the end-tag matching an already
/// consumed start-tag.
pub fn skip_subtree(source: &mut dyn TokenSource, start: &StartTag) -> Result<(), KmlError> {
    let mut open = vec![EndTag::of(start)];
    while !open.is_empty() {
        match source.next_token()? {
            Token::Start(tag) => open.push(EndTag::of(&tag)),
            Token::End(end) => match open.pop() {
                Some(expected) if expected != end => {
                    return Err(mismatched(&expected, &end, start));
                }
                _ => {}
            },
            Token::Text(_) => {}
            Token::Eof => {
                return Err(KmlError::structure(
                    format!("unexpected end of document inside <{}>", start.local_name),
                    start.local_name.as_str(),
                ));
            }
        }
    }
    Ok(())
}

fn mismatched(expected: &EndTag, found: &EndTag, start: &StartTag) -> KmlError {
    KmlError::structure(
        format!(
            "expected </{}>, found </{}>",
            expected.local_name, found.local_name
        ),
        start.local_name.as_str(),
    )
}

/// `prefix:local`, or `local` when there is no prefix.
pub fn qualified_name(prefix: Option<&str>, local_name: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local_name}"),
        _ => local_name.to_string(),
    }
}

/// Re-emit a captured tree.
///
/// Elements in `namespace` are written with `prefix`. Elements in any other
/// namespace carry their own default-namespace declaration, and unqualified
/// ones reset it with `xmlns=""`.
pub fn write_foreign(
    sink: &mut dyn TokenSink,
    element: &ForeignElement,
    namespace: &str,
    prefix: &str,
) -> Result<(), KmlError> {
    let name = match element.namespace.as_deref() {
        Some(ns) if ns == namespace => qualified_name(Some(prefix), &element.local_name),
        _ => element.local_name.clone(),
    };
    let mut attributes: Vec<(&str, &str)> = element
        .attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    match element.namespace.as_deref() {
        Some(ns) if ns == namespace => {}
        Some(ns) => attributes.insert(0, ("xmlns", ns)),
        None => attributes.insert(0, ("xmlns", "")),
    }
    sink.start_tag(&name, &attributes)?;
    for child in &element.children {
        match child {
            ForeignNode::Element(child) => write_foreign(sink, child, namespace, prefix)?,
            ForeignNode::Text(text) => sink.text(text)?,
        }
    }
    sink.end_tag(&name)
}
