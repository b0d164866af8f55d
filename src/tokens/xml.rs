//! quick-xml backed token cursor.

use std::io::{BufRead, Write};

use quick_xml::NsReader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use smol_str::SmolStr;

use super::{EndTag, StartTag, Token, TokenSink, TokenSource};
use crate::error::KmlError;

/// Reads tokens from XML text, resolving namespace prefixes as it goes.
///
/// Self-closing elements are reported as a start token immediately followed by
/// an end token. End-tag names are passed through unchecked; the consumer
/// matches them against what it opened.
pub struct XmlTokenSource<R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    pending_end: Option<EndTag>,
}

/// What one raw event turned into.
enum Step {
    Skip,
    Token(Token),
    Empty(StartTag),
}

impl<R: BufRead> XmlTokenSource<R> {
    pub fn new(input: R) -> Self {
        let mut reader = NsReader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        Self {
            reader,
            buf: Vec::new(),
            pending_end: None,
        }
    }

    fn convert(resolved: ResolveResult<'_>, event: Event<'_>) -> Result<Step, KmlError> {
        let step = match event {
            Event::Start(e) => Step::Token(Token::Start(start_tag(resolved, &e)?)),
            Event::Empty(e) => Step::Empty(start_tag(resolved, &e)?),
            Event::End(e) => Step::Token(Token::End(EndTag {
                namespace: namespace(resolved)?,
                local_name: SmolStr::new(utf8(e.local_name().as_ref())?),
            })),
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| KmlError::xml(format!("Invalid text: {e}")))?;
                Step::Token(Token::Text(text.into_owned()))
            }
            Event::CData(e) => Step::Token(Token::Text(utf8(&e.into_inner())?.to_string())),
            Event::Eof => Step::Token(Token::Eof),
            _ => Step::Skip,
        };
        Ok(step)
    }
}

impl<R: BufRead> TokenSource for XmlTokenSource<R> {
    fn next_token(&mut self) -> Result<Token, KmlError> {
        if let Some(end) = self.pending_end.take() {
            return Ok(Token::End(end));
        }
        loop {
            self.buf.clear();
            let raw = match self.reader.read_resolved_event_into(&mut self.buf) {
                Ok((resolved, event)) => Ok(Self::convert(resolved, event)?),
                Err(e) => Err(e),
            };
            let step = raw.map_err(|e| match e {
                quick_xml::Error::IllFormed(e) => KmlError::structure(
                    format!("{e} (position {})", self.reader.error_position()),
                    "",
                ),
                e => KmlError::xml(format!(
                    "XML parse error at position {}: {e}",
                    self.reader.error_position()
                )),
            })?;
            match step {
                Step::Skip => continue,
                Step::Token(token) => return Ok(token),
                Step::Empty(start) => {
                    self.pending_end = Some(EndTag::of(&start));
                    return Ok(Token::Start(start));
                }
            }
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, KmlError> {
    std::str::from_utf8(bytes).map_err(|e| KmlError::xml(format!("Invalid UTF-8: {e}")))
}

fn namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, KmlError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(utf8(ns.as_ref())?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(KmlError::xml(format!(
            "Unbound namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn start_tag(resolved: ResolveResult<'_>, e: &BytesStart<'_>) -> Result<StartTag, KmlError> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| KmlError::xml(format!("Invalid attribute: {e}")))?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| KmlError::xml(format!("Invalid attribute value: {e}")))?;
        attributes.push((utf8(key)?.to_string(), value.into_owned()));
    }
    Ok(StartTag {
        namespace: namespace(resolved)?,
        local_name: SmolStr::new(utf8(e.local_name().as_ref())?),
        attributes,
    })
}

/// Writes tokens as XML text.
///
/// A start tag is held back until the next token arrives so elements without
/// content come out as `<name/>`.
pub struct XmlTokenSink<W: Write> {
    writer: Writer<W>,
    pending: Option<BytesStart<'static>>,
}

impl<W: Write> XmlTokenSink<W> {
    /// `indent` is the number of spaces per nesting level; `None` writes
    /// everything on one line.
    pub fn new(inner: W, indent: Option<usize>) -> Self {
        let writer = match indent {
            Some(width) => Writer::new_with_indent(inner, b' ', width),
            None => Writer::new(inner),
        };
        Self {
            writer,
            pending: None,
        }
    }

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>`. Call before any tag.
    pub fn write_declaration(&mut self) -> Result<(), KmlError> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W, KmlError> {
        self.flush_pending()?;
        Ok(self.writer.into_inner())
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), KmlError> {
        self.writer
            .write_event(event)
            .map_err(|e| KmlError::xml(format!("Write error: {e}")))
    }

    fn flush_pending(&mut self) -> Result<(), KmlError> {
        match self.pending.take() {
            Some(start) => self.emit(Event::Start(start)),
            None => Ok(()),
        }
    }
}

impl<W: Write> TokenSink for XmlTokenSink<W> {
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError> {
        self.flush_pending()?;
        let mut start = BytesStart::new(name.to_string());
        for &attribute in attributes {
            start.push_attribute(attribute);
        }
        self.pending = Some(start);
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), KmlError> {
        self.flush_pending()?;
        self.emit(Event::Text(BytesText::new(text)))
    }

    fn end_tag(&mut self, name: &str) -> Result<(), KmlError> {
        match self.pending.take() {
            Some(start) => self.emit(Event::Empty(start)),
            None => self.emit(Event::End(BytesEnd::new(name))),
        }
    }
}
