//! Token cursor.
//!
//! The reader consumes [`Token`]s from a [`TokenSource`] and the writer emits
//! them into a [`TokenSink`]. Both traits are object safe so extension
//! handlers can work on `&mut dyn` cursors without knowing the backing
//! implementation. [`xml`] provides the quick-xml backed pair.

mod foreign;
mod xml;

pub use foreign::{qualified_name, read_foreign, skip_subtree, write_foreign};
pub use xml::{XmlTokenSink, XmlTokenSource};

use smol_str::SmolStr;

use crate::error::KmlError;

/// An opening tag with its namespace already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Resolved namespace URI, `None` when the element is unqualified.
    pub namespace: Option<String>,
    pub local_name: SmolStr,
    /// Attributes as written, namespace declarations excluded.
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(namespace: Option<&str>, local_name: &str) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local_name: SmolStr::new(local_name),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Value of the attribute written exactly as `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTag {
    pub namespace: Option<String>,
    pub local_name: SmolStr,
}

impl EndTag {
    /// The end-tag that closes `start`.
    pub fn of(start: &StartTag) -> Self {
        Self {
            namespace: start.namespace.clone(),
            local_name: start.local_name.clone(),
        }
    }

    /// True when this tag closes `start`: same local name and namespace.
    pub fn closes(&self, start: &StartTag) -> bool {
        self.local_name == start.local_name && self.namespace == start.namespace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Start(StartTag),
    End(EndTag),
    /// Character data, entities already resolved. Adjacent runs may arrive as
    /// separate tokens.
    Text(String),
    Eof,
}

/// Pull-based token input.
pub trait TokenSource {
    /// Next token. Comments, processing instructions and declarations are
    /// never reported. Returns [`Token::Eof`] repeatedly once input is exhausted.
    fn next_token(&mut self) -> Result<Token, KmlError>;
}

/// Push-based token output. Names are qualified (`prefix:local`) as they
/// should appear in the markup.
pub trait TokenSink {
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError>;
    fn text(&mut self, text: &str) -> Result<(), KmlError>;
    fn end_tag(&mut self, name: &str) -> Result<(), KmlError>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Result<Token, KmlError> {
        (**self).next_token()
    }
}

impl<T: TokenSink + ?Sized> TokenSink for &mut T {
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError> {
        (**self).start_tag(name, attributes)
    }

    fn text(&mut self, text: &str) -> Result<(), KmlError> {
        (**self).text(text)
    }

    fn end_tag(&mut self, name: &str) -> Result<(), KmlError> {
        (**self).end_tag(name)
    }
}

/// In-memory token queue. Replays a fixed token list as a source and records
/// everything written to it as a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: std::collections::VecDeque<Token>,
}

impl TokenBuffer {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens.into()
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token, KmlError> {
        Ok(self.tokens.pop_front().unwrap_or(Token::Eof))
    }
}

impl TokenSink for TokenBuffer {
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError> {
        let (prefix, local) = split_qualified(name);
        self.tokens.push_back(Token::Start(StartTag {
            namespace: prefix.map(str::to_string),
            local_name: SmolStr::new(local),
            attributes: attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), KmlError> {
        self.tokens.push_back(Token::Text(text.to_string()));
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<(), KmlError> {
        let (prefix, local) = split_qualified(name);
        self.tokens.push_back(Token::End(EndTag {
            namespace: prefix.map(str::to_string),
            local_name: SmolStr::new(local),
        }));
        Ok(())
    }
}

/// Split `prefix:local`. A buffer used as a sink records the prefix in the
/// namespace slot since it has no binding table.
fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}
