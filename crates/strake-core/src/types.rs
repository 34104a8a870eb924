use serde::{Deserialize, Serialize};

/// Token kinds a rule handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    String,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote character of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMark {
    Single,
    Double,
}

impl QuoteMark {
    pub fn as_char(&self) -> char {
        match self {
            QuoteMark::Single => '\'',
            QuoteMark::Double => '"',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteMark::Single => "'",
            QuoteMark::Double => "\"",
        }
    }
}

impl std::fmt::Display for QuoteMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier occurrence with position metadata.
///
/// `column` is the one-based display column; `from` is the one-based start
/// offset. Rules disagree on which of the two they report, so both are kept.
/// `is_property` is true when the identifier occurs in property-access
/// position (e.g. after a `.`) rather than as a bound name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierToken {
    pub name: String,
    pub line: u32,
    pub column: u32,
    pub from: u32,
    pub is_property: bool,
}

/// A string literal occurrence with position metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringToken {
    pub line: u32,
    pub column: u32,
    pub quote: QuoteMark,
}

/// An already-classified source entity, as delivered by the tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Identifier(IdentifierToken),
    String(StringToken),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Identifier(_) => TokenKind::Identifier,
            Token::String(_) => TokenKind::String,
        }
    }
}

/// A style warning: advisory output, never a control-flow signal.
///
/// `data` carries the ordered interpolation arguments for the message
/// template keyed by `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub line: u32,
    pub column: u32,
    pub data: Vec<String>,
}
