//! Is a module containing the [`Token`] type, the closed set of [`TokenKind`]s and the keyword
//! table.

use std::{collections::HashMap, fmt::Display};

use derive_new::new;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration containing all kinds of tokens in the Monkey programming language.
///
/// Its [`Display`] implementation prints the name of the kind in upper snake case, e.g.
/// `NOT_EQUAL`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, strum_macros::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    Eof,
    Illegal,

    Identifier,
    Integer,

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,

    Comma,
    Semicolon,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,

    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// Is an error that is returned when a string is not one of the reserved keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl TokenKind {
    /// Gets the fixed source text of the symbol and keyword kinds.
    ///
    /// Returns [`None`] for the kinds whose literal depends on the source code: [`Self::Eof`],
    /// [`Self::Illegal`], [`Self::Identifier`] and [`Self::Integer`].
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        let str = match self {
            Self::Eof | Self::Illegal | Self::Identifier | Self::Integer => return None,

            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",

            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",

            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        };

        Some(str)
    }

    /// Checks if the kind is one of the reserved keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::True
                | Self::False
                | Self::If
                | Self::Else
                | Self::Return
        )
    }

    /// Gets the keyword kind whose source text is exactly `word`.
    ///
    /// # Errors
    /// [`KeywordParseError`]: `word` is not a reserved keyword.
    pub fn from_keyword(word: &str) -> Result<Self, KeywordParseError> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, TokenKind> = TokenKind::iter()
                .filter(|kind| kind.is_keyword())
                .filter_map(|kind| kind.as_str().map(|str| (str, kind)))
                .collect();
        }

        STRING_KEYWORD_MAP.get(word).copied().ok_or(KeywordParseError)
    }
}

/// Classifies a run of identifier characters: the keyword kind if `identifier` is a reserved
/// keyword, [`TokenKind::Identifier`] otherwise.
#[must_use]
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    TokenKind::from_keyword(identifier).unwrap_or(TokenKind::Identifier)
}

/// Represents a classified unit of source text: its kind and the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the source text that the token was scanned from.
    #[get = "pub"]
    literal: String,
}

impl Token {
    /// Checks if the token marks the end of the input.
    #[must_use]
    pub fn is_eof(&self) -> bool { self.kind == TokenKind::Eof }

    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (TokenKind, String) { (self.kind, self.literal) }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

#[cfg(test)]
pub(crate) mod tests;
