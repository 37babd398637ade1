//! Contains the [`Lexer`], the cursor that turns source bytes into [`Token`]s one at a time.

use std::{iter::FusedIterator, ops::Range};

use monkey_base::source_file::{bytes_to_string, ByteIndex};

use crate::token::{lookup_identifier, Token, TokenKind};

/// Is a single pass cursor over the source code producing one [`Token`] per call.
///
/// The lexer never rewinds. Once the end of the input is reached every further call produces a
/// [`TokenKind::Eof`] token.
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Lexer<'a> {
    input: &'a [u8],

    /// Index of the byte under examination.
    position: ByteIndex,

    /// Index of the byte after the one under examination.
    read_position: ByteIndex,

    /// The byte under examination, [`None`] past the end of the input.
    character: Option<u8>,
}

fn is_letter(character: u8) -> bool { character.is_ascii_alphabetic() || character == b'_' }

fn is_digit(character: u8) -> bool { character.is_ascii_digit() }

fn is_whitespace(character: u8) -> bool { matches!(character, b' ' | b'\t' | b'\r' | b'\n') }

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of the given source code.
    #[must_use]
    pub fn new(input: &'a str) -> Self { Self::from_bytes(input.as_bytes()) }

    /// Creates a lexer positioned at the start of the given source bytes.
    ///
    /// Each byte is one character; bytes outside of ASCII are never part of a valid token.
    #[must_use]
    pub fn from_bytes(input: &'a [u8]) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            character: None,
        };
        lexer.read_character();

        lexer
    }

    /// Checks if the lexer has reached the end of the input.
    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.character.is_none() }

    fn read_character(&mut self) {
        self.position = self.read_position;
        self.character = self.input.get(self.position).copied();

        if self.character.is_some() {
            self.read_position += 1;
        }
    }

    fn peek_character(&self) -> Option<u8> { self.input.get(self.read_position).copied() }

    fn skip_whitespace(&mut self) {
        while self.character.is_some_and(is_whitespace) {
            self.read_character();
        }
    }

    /// Advances while the current byte satisfies the predicate and returns the consumed bytes.
    fn read_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.position;

        while self.character.is_some_and(&predicate) {
            self.read_character();
        }

        &self.input[start..self.position]
    }

    /// Resolves a character that may be followed by `=`. The second character is consumed only
    /// if it is `=`.
    fn with_equal_sign(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.peek_character() == Some(b'=') {
            self.read_character();
            double
        } else {
            single
        }
    }

    /// Produces the next token along with the byte range it was scanned from.
    ///
    /// The range of a [`TokenKind::Eof`] token is the empty range at the end of the input.
    pub fn next_spanned(&mut self) -> (Range<ByteIndex>, Token) {
        self.skip_whitespace();

        let start = self.position;
        let Some(character) = self.character else {
            return (start..start, Token::new(TokenKind::Eof, String::new()));
        };

        let kind = match character {
            b'=' => self.with_equal_sign(TokenKind::Assign, TokenKind::Equal),
            b'!' => self.with_equal_sign(TokenKind::Bang, TokenKind::NotEqual),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LeftParenthesis,
            b')' => TokenKind::RightParenthesis,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,

            // identifiers and integers stop on the first byte that is not part of them, so the
            // lexer is already positioned at the next token
            character if is_letter(character) => {
                let literal = bytes_to_string(self.read_while(is_letter));
                let kind = lookup_identifier(&literal);

                return (start..self.position, Token::new(kind, literal));
            }
            character if is_digit(character) => {
                let literal = bytes_to_string(self.read_while(is_digit));

                return (start..self.position, Token::new(TokenKind::Integer, literal));
            }

            _ => TokenKind::Illegal,
        };

        self.read_character();

        let range = start..self.position;
        let literal = bytes_to_string(&self.input[range.clone()]);

        (range, Token::new(kind, literal))
    }

    /// Produces the next token.
    ///
    /// Whitespace is skipped. Bytes that don't start any token are reported as a single
    /// [`TokenKind::Illegal`] token each.
    pub fn next_token(&mut self) -> Token { self.next_spanned().1 }
}

/// Yields every token before the end of the input; the [`TokenKind::Eof`] token itself is not
/// yielded.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lazily tokenizes the given source code. See [`Lexer`].
#[must_use]
pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ { Lexer::new(input) }
