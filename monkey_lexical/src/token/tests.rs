use std::fmt::{Display, Write};

use lazy_static::lazy_static;
use monkey_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::TestCaseResult,
};
use strum::IntoEnumIterator;

use super::{lookup_identifier, KeywordParseError, TokenKind};

lazy_static! {
    static ref KEYWORDS: Vec<TokenKind> = TokenKind::iter().filter(|x| x.is_keyword()).collect();
    static ref SYMBOLS: Vec<TokenKind> = TokenKind::iter()
        .filter(|x| !x.is_keyword() && x.as_str().is_some())
        .collect();
}

/// The ASCII characters that don't start any token.
const ILLEGAL_CHARACTERS: &str = "@#$%^&|~`\"'.:?[]\\";

/// Represents an input for an identifier [`super::Token`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_]{1,16}"
            .prop_filter_map(
                "filter out identifiers that can be used as a keyword",
                |x| {
                    if TokenKind::from_keyword(&x).is_ok() {
                        None
                    } else {
                        Some(Self { string: x })
                    }
                },
            )
            .boxed()
    }
}

/// Represents an input for a keyword [`super::Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// The kind of keyword.
    pub keyword: TokenKind,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword.as_str().unwrap())
    }
}

impl Arbitrary for Keyword {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(KEYWORDS.as_slice())
            .prop_map(|keyword| Self { keyword })
            .boxed()
    }
}

/// Represents an input for an integer [`super::Token`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    /// The valid integer literal string.
    pub value: String,
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.value) }
}

impl Arbitrary for Integer {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            proptest::num::u64::ANY.prop_map(|x| x.to_string()),
            "0[0-9]{1,4}",
        ]
        .prop_map(|value| Self { value })
        .boxed()
    }
}

/// Represents an input for an operator or punctuation [`super::Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// The kind of the symbol.
    pub symbol: TokenKind,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol.as_str().unwrap())
    }
}

impl Arbitrary for Symbol {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(SYMBOLS.as_slice())
            .prop_map(|symbol| Self { symbol })
            .boxed()
    }
}

/// Represents an input for an illegal [`super::Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Illegal {
    /// The character that doesn't start any token.
    pub character: char,
}

impl Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.character)
    }
}

impl Arbitrary for Illegal {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref CHARACTERS: Vec<char> = ILLEGAL_CHARACTERS.chars().collect();
        }

        proptest::sample::select(CHARACTERS.as_slice())
            .prop_map(|character| Self { character })
            .boxed()
    }
}

/// Represents a run of whitespace characters between two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum WhiteSpaces {
    Spaces(u8),
    Tabs(u8),
    NewLines(u8),
    CarriageReturnNewLines(u8),
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1u8..4)
            .prop_flat_map(|x| {
                prop_oneof![
                    Just(Self::Spaces(x)),
                    Just(Self::Tabs(x)),
                    Just(Self::NewLines(x)),
                    Just(Self::CarriageReturnNewLines(x)),
                ]
            })
            .boxed()
    }
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (str, count) = match self {
            Self::Spaces(x) => (" ", x),
            Self::Tabs(x) => ("\t", x),
            Self::NewLines(x) => ("\n", x),
            Self::CarriageReturnNewLines(x) => ("\r\n", x),
        };

        for _ in 0..*count {
            f.write_str(str)?;
        }

        Ok(())
    }
}

/// Represents an input for any [`super::Token`] other than the end of input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Keyword(Keyword),
    Integer(Integer),
    Symbol(Symbol),
    Illegal(Illegal),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            Keyword::arbitrary().prop_map(Self::Keyword),
            Integer::arbitrary().prop_map(Self::Integer),
            Symbol::arbitrary().prop_map(Self::Symbol),
            Illegal::arbitrary().prop_map(Self::Illegal),
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(x) => Display::fmt(x, f),
            Self::Keyword(x) => Display::fmt(x, f),
            Self::Integer(x) => Display::fmt(x, f),
            Self::Symbol(x) => Display::fmt(x, f),
            Self::Illegal(x) => Display::fmt(x, f),
        }
    }
}

impl Token {
    /// Gets the kind of token the lexer is expected to produce for this input.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Identifier(..) => TokenKind::Identifier,
            Self::Keyword(x) => x.keyword,
            Self::Integer(..) => TokenKind::Integer,
            Self::Symbol(x) => x.symbol,
            Self::Illegal(..) => TokenKind::Illegal,
        }
    }
}

impl Input<&super::Token> for &Token {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(self.kind(), output.kind());
        prop_assert_eq!(&self.to_string(), output.literal());
        Ok(())
    }
}

#[test]
fn keyword_table() {
    let expected = [
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ];

    for (word, kind) in expected {
        assert_eq!(lookup_identifier(word), kind);
        assert_eq!(TokenKind::from_keyword(word), Ok(kind));
    }

    assert_eq!(KEYWORDS.len(), expected.len());
}

#[test]
fn non_keywords_are_identifiers() {
    for word in ["Let", "fun", "function", "iff", "_", "returns", "x", ""] {
        assert_eq!(lookup_identifier(word), TokenKind::Identifier);
        assert_eq!(TokenKind::from_keyword(word), Err(KeywordParseError));
    }
}

#[test]
fn kind_display() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::NotEqual.to_string(), "NOT_EQUAL");
    assert_eq!(TokenKind::LeftParenthesis.to_string(), "LEFT_PARENTHESIS");
    assert_eq!(
        super::Token::new(TokenKind::Let, "let".to_string()).to_string(),
        "LET \"let\""
    );
}

#[test]
fn symbols_have_unique_literals() {
    let mut literals: Vec<_> = SYMBOLS.iter().filter_map(|x| x.as_str()).collect();
    literals.sort_unstable();
    literals.dedup();

    assert_eq!(literals.len(), SYMBOLS.len());
    assert_eq!(SYMBOLS.len(), 16);
}

proptest! {
    #[test]
    fn any_identifier_run_is_classified(
        word in "[A-Za-z_]{1,8}"
    ) {
        let kind = lookup_identifier(&word);

        if kind == TokenKind::Identifier {
            prop_assert_eq!(TokenKind::from_keyword(&word), Err(KeywordParseError));
        } else {
            prop_assert_eq!(kind.as_str(), Some(word.as_str()));
        }
    }
}
