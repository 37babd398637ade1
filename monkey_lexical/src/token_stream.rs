//! Contains the [`TokenStream`] struct and its related types.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use derive_new::new;
use getset::Getters;
use monkey_base::{
    diagnostic::Handler,
    source_file::{SourceElement, SourceFile, Span},
};

use crate::{
    error::{self, IllegalCharacter},
    lexer::Lexer,
    token::{Token, TokenKind},
};

/// Is a [`Token`] paired with the span of the source code it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, new)]
pub struct SpannedToken {
    /// Gets the token.
    #[get = "pub"]
    token: Token,

    /// Gets the span of the source code that the token was scanned from.
    #[get = "pub"]
    span: Span,
}

impl SourceElement for SpannedToken {
    fn span(&self) -> Span { self.span.clone() }
}

impl SpannedToken {
    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (Token, Span) { (self.token, self.span) }
}

/// Is the list of all tokens of a source file, ending with the [`TokenKind::Eof`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the front end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<SpannedToken>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// The source file is tokenized by calling [`Lexer::next_spanned`] repeatedly until it
    /// produces the [`TokenKind::Eof`] token. Every [`TokenKind::Illegal`] token is reported to
    /// the handler as an [`IllegalCharacter`] and kept in the stream.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        let mut lexer = Lexer::from_bytes(source_file.content());
        let mut tokens = Vec::new();

        loop {
            let (range, token) = lexer.next_spanned();
            let span = Span::new(source_file.clone(), range.start, range.end)
                .expect("the lexer only produces ranges within its input");

            if token.kind() == TokenKind::Illegal {
                handler.receive(
                    IllegalCharacter {
                        character: span.bytes()[0],
                        span: span.clone(),
                    }
                    .into(),
                );
            }

            let is_eof = token.is_eof();
            tokens.push(SpannedToken::new(token, span));

            if is_eof {
                break;
            }
        }

        Self { tokens }
    }

    /// Gets the tokens of the stream without the final [`TokenKind::Eof`] token.
    #[must_use]
    pub fn significant(&self) -> &[SpannedToken] {
        self.tokens.split_last().map_or(&[], |(_, tokens)| tokens)
    }

    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> Vec<SpannedToken> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = SpannedToken;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
