//! Lexical analysis module for the front end.
//!
//! This module contains the Mini C scanner that converts source text into a
//! stream of tokens for the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser never sees the scanner directly; it pulls tokens through the
//! [`TokenSource`] trait, which [`TokenStream`] also implements for
//! pre-scanned token vectors.

use std::{collections::VecDeque, rc::Rc};

use crate::{errors::errors::Error, Position, Span};

use self::tokens::{Token, TokenKind, TokenValue};

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

/// Supplier of tokens for the parser, one at a time.
///
/// Implementations must eventually return an EOF token and keep returning it
/// on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// A token source over an already scanned token vector.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
    consumed: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        // Reuse the scanner's EOF when present so its position is kept.
        let eof = tokens
            .iter()
            .find(|token| token.is_eof())
            .cloned()
            .unwrap_or_else(|| {
                let end = tokens
                    .last()
                    .map(|token| token.span.end.clone())
                    .unwrap_or_else(Position::null);

                Token {
                    kind: TokenKind::EOF,
                    value: TokenValue::None,
                    span: Span { start: end.clone(), end },
                }
            });

        TokenStream {
            tokens: tokens.into_iter().take_while(|token| !token.is_eof()).collect(),
            eof,
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far, EOF repeats included.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, Error> {
        self.consumed += 1;
        Ok(self.tokens.pop_front().unwrap_or_else(|| self.eof.clone()))
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Result<Token, Error> {
        (**self).next_token()
    }
}

/// Builds a token at a synthetic position, for hand-made streams.
pub fn synthetic_token(kind: TokenKind, value: TokenValue) -> Token {
    let position = Position(0, Rc::new(String::from("<synthetic>")));

    Token {
        kind,
        value,
        span: Span {
            start: position.clone(),
            end: position,
        },
    }
}
