//! Panic-mode error recovery.
//!
//! After an undefined action the parser skips input up to the next statement
//! terminator outside any parentheses or braces, then unwinds its stack to
//! the nearest state where a new declaration or statement may begin.
//! Declaration keywords met at the outer nesting level can end the skip early
//! and are handed back to the automaton instead of being consumed.

use log::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        tokens::{Token, TokenKind},
        TokenSource,
    },
};

use super::{diagnostics::describe_token, parser::Parser};

const TARGET: &str = "minic::recovery";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryConfig {
    /// Ends synchronization when read outside any nesting; consumed.
    pub terminator: TokenKind,
    pub open_paren: TokenKind,
    pub close_paren: TokenKind,
    pub open_brace: TokenKind,
    pub close_brace: TokenKind,
    /// May end synchronization without being consumed.
    pub restart_tokens: Vec<TokenKind>,
}

impl RecoveryConfig {
    pub fn minic() -> Self {
        RecoveryConfig {
            terminator: TokenKind::Semicolon,
            open_paren: TokenKind::OpenParen,
            close_paren: TokenKind::CloseParen,
            open_brace: TokenKind::OpenCurly,
            close_brace: TokenKind::CloseCurly,
            restart_tokens: vec![TokenKind::Const, TokenKind::Int, TokenKind::Void],
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig::minic()
    }
}

/// Parenthesis and brace depth of the tokens skipped so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nesting {
    parens: i32,
    braces: i32,
}

impl Nesting {
    pub fn track(&mut self, kind: TokenKind, config: &RecoveryConfig) {
        if kind == config.open_paren {
            self.parens += 1;
        } else if kind == config.close_paren {
            self.parens -= 1;
        }

        if kind == config.open_brace {
            self.braces += 1;
        } else if kind == config.close_brace {
            self.braces -= 1;
        }
    }

    pub fn is_outermost(&self) -> bool {
        self.parens <= 0 && self.braces <= 0
    }
}

impl<S: TokenSource> Parser<'_, S> {
    /// Recovers from a syntax error on `offending`.
    ///
    /// Returns the token to resume with, or `None` when the automaton should
    /// read a fresh one. Running out of input is fatal.
    pub(super) fn recover(&mut self, offending: Token) -> Result<Option<Token>, Error> {
        self.stats.recoveries += 1;

        // A handed-back token that failed again must not be retried.
        let may_restart = !self.retrying;
        self.retrying = false;

        if offending.is_eof() {
            return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, offending.span.start));
        }
        if may_restart && self.try_restart(&offending) {
            return Ok(Some(offending));
        }
        self.discard(&offending);

        let mut nesting = Nesting::default();
        loop {
            let token = self.source.next_token()?;
            if token.is_eof() {
                return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, token.span.start));
            }

            nesting.track(token.kind, &self.config.recovery);
            if nesting.is_outermost() {
                if token.kind == self.config.recovery.terminator {
                    self.discard(&token);
                    self.unwind();
                    return Ok(None);
                }
                if self.try_restart(&token) {
                    return Ok(Some(token));
                }
            }

            self.discard(&token);
        }
    }

    /// Unwinds to the nearest safe state if `token` is a restart token the
    /// automaton can act on there.
    fn try_restart(&mut self, token: &Token) -> bool {
        if !self.config.recovery.restart_tokens.contains(&token.kind) {
            return false;
        }

        let index = self.safe_index();
        let accepted = self
            .stack
            .state_at(index)
            .is_some_and(|state| !self.table.action(state, token.kind.id()).is_error());
        if !accepted {
            return false;
        }

        self.stack.truncate(index + 1);
        self.retrying = true;
        warn!(
            target: TARGET,
            "resuming at `{}` in state {}",
            describe_token(token),
            self.stack.top_state()
        );
        true
    }

    /// Truncates the stack to its topmost safe state, or to the bottom entry.
    pub(super) fn unwind(&mut self) {
        let index = self.safe_index();
        self.stack.truncate(index + 1);
        warn!(
            target: TARGET,
            "synchronized, resuming in state {}",
            self.stack.top_state()
        );
    }

    fn safe_index(&self) -> usize {
        (0..self.stack.height())
            .rev()
            .find(|index| {
                self.stack
                    .state_at(*index)
                    .is_some_and(|state| self.table.is_safe(state))
            })
            .unwrap_or(0)
    }

    fn discard(&mut self, token: &Token) {
        self.stats.tokens_discarded += 1;
        debug!(target: TARGET, "discarding `{}`", describe_token(token));
    }
}
