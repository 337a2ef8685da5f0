//! The table-driven shift-reduce automaton.
//!
//! The parser pulls one token at a time from a [`TokenSource`], consults the
//! [`ParsingTable`] for the state on top of its stack, and shifts, reduces or
//! recovers until the accept rule is reduced or a fatal error stops it.
//! Syntax errors are recorded and parsing continues after recovery; every
//! other error ends the parse.

use log::{debug, error, trace, warn};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
        TokenSource,
    },
    Position,
};

use super::{
    builder::{self, Fragment},
    diagnostics::{describe_token, dump_stack},
    lookups::MINIC_TABLE,
    recovery::RecoveryConfig,
    stack::{ParseStack, StackFull},
    table::{Action, ParsingTable},
};

pub const DEFAULT_MAX_DEPTH: usize = 100;

const TARGET: &str = "minic::parser";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of stack entries, the bottom one included.
    pub max_depth: usize,
    pub recovery: RecoveryConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            recovery: RecoveryConfig::default(),
        }
    }
}

/// Counters collected over one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub shifts: usize,
    pub reductions: usize,
    /// Reductions that created an interior node.
    pub tagged_reductions: usize,
    pub leaves: usize,
    pub recoveries: usize,
    pub tokens_discarded: usize,
}

/// One parsing session over a token source.
pub struct Parser<'t, S: TokenSource> {
    pub(super) source: S,
    pub(super) table: &'t ParsingTable,
    pub(super) stack: ParseStack,
    ast: Ast,
    errors: Vec<Error>,
    pub(super) stats: ParseStats,
    pub(super) config: ParserConfig,
    /// Set while a token handed back by recovery waits to be shifted.
    pub(super) retrying: bool,
}

impl<'t, S: TokenSource> Parser<'t, S> {
    pub fn new(source: S, table: &'t ParsingTable, config: ParserConfig) -> Self {
        Parser {
            source,
            table,
            stack: ParseStack::new(config.max_depth, TokenKind::EOF.id()),
            ast: Ast::new(),
            errors: vec![],
            stats: ParseStats::default(),
            config,
            retrying: false,
        }
    }

    /// Drives the automaton to completion.
    pub fn run(&mut self) -> Result<Ast, Error> {
        let result = self.drive();

        if let Err(err) = &result {
            error!(target: TARGET, "{}", err);
        }

        result
    }

    fn drive(&mut self) -> Result<Ast, Error> {
        let mut token = self.source.next_token()?;

        loop {
            let state = self.stack.top_state();

            match self.table.action(state, token.kind.id()) {
                Action::Shift(next) => {
                    self.shift(next, token)?;
                    token = self.source.next_token()?;
                }
                Action::Reduce(rule) if rule == self.table.accept_rule() => {
                    return self.accept(&token);
                }
                Action::Reduce(rule) => self.reduce(rule, &token)?,
                Action::Error => {
                    self.report(&token, state);
                    token = match self.recover(token)? {
                        Some(token) => token,
                        None => self.source.next_token()?,
                    };
                }
            }
        }
    }

    fn shift(&mut self, next: usize, token: Token) -> Result<(), Error> {
        trace!(target: TARGET, "shift `{}`, go to state {}", describe_token(&token), next);

        let symbol = token.kind.id();
        let position = token.span.start.clone();
        let value = if token.has_payload() {
            self.stats.leaves += 1;
            Some(Fragment::single(self.ast.leaf(token)?))
        } else {
            None
        };

        self.stack
            .push(next, symbol, value)
            .map_err(|full| overflow(full, position))?;
        self.stats.shifts += 1;
        self.retrying = false;
        Ok(())
    }

    fn reduce(&mut self, rule: usize, lookahead: &Token) -> Result<(), Error> {
        let position = &lookahead.span.start;
        let info = self
            .table
            .rule(rule)
            .ok_or_else(|| invalid_table(format!("rule {} does not exist", rule), position))?;

        let values = self.stack.pop_values(info.rhs_len).ok_or_else(|| {
            invalid_table(
                format!("reducing rule {} would pop below the bottom of the stack", rule),
                position,
            )
        })?;
        let built = builder::build(&mut self.ast, info.tag, values)?;

        let from = self.stack.top_state();
        let next = self.table.goto(from, info.lhs).ok_or_else(|| {
            invalid_table(
                format!(
                    "no goto from state {} on `{}`",
                    from,
                    self.table.symbol_name(info.lhs)
                ),
                position,
            )
        })?;

        self.stack
            .push(next, info.lhs, built)
            .map_err(|full| overflow(full, position.clone()))?;

        self.stats.reductions += 1;
        if info.tag.is_some() {
            self.stats.tagged_reductions += 1;
        }
        trace!(
            target: TARGET,
            "reduce by rule {} to `{}`, go to state {}",
            rule,
            self.table.symbol_name(info.lhs),
            next
        );
        Ok(())
    }

    /// The tree sits one below the top of the stack; the top holds EOF.
    fn accept(&mut self, lookahead: &Token) -> Result<Ast, Error> {
        let missing = || Error::new(ErrorImpl::MissingRoot, lookahead.span.start.clone());

        let below_top = self.stack.height().checked_sub(2).ok_or_else(missing)?;
        let root = self
            .stack
            .take_value(below_top)
            .and_then(Fragment::into_single)
            .ok_or_else(missing)?;

        let mut ast = std::mem::take(&mut self.ast);
        ast.set_root(root);

        debug!(
            target: TARGET,
            "accepted with {} nodes and {} syntax errors",
            ast.len(),
            self.errors.len()
        );
        Ok(ast)
    }

    fn report(&mut self, token: &Token, state: usize) {
        let expected = self
            .table
            .expected_terminals(state)
            .into_iter()
            .map(|symbol| self.table.symbol_name(symbol).to_string())
            .collect();

        let err = Error::new(
            ErrorImpl::SyntaxError {
                token: describe_token(token),
                expected,
                stack: dump_stack(&self.stack, self.table),
            },
            token.span.start.clone(),
        );

        warn!(target: TARGET, "{}", err);
        self.errors.push(err);
    }

    /// Syntax errors recovered from so far, in source order.
    pub fn syntax_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn stack(&self) -> &ParseStack {
        &self.stack
    }

    pub fn table(&self) -> &ParsingTable {
        self.table
    }
}

fn overflow(full: StackFull, position: Position) -> Error {
    Error::new(ErrorImpl::StackOverflow { depth: full.depth }, position)
}

fn invalid_table(message: String, position: &Position) -> Error {
    Error::new(ErrorImpl::InvalidTable { message }, position.clone())
}

/// Parses everything `source` yields with `table`.
///
/// The parser is returned alongside the result so callers can inspect the
/// syntax errors and statistics of the session.
pub fn parse<S: TokenSource>(
    source: S,
    table: &ParsingTable,
    config: ParserConfig,
) -> (Parser<'_, S>, Result<Ast, Error>) {
    let mut parser = Parser::new(source, table, config);
    let result = parser.run();

    (parser, result)
}

/// Scans and parses Mini C source text.
pub fn parse_minic(source: String, file: Option<String>) -> (Parser<'static, Lexer>, Result<Ast, Error>) {
    parse(Lexer::new(source, file), &MINIC_TABLE, ParserConfig::default())
}
