//! Symbolic grammar definitions and their resolution to symbol ids.
//!
//! Rules are written as [`RuleDef`] values naming nonterminals by string.
//! [`Grammar::new`] interns those names, checks every reference, and appends
//! the accept rule `$accept → start EOF`, which is always the last rule.

use std::collections::HashMap;

use crate::{
    ast::tags::NodeTag,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

pub const ACCEPT_SYMBOL: &str = "$accept";

/// A right-hand-side symbol as written in a rule definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    T(TokenKind),
    N(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub lhs: &'static str,
    pub rhs: &'static [Sym],
    pub tag: Option<NodeTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: usize,
    pub rhs: Vec<usize>,
    pub tag: Option<NodeTag>,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    nonterminals: Vec<&'static str>,
    /// Rule number `n` lives at index `n - 1`.
    rules: Vec<Production>,
    start: usize,
    restart_points: Vec<(usize, usize)>,
}

impl Grammar {
    /// Resolves `defs` into a grammar whose start symbol is the first rule's lhs.
    ///
    /// `restart_points` lists `(list, element)` nonterminal pairs; states that
    /// expect `element` inside `list` become recovery-safe states.
    pub fn new(defs: &[RuleDef], restart_points: &[(&'static str, &'static str)]) -> Result<Grammar, Error> {
        let first = defs.first().ok_or_else(|| grammar_error(String::from("grammar has no rules")))?;

        let mut nonterminals: Vec<&'static str> = vec![];
        let mut lookup: HashMap<&'static str, usize> = HashMap::new();

        for def in defs {
            if !lookup.contains_key(def.lhs) {
                lookup.insert(def.lhs, TokenKind::COUNT + nonterminals.len());
                nonterminals.push(def.lhs);
            }
        }

        let resolve = |name: &'static str| -> Result<usize, Error> {
            lookup
                .get(name)
                .copied()
                .ok_or_else(|| grammar_error(format!("nonterminal `{}` has no rules", name)))
        };

        let mut rules = Vec::with_capacity(defs.len() + 1);
        for def in defs {
            let rhs = def
                .rhs
                .iter()
                .map(|sym| match sym {
                    Sym::T(kind) => Ok(kind.id()),
                    Sym::N(name) => resolve(*name),
                })
                .collect::<Result<Vec<usize>, Error>>()?;

            rules.push(Production {
                lhs: resolve(def.lhs)?,
                rhs,
                tag: def.tag,
            });
        }

        let start = resolve(first.lhs)?;
        let restart_points = restart_points
            .iter()
            .map(|(list, element)| Ok((resolve(*list)?, resolve(*element)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        let accept = TokenKind::COUNT + nonterminals.len();
        nonterminals.push(ACCEPT_SYMBOL);
        rules.push(Production {
            lhs: accept,
            rhs: vec![start, TokenKind::EOF.id()],
            tag: None,
        });

        Ok(Grammar {
            nonterminals,
            rules,
            start,
            restart_points,
        })
    }

    pub fn terminal_count(&self) -> usize {
        TokenKind::COUNT
    }

    pub fn symbol_count(&self) -> usize {
        TokenKind::COUNT + self.nonterminals.len()
    }

    pub fn is_terminal(&self, symbol: usize) -> bool {
        symbol < TokenKind::COUNT
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn rules(&self) -> &[Production] {
        &self.rules
    }

    pub fn rule(&self, number: usize) -> Option<&Production> {
        self.rules.get(number.checked_sub(1)?)
    }

    pub fn accept_rule(&self) -> usize {
        self.rules.len()
    }

    pub fn restart_points(&self) -> &[(usize, usize)] {
        &self.restart_points
    }

    /// Id of the nonterminal called `name`.
    pub fn nonterminal(&self, name: &str) -> Option<usize> {
        self.nonterminals
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| TokenKind::COUNT + index)
    }

    pub fn symbol_name(&self, symbol: usize) -> &'static str {
        match TokenKind::from_id(symbol) {
            Some(kind) => kind.as_str(),
            None => self
                .nonterminals
                .get(symbol - TokenKind::COUNT)
                .copied()
                .unwrap_or("?"),
        }
    }

    pub fn symbol_names(&self) -> Vec<String> {
        (0..self.symbol_count())
            .map(|symbol| self.symbol_name(symbol).to_string())
            .collect()
    }
}

fn grammar_error(message: String) -> Error {
    Error::new(ErrorImpl::GrammarError { message }, Position::null())
}
