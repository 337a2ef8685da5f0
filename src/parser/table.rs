//! The action/goto matrix driving the automaton, and the SLR(1) builder that
//! produces it from a [`Grammar`].
//!
//! Cells hold `i32` values: a positive value is a shift (terminal columns) or
//! goto (nonterminal columns) to that state, a negative value is a reduction by
//! rule `-value`, and zero marks an error.

use std::collections::{BTreeMap, HashMap, VecDeque};

use log::debug;

use crate::{
    ast::tags::NodeTag,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::grammar::Grammar;

const TARGET: &str = "minic::table";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Error,
}

impl Action {
    pub fn decode(entry: i32) -> Action {
        match entry {
            0 => Action::Error,
            n if n > 0 => Action::Shift(n as usize),
            n => Action::Reduce(n.unsigned_abs() as usize),
        }
    }

    pub fn is_error(self) -> bool {
        self == Action::Error
    }
}

/// What the automaton needs to know about a rule when reducing by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub lhs: usize,
    pub rhs_len: usize,
    pub tag: Option<NodeTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Resolved in favour of the shift.
    ShiftReduce { rule: usize },
    /// Resolved in favour of the lower-numbered rule.
    ReduceReduce { kept: usize, dropped: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub state: usize,
    pub symbol: usize,
    pub kind: ConflictKind,
}

#[derive(Debug, Clone)]
pub struct ParsingTable {
    entries: Vec<i32>,
    state_count: usize,
    terminal_count: usize,
    /// Rule `n` is stored at index `n - 1`; the last one is the accept rule.
    rules: Vec<RuleInfo>,
    safe: Vec<bool>,
    symbol_names: Vec<String>,
    conflicts: Vec<Conflict>,
}

impl ParsingTable {
    /// Wraps a hand-made matrix.
    ///
    /// Every row must have one column per entry of `symbol_names`; the first
    /// `terminal_count` columns are terminals. The last rule of `rules` is the
    /// accept rule.
    pub fn new(
        rows: Vec<Vec<i32>>,
        terminal_count: usize,
        rules: Vec<RuleInfo>,
        safe_states: &[usize],
        symbol_names: Vec<String>,
    ) -> Result<ParsingTable, Error> {
        let symbol_count = symbol_names.len();

        if rows.is_empty() {
            return Err(invalid_table(String::from("table has no states")));
        }
        if rules.is_empty() {
            return Err(invalid_table(String::from("table has no rules")));
        }
        if terminal_count > symbol_count {
            return Err(invalid_table(format!(
                "{} terminals declared but only {} symbols named",
                terminal_count, symbol_count
            )));
        }

        let state_count = rows.len();
        let mut entries = Vec::with_capacity(state_count * symbol_count);

        for (state, row) in rows.into_iter().enumerate() {
            if row.len() != symbol_count {
                return Err(invalid_table(format!(
                    "state {} has {} columns, expected {}",
                    state,
                    row.len(),
                    symbol_count
                )));
            }
            entries.extend(row);
        }

        let mut safe = vec![false; state_count];
        for state in safe_states {
            match safe.get_mut(*state) {
                Some(flag) => *flag = true,
                None => return Err(invalid_table(format!("safe state {} does not exist", state))),
            }
        }

        Ok(ParsingTable {
            entries,
            state_count,
            terminal_count,
            rules,
            safe,
            symbol_names,
            conflicts: vec![],
        })
    }

    /// Builds the SLR(1) table of `grammar`.
    pub fn from_grammar(grammar: &Grammar) -> ParsingTable {
        let collection = Collection::build(grammar);
        let follow = follow_sets(grammar);

        let symbol_count = grammar.symbol_count();
        let terminal_count = grammar.terminal_count();
        let state_count = collection.states.len();
        let accept_index = grammar.rules().len() - 1;

        let mut entries = vec![0i32; state_count * symbol_count];
        let mut conflicts = vec![];

        for (state, targets) in collection.transitions.iter().enumerate() {
            for (symbol, target) in targets {
                entries[state * symbol_count + symbol] = *target as i32;
            }
        }

        for (state, items) in collection.states.iter().enumerate() {
            for item in items {
                let production = &grammar.rules()[item.rule];
                if item.dot < production.rhs.len() {
                    continue;
                }

                let rule = item.rule + 1;
                let lookaheads: Vec<usize> = if item.rule == accept_index {
                    (0..terminal_count).collect()
                } else {
                    follow[production.lhs].iter().collect()
                };

                for symbol in lookaheads {
                    let cell = &mut entries[state * symbol_count + symbol];
                    match Action::decode(*cell) {
                        Action::Error => *cell = -(rule as i32),
                        Action::Shift(_) => conflicts.push(Conflict {
                            state,
                            symbol,
                            kind: ConflictKind::ShiftReduce { rule },
                        }),
                        Action::Reduce(existing) => {
                            let kept = existing.min(rule);
                            *cell = -(kept as i32);
                            conflicts.push(Conflict {
                                state,
                                symbol,
                                kind: ConflictKind::ReduceReduce {
                                    kept,
                                    dropped: existing.max(rule),
                                },
                            });
                        }
                    }
                }
            }
        }

        for conflict in &conflicts {
            debug!(
                target: TARGET,
                "state {} on `{}`: {:?}",
                conflict.state,
                grammar.symbol_name(conflict.symbol),
                conflict.kind
            );
        }

        let safe = collection
            .states
            .iter()
            .map(|items| {
                items.iter().any(|item| {
                    let production = &grammar.rules()[item.rule];
                    production.rhs.get(item.dot).is_some_and(|next| {
                        grammar
                            .restart_points()
                            .iter()
                            .any(|(list, element)| *list == production.lhs && element == next)
                    })
                })
            })
            .collect();

        let rules = grammar
            .rules()
            .iter()
            .map(|production| RuleInfo {
                lhs: production.lhs,
                rhs_len: production.rhs.len(),
                tag: production.tag,
            })
            .collect();

        debug!(
            target: TARGET,
            "built {} states over {} symbols and {} rules",
            state_count,
            symbol_count,
            grammar.rules().len()
        );

        ParsingTable {
            entries,
            state_count,
            terminal_count,
            rules,
            safe,
            symbol_names: grammar.symbol_names(),
            conflicts,
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_names.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminal_count
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Raw cell value; out-of-range coordinates read as errors.
    pub fn entry(&self, state: usize, symbol: usize) -> i32 {
        if state >= self.state_count || symbol >= self.symbol_count() {
            return 0;
        }
        self.entries[state * self.symbol_count() + symbol]
    }

    pub fn action(&self, state: usize, symbol: usize) -> Action {
        Action::decode(self.entry(state, symbol))
    }

    pub fn goto(&self, state: usize, nonterminal: usize) -> Option<usize> {
        match self.entry(state, nonterminal) {
            n if n > 0 => Some(n as usize),
            _ => None,
        }
    }

    pub fn rule(&self, number: usize) -> Option<RuleInfo> {
        self.rules.get(number.checked_sub(1)?).copied()
    }

    pub fn accept_rule(&self) -> usize {
        self.rules.len()
    }

    pub fn is_safe(&self, state: usize) -> bool {
        self.safe.get(state).copied().unwrap_or(false)
    }

    pub fn safe_states(&self) -> Vec<usize> {
        (0..self.state_count).filter(|state| self.safe[*state]).collect()
    }

    /// Terminals with a defined action in `state`, in column order.
    pub fn expected_terminals(&self, state: usize) -> Vec<usize> {
        (0..self.terminal_count)
            .filter(|symbol| self.entry(state, *symbol) != 0)
            .collect()
    }

    pub fn symbol_name(&self, symbol: usize) -> &str {
        self.symbol_names.get(symbol).map(String::as_str).unwrap_or("?")
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

fn invalid_table(message: String) -> Error {
    Error::new(ErrorImpl::InvalidTable { message }, Position::null())
}

/// Dense set of terminal ids.
#[derive(Debug, Clone)]
struct TerminalSet {
    data: Vec<bool>,
}

impl TerminalSet {
    fn new(size: usize) -> Self {
        TerminalSet {
            data: vec![false; size],
        }
    }

    fn add(&mut self, element: usize) -> bool {
        match self.data.get_mut(element) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Adds every element of `other`; returns whether anything changed.
    fn union(&mut self, other: &TerminalSet) -> bool {
        let mut changed = false;
        for (slot, present) in self.data.iter_mut().zip(other.data.iter()) {
            if *present && !*slot {
                *slot = true;
                changed = true;
            }
        }
        changed
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(element, _)| element)
    }
}

/// An LR(0) item: rule index (0-based) and dot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Item {
    rule: usize,
    dot: usize,
}

/// Canonical collection of LR(0) item sets.
struct Collection {
    /// Closed item set of every state, sorted.
    states: Vec<Vec<Item>>,
    transitions: Vec<BTreeMap<usize, usize>>,
}

impl Collection {
    /// States are numbered in breadth-first discovery order with transitions
    /// explored by ascending symbol id, so numbering is deterministic.
    fn build(grammar: &Grammar) -> Collection {
        let mut by_lhs: Vec<Vec<usize>> = vec![vec![]; grammar.symbol_count()];
        for (index, production) in grammar.rules().iter().enumerate() {
            by_lhs[production.lhs].push(index);
        }

        let start = vec![Item {
            rule: grammar.rules().len() - 1,
            dot: 0,
        }];

        let mut kernels: HashMap<Vec<Item>, usize> = HashMap::new();
        let mut states = vec![];
        let mut transitions = vec![];
        let mut queue = VecDeque::new();

        kernels.insert(start.clone(), 0);
        states.push(closure(grammar, &by_lhs, start));
        transitions.push(BTreeMap::new());
        queue.push_back(0);

        while let Some(state) = queue.pop_front() {
            let mut advanced: BTreeMap<usize, Vec<Item>> = BTreeMap::new();

            for item in &states[state] {
                if let Some(symbol) = grammar.rules()[item.rule].rhs.get(item.dot) {
                    advanced.entry(*symbol).or_default().push(Item {
                        rule: item.rule,
                        dot: item.dot + 1,
                    });
                }
            }

            for (symbol, mut kernel) in advanced {
                kernel.sort();
                kernel.dedup();

                let target = match kernels.get(&kernel) {
                    Some(existing) => *existing,
                    None => {
                        let id = states.len();
                        kernels.insert(kernel.clone(), id);
                        states.push(closure(grammar, &by_lhs, kernel));
                        transitions.push(BTreeMap::new());
                        queue.push_back(id);
                        id
                    }
                };

                transitions[state].insert(symbol, target);
            }
        }

        Collection { states, transitions }
    }
}

fn closure(grammar: &Grammar, by_lhs: &[Vec<usize>], kernel: Vec<Item>) -> Vec<Item> {
    let mut items = kernel;
    let mut index = 0;

    // `items` grows while it is walked.
    while index < items.len() {
        let item = items[index];
        if let Some(symbol) = grammar.rules()[item.rule].rhs.get(item.dot) {
            if !grammar.is_terminal(*symbol) {
                for rule in &by_lhs[*symbol] {
                    let candidate = Item { rule: *rule, dot: 0 };
                    if !items.contains(&candidate) {
                        items.push(candidate);
                    }
                }
            }
        }
        index += 1;
    }

    items.sort();
    items
}

/// Nullable flags and FIRST sets of every symbol.
fn first_sets(grammar: &Grammar) -> (Vec<bool>, Vec<TerminalSet>) {
    let terminal_count = grammar.terminal_count();
    let mut nullable = vec![false; grammar.symbol_count()];
    let mut first: Vec<TerminalSet> = (0..grammar.symbol_count())
        .map(|symbol| {
            let mut set = TerminalSet::new(terminal_count);
            if grammar.is_terminal(symbol) {
                set.add(symbol);
            }
            set
        })
        .collect();

    let mut progress = true;
    while progress {
        progress = false;
        for production in grammar.rules() {
            if !nullable[production.lhs] && production.rhs.iter().all(|symbol| nullable[*symbol]) {
                nullable[production.lhs] = true;
                progress = true;
            }
        }
    }

    progress = true;
    while progress {
        progress = false;
        for production in grammar.rules() {
            for symbol in &production.rhs {
                if *symbol != production.lhs {
                    let addition = first[*symbol].clone();
                    progress |= first[production.lhs].union(&addition);
                }
                if !nullable[*symbol] {
                    break;
                }
            }
        }
    }

    (nullable, first)
}

fn follow_sets(grammar: &Grammar) -> Vec<TerminalSet> {
    let (nullable, first) = first_sets(grammar);
    let mut follow: Vec<TerminalSet> = (0..grammar.symbol_count())
        .map(|_| TerminalSet::new(grammar.terminal_count()))
        .collect();

    let mut progress = true;
    while progress {
        progress = false;
        for production in grammar.rules() {
            for (position, symbol) in production.rhs.iter().enumerate() {
                if grammar.is_terminal(*symbol) {
                    continue;
                }

                let mut rest_nullable = true;
                for next in &production.rhs[position + 1..] {
                    progress |= follow[*symbol].union(&first[*next]);
                    if !nullable[*next] {
                        rest_nullable = false;
                        break;
                    }
                }

                if rest_nullable && *symbol != production.lhs {
                    let inherited = follow[production.lhs].clone();
                    progress |= follow[*symbol].union(&inherited);
                }
            }
        }
    }

    follow
}
