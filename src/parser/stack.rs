use super::builder::Fragment;

/// Raised when a push would take the stack past its depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFull {
    pub depth: usize,
}

/// The automaton's stack, kept as three parallel vectors of equal height:
/// states, grammar symbols, and tree fragments (absent for payload-less
/// tokens and empty splices).
///
/// The bottom entry holds the initial state and is never popped.
#[derive(Debug, Clone)]
pub struct ParseStack {
    states: Vec<usize>,
    symbols: Vec<usize>,
    values: Vec<Option<Fragment>>,
    max_depth: usize,
}

impl ParseStack {
    /// A stack holding only the initial state, marked with `bottom_symbol`.
    pub fn new(max_depth: usize, bottom_symbol: usize) -> Self {
        ParseStack {
            states: vec![0],
            symbols: vec![bottom_symbol],
            values: vec![None],
            max_depth,
        }
    }

    pub fn push(&mut self, state: usize, symbol: usize, value: Option<Fragment>) -> Result<(), StackFull> {
        if self.states.len() >= self.max_depth {
            return Err(StackFull {
                depth: self.max_depth,
            });
        }

        self.states.push(state);
        self.symbols.push(symbol);
        self.values.push(value);
        Ok(())
    }

    /// Pops the top `count` entries and returns their values bottom to top.
    ///
    /// Returns `None` if that would remove the bottom entry.
    pub fn pop_values(&mut self, count: usize) -> Option<Vec<Option<Fragment>>> {
        if count >= self.states.len() {
            return None;
        }

        let keep = self.states.len() - count;
        self.states.truncate(keep);
        self.symbols.truncate(keep);
        Some(self.values.split_off(keep))
    }

    /// Cuts the stack down to `height` entries, never below the bottom one.
    pub fn truncate(&mut self, height: usize) {
        let height = height.max(1);
        self.states.truncate(height);
        self.symbols.truncate(height);
        self.values.truncate(height);
    }

    pub fn top_state(&self) -> usize {
        self.states[self.states.len() - 1]
    }

    pub fn state_at(&self, index: usize) -> Option<usize> {
        self.states.get(index).copied()
    }

    pub fn height(&self) -> usize {
        self.states.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn states(&self) -> &[usize] {
        &self.states
    }

    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Moves the value out of the entry at `index`, leaving it absent.
    pub fn take_value(&mut self, index: usize) -> Option<Fragment> {
        self.values.get_mut(index).and_then(Option::take)
    }
}
