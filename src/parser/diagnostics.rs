//! Human-readable views of the parser state for error reports and logs.

use crate::lexer::tokens::{Token, TokenValue};

use super::{stack::ParseStack, table::ParsingTable};

/// Number of topmost stack entries shown by [`dump_stack`].
pub const DUMP_WINDOW: usize = 10;

/// Renders the top of the state and symbol stacks, bottom to top.
///
/// ```text
/// states: 0 3 7
/// symbols: EOF dcl_spec %ident
/// ```
pub fn dump_stack(stack: &ParseStack, table: &ParsingTable) -> String {
    let start = stack.height().saturating_sub(DUMP_WINDOW);

    let states = stack.states()[start..]
        .iter()
        .map(|state| state.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let symbols = stack.symbols()[start..]
        .iter()
        .map(|symbol| table.symbol_name(*symbol))
        .collect::<Vec<_>>()
        .join(" ");

    format!("states: {}\nsymbols: {}", states, symbols)
}

/// Identifier text, number value, or the terminal's spelling.
pub fn describe_token(token: &Token) -> String {
    match &token.value {
        TokenValue::Identifier(name) => name.clone(),
        TokenValue::Number(value) => value.to_string(),
        TokenValue::None => token.kind.as_str().to_string(),
    }
}
