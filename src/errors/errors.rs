use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Only syntax errors are handled by recovery; everything else ends the parse.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::SyntaxError { .. })
    }

    /// Parser stack window captured when a syntax error was reported.
    pub fn get_stack_window(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::SyntaxError { stack, .. } if !stack.is_empty() => Some(stack),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::StackOverflow { .. } => "StackOverflow",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::AllocationFailure => "AllocationFailure",
            ErrorImpl::InvalidTable { .. } => "InvalidTable",
            ErrorImpl::MissingRoot => "MissingRoot",
            ErrorImpl::GrammarError { .. } => "GrammarError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::SyntaxError { token, expected, .. } if expected.is_empty() => {
                ErrorTip::Suggestion(format!("Unexpected `{}`", token))
            }
            ErrorImpl::SyntaxError { token, expected, .. } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, expected one of: {}",
                token,
                expected
                    .iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            ErrorImpl::StackOverflow { depth } => ErrorTip::Suggestion(format!(
                "Nesting exceeds the parser stack limit of {} entries",
                depth
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Reached end of file while skipping to the next `;`",
            )),
            ErrorImpl::AllocationFailure => ErrorTip::None,
            ErrorImpl::InvalidTable { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::MissingRoot => ErrorTip::Suggestion(String::from(
                "The accepted program did not reduce to a single tree node",
            )),
            ErrorImpl::GrammarError { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("syntax error at {token:?}")]
    SyntaxError {
        token: String,
        expected: Vec<String>,
        stack: String,
    },
    #[error("parsing stack overflow (limit {depth})")]
    StackOverflow { depth: usize },
    #[error("unexpected end of input during error recovery")]
    UnexpectedEndOfInput,
    #[error("could not allocate a tree node")]
    AllocationFailure,
    #[error("invalid parsing table: {message}")]
    InvalidTable { message: String },
    #[error("accepted input produced no single root node")]
    MissingRoot,
    #[error("invalid grammar: {message}")]
    GrammarError { message: String },
}
