use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("break", TokenKind::Break);
        map.insert("case", TokenKind::Case);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("default", TokenKind::Default);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map.insert("switch", TokenKind::Switch);
        map.insert("void", TokenKind::Void);
        map.insert("while", TokenKind::While);
        map
    };
}

/// Terminal symbols of Mini C.
///
/// The discriminant doubles as the grammar symbol id, so the order here is the
/// column order of the parsing table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,

    Not,          // !
    NotEquals,    // !=
    Percent,      // %
    PercentEquals, // %=
    And,          // &&
    OpenParen,
    CloseParen,
    Star,         // *
    StarEquals,   // *=
    Plus,         // +
    PlusPlus,     // ++
    PlusEquals,   // +=
    Comma,
    Dash,         // -
    MinusMinus,   // --
    MinusEquals,  // -=
    Slash,        // /
    SlashEquals,  // /=
    Colon,
    Semicolon,
    Less,
    LessEquals,
    Assignment,   // =
    Equals,       // ==
    Greater,
    GreaterEquals,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    Or,           // ||
    CloseCurly,

    // Reserved
    Break,
    Case,
    Const,
    Continue,
    Default,
    Do,
    Else,
    For,
    If,
    Int,
    Return,
    Switch,
    Void,
    While,
}

impl TokenKind {
    pub const COUNT: usize = 48;

    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::EOF,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Not,
        TokenKind::NotEquals,
        TokenKind::Percent,
        TokenKind::PercentEquals,
        TokenKind::And,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Star,
        TokenKind::StarEquals,
        TokenKind::Plus,
        TokenKind::PlusPlus,
        TokenKind::PlusEquals,
        TokenKind::Comma,
        TokenKind::Dash,
        TokenKind::MinusMinus,
        TokenKind::MinusEquals,
        TokenKind::Slash,
        TokenKind::SlashEquals,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Assignment,
        TokenKind::Equals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenCurly,
        TokenKind::Or,
        TokenKind::CloseCurly,
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Const,
        TokenKind::Continue,
        TokenKind::Default,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Int,
        TokenKind::Return,
        TokenKind::Switch,
        TokenKind::Void,
        TokenKind::While,
    ];

    /// Grammar symbol id of this terminal.
    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<TokenKind> {
        TokenKind::ALL.get(id).copied()
    }

    /// Source spelling, or a `%`-name for the token classes.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "%ident",
            TokenKind::Number => "%number",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Percent => "%",
            TokenKind::PercentEquals => "%=",
            TokenKind::And => "&&",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Star => "*",
            TokenKind::StarEquals => "*=",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEquals => "+=",
            TokenKind::Comma => ",",
            TokenKind::Dash => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEquals => "-=",
            TokenKind::Slash => "/",
            TokenKind::SlashEquals => "/=",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::Or => "||",
            TokenKind::CloseCurly => "}",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Int => "int",
            TokenKind::Return => "return",
            TokenKind::Switch => "switch",
            TokenKind::Void => "void",
            TokenKind::While => "while",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic payload of a token. Only identifiers and numbers carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Identifier(String),
    Number(i64),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Identifier(name) => write!(f, "{}", name),
            TokenValue::Number(value) => write!(f, "{}", value),
            TokenValue::None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    /// Payload-bearing tokens become leaves of the tree; the rest are dropped.
    pub fn has_payload(&self) -> bool {
        !matches!(self.value, TokenValue::None)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn debug(&self) {
        match &self.value {
            TokenValue::None => println!("{} ()", self.kind),
            _ => println!("{} ({})", self.kind, self),
        }
    }
}
