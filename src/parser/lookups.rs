//! The Mini C grammar and its lazily built parsing table.
//!
//! Each rule carries the node tag it materializes on reduction; rules without
//! a tag splice their children into whatever encloses them.

use lazy_static::lazy_static;

use crate::{ast::tags::NodeTag, lexer::tokens::TokenKind as K};

use super::{
    grammar::{
        Grammar, RuleDef,
        Sym::{self, N, T},
    },
    table::ParsingTable,
};

macro_rules! rule {
    ($lhs:literal => [$($sym:expr),*]) => {
        RuleDef { lhs: $lhs, rhs: &[$($sym),*], tag: None }
    };
    ($lhs:literal => [$($sym:expr),*], $tag:ident) => {
        RuleDef { lhs: $lhs, rhs: &[$($sym),*], tag: Some(NodeTag::$tag) }
    };
}

const IDENT: Sym = T(K::Identifier);
const NUMBER: Sym = T(K::Number);

pub static MINIC_RULES: &[RuleDef] = &[
    rule!("program" => [N("translation_unit")], Program),
    rule!("translation_unit" => [N("external_dcl")]),
    rule!("translation_unit" => [N("translation_unit"), N("external_dcl")]),
    rule!("external_dcl" => [N("function_def")]),
    rule!("external_dcl" => [N("declaration")]),
    rule!("function_def" => [N("function_header"), N("compound_st")], FuncDef),
    rule!("function_header" => [N("dcl_spec"), N("function_name"), N("formal_param")], FuncHead),
    rule!("dcl_spec" => [N("dcl_specifiers")], DclSpec),
    rule!("dcl_specifiers" => [N("dcl_specifier")]),
    rule!("dcl_specifiers" => [N("dcl_specifiers"), N("dcl_specifier")]),
    rule!("dcl_specifier" => [N("type_qualifier")]),
    rule!("dcl_specifier" => [N("type_specifier")]),
    rule!("type_qualifier" => [T(K::Const)], ConstType),
    rule!("type_specifier" => [T(K::Int)], IntType),
    rule!("type_specifier" => [T(K::Void)], VoidType),
    rule!("function_name" => [IDENT]),
    rule!("formal_param" => [T(K::OpenParen), N("opt_formal_param"), T(K::CloseParen)], FormalPara),
    rule!("opt_formal_param" => [N("formal_param_list")]),
    rule!("opt_formal_param" => []),
    // `f(void)` declares no parameters.
    rule!("opt_formal_param" => [T(K::Void)]),
    rule!("formal_param_list" => [N("param_dcl")]),
    rule!("formal_param_list" => [N("formal_param_list"), T(K::Comma), N("param_dcl")]),
    rule!("param_dcl" => [N("dcl_spec"), N("declarator")], ParamDcl),
    rule!("compound_st" => [T(K::OpenCurly), N("opt_dcl_list"), N("opt_stat_list"), T(K::CloseCurly)], CompoundSt),
    rule!("opt_dcl_list" => [N("declaration_list")], DclList),
    rule!("opt_dcl_list" => [], DclList),
    rule!("declaration_list" => [N("declaration")]),
    rule!("declaration_list" => [N("declaration_list"), N("declaration")]),
    rule!("declaration" => [N("dcl_spec"), N("init_dcl_list"), T(K::Semicolon)], Dcl),
    rule!("init_dcl_list" => [N("init_declarator")]),
    rule!("init_dcl_list" => [N("init_dcl_list"), T(K::Comma), N("init_declarator")]),
    rule!("init_declarator" => [N("declarator")], DclItem),
    rule!("init_declarator" => [N("declarator"), T(K::Assignment), NUMBER], DclItem),
    rule!("declarator" => [IDENT], SimpleVar),
    rule!("declarator" => [IDENT, T(K::OpenBracket), N("opt_number"), T(K::CloseBracket)], ArrayVar),
    rule!("opt_number" => [NUMBER]),
    rule!("opt_number" => []),
    rule!("opt_stat_list" => [N("statement_list")], StatList),
    rule!("opt_stat_list" => []),
    rule!("statement_list" => [N("statement")]),
    rule!("statement_list" => [N("statement_list"), N("statement")]),
    rule!("statement" => [N("compound_st")]),
    rule!("statement" => [N("expression_st")]),
    rule!("statement" => [N("case_st")]),
    rule!("statement" => [N("default_st")]),
    rule!("statement" => [N("continue_st")]),
    rule!("statement" => [N("break_st")]),
    rule!("statement" => [N("if_st")]),
    rule!("statement" => [N("while_st")]),
    rule!("statement" => [N("do_while_st")]),
    rule!("statement" => [N("switch_st")]),
    rule!("statement" => [N("for_st")]),
    rule!("statement" => [N("return_st")]),
    rule!("expression_st" => [N("opt_expression"), T(K::Semicolon)], ExpSt),
    rule!("opt_expression" => [N("expression")]),
    rule!("opt_expression" => []),
    rule!("case_st" => [T(K::Case), NUMBER, T(K::Colon)], CaseSt),
    rule!("default_st" => [T(K::Default), T(K::Colon)], DefaultSt),
    rule!("continue_st" => [T(K::Continue), T(K::Semicolon)], ContinueSt),
    rule!("break_st" => [T(K::Break), T(K::Semicolon)], BreakSt),
    rule!("if_st" => [T(K::If), T(K::OpenParen), N("expression"), T(K::CloseParen), N("statement")], IfSt),
    rule!("if_st" => [T(K::If), T(K::OpenParen), N("expression"), T(K::CloseParen), N("statement"), T(K::Else), N("statement")], IfElseSt),
    rule!("while_st" => [T(K::While), T(K::OpenParen), N("expression"), T(K::CloseParen), N("statement")], WhileSt),
    rule!("do_while_st" => [T(K::Do), N("statement"), T(K::While), T(K::OpenParen), N("expression"), T(K::CloseParen), T(K::Semicolon)], DoWhileSt),
    rule!("switch_st" => [T(K::Switch), T(K::OpenParen), N("expression"), T(K::CloseParen), N("statement")], SwitchSt),
    rule!("for_st" => [T(K::For), T(K::OpenParen), N("init_part"), N("condition_part"), N("post_part"), T(K::CloseParen), N("statement")], ForSt),
    rule!("init_part" => [N("opt_expression"), T(K::Semicolon)], InitPart),
    rule!("condition_part" => [N("opt_expression"), T(K::Semicolon)], ConditionPart),
    rule!("post_part" => [N("opt_expression")], PostPart),
    rule!("return_st" => [T(K::Return), N("opt_expression"), T(K::Semicolon)], ReturnSt),
    rule!("expression" => [N("assignment_exp")]),
    rule!("assignment_exp" => [N("logical_or_exp")]),
    rule!("assignment_exp" => [N("unary_exp"), T(K::Assignment), N("assignment_exp")], AssignOp),
    rule!("assignment_exp" => [N("unary_exp"), T(K::PlusEquals), N("assignment_exp")], AddAssign),
    rule!("assignment_exp" => [N("unary_exp"), T(K::MinusEquals), N("assignment_exp")], SubAssign),
    rule!("assignment_exp" => [N("unary_exp"), T(K::StarEquals), N("assignment_exp")], MulAssign),
    rule!("assignment_exp" => [N("unary_exp"), T(K::SlashEquals), N("assignment_exp")], DivAssign),
    rule!("assignment_exp" => [N("unary_exp"), T(K::PercentEquals), N("assignment_exp")], ModAssign),
    rule!("logical_or_exp" => [N("logical_and_exp")]),
    rule!("logical_or_exp" => [N("logical_or_exp"), T(K::Or), N("logical_and_exp")], LogicalOr),
    rule!("logical_and_exp" => [N("equality_exp")]),
    rule!("logical_and_exp" => [N("logical_and_exp"), T(K::And), N("equality_exp")], LogicalAnd),
    rule!("equality_exp" => [N("relational_exp")]),
    rule!("equality_exp" => [N("equality_exp"), T(K::Equals), N("relational_exp")], Eq),
    rule!("equality_exp" => [N("equality_exp"), T(K::NotEquals), N("relational_exp")], Ne),
    rule!("relational_exp" => [N("additive_exp")]),
    rule!("relational_exp" => [N("relational_exp"), T(K::Greater), N("additive_exp")], Gt),
    rule!("relational_exp" => [N("relational_exp"), T(K::Less), N("additive_exp")], Lt),
    rule!("relational_exp" => [N("relational_exp"), T(K::GreaterEquals), N("additive_exp")], Ge),
    rule!("relational_exp" => [N("relational_exp"), T(K::LessEquals), N("additive_exp")], Le),
    rule!("additive_exp" => [N("multiplicative_exp")]),
    rule!("additive_exp" => [N("additive_exp"), T(K::Plus), N("multiplicative_exp")], Add),
    rule!("additive_exp" => [N("additive_exp"), T(K::Dash), N("multiplicative_exp")], Sub),
    rule!("multiplicative_exp" => [N("unary_exp")]),
    rule!("multiplicative_exp" => [N("multiplicative_exp"), T(K::Star), N("unary_exp")], Mul),
    rule!("multiplicative_exp" => [N("multiplicative_exp"), T(K::Slash), N("unary_exp")], Div),
    rule!("multiplicative_exp" => [N("multiplicative_exp"), T(K::Percent), N("unary_exp")], Remainder),
    rule!("unary_exp" => [N("postfix_exp")]),
    rule!("unary_exp" => [T(K::Dash), N("unary_exp")], UnaryMinus),
    rule!("unary_exp" => [T(K::Not), N("unary_exp")], LogicalNot),
    rule!("unary_exp" => [T(K::PlusPlus), N("unary_exp")], PreInc),
    rule!("unary_exp" => [T(K::MinusMinus), N("unary_exp")], PreDec),
    rule!("postfix_exp" => [N("primary_exp")]),
    rule!("postfix_exp" => [N("postfix_exp"), T(K::OpenBracket), N("expression"), T(K::CloseBracket)], Index),
    rule!("postfix_exp" => [N("postfix_exp"), T(K::OpenParen), N("opt_actual_param"), T(K::CloseParen)], Call),
    rule!("postfix_exp" => [N("postfix_exp"), T(K::PlusPlus)], PostInc),
    rule!("postfix_exp" => [N("postfix_exp"), T(K::MinusMinus)], PostDec),
    rule!("opt_actual_param" => [N("actual_param")]),
    rule!("opt_actual_param" => []),
    rule!("actual_param" => [N("actual_param_list")], ActualParam),
    rule!("actual_param_list" => [N("assignment_exp")]),
    rule!("actual_param_list" => [N("actual_param_list"), T(K::Comma), N("assignment_exp")]),
    rule!("primary_exp" => [IDENT]),
    rule!("primary_exp" => [NUMBER]),
    rule!("primary_exp" => [T(K::OpenParen), N("expression"), T(K::CloseParen)]),
];

/// `(list, element)` pairs marking the points where a new top-level
/// declaration, local declaration or statement may begin.
pub static MINIC_RESTART_POINTS: &[(&str, &str)] = &[
    ("translation_unit", "external_dcl"),
    ("declaration_list", "declaration"),
    ("statement_list", "statement"),
];

lazy_static! {
    pub static ref MINIC_GRAMMAR: Grammar =
        Grammar::new(MINIC_RULES, MINIC_RESTART_POINTS).expect("Mini C grammar is well formed");
    pub static ref MINIC_TABLE: ParsingTable = ParsingTable::from_grammar(&MINIC_GRAMMAR);
}
