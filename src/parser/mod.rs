//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a table-driven LR parser that turns a stream of
//! tokens into a tree. It is made of:
//!
//! - `grammar`: symbolic rule definitions resolved to symbol ids
//! - `table`: the action/goto matrix and its SLR(1) builder
//! - `lookups`: the Mini C grammar and its lazily built table
//! - `parser`: the shift-reduce automaton and its entry points
//! - `builder`: tree construction on reduction, splicing untagged rules
//! - `recovery`: panic-mode synchronization and stack unwinding
//! - `diagnostics`: stack and token rendering for reports
//!
//! Only rules tagged with a node kind create interior nodes, and only
//! identifier and number tokens become leaves, so the resulting tree is
//! already abstract.

pub mod builder;
pub mod diagnostics;
pub mod grammar;
pub mod lookups;
pub mod parser;
pub mod recovery;
pub mod stack;
pub mod table;
