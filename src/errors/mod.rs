//! Error types and error handling for the parser.
//!
//! This module defines the error types used throughout the front end.
//! It includes:
//!
//! - Error structures with source position information
//! - Variants for scanner, automaton, recovery and table failures
//! - The recoverable/fatal split used by the automaton loop
//! - Helpful error messages and suggestions

pub mod errors;
