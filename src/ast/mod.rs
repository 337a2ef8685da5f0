/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: Node arena, node kinds and traversal helpers
/// - tags: Closed set of interior node kinds
/// - printer: Indented textual dump used by the driver
pub mod ast;
pub mod printer;
pub mod tags;
