//! Indented text dump of a parsed tree.

use super::ast::{Ast, NodeId, NodeKind};

const INDENT: usize = 5;

/// Renders the tree below the root, one node per line.
///
/// Interior nodes print as `Nonterminal: NAME`, leaves as `Terminal: text`,
/// each level indented five columns further than its parent.
pub fn render_tree(ast: &Ast) -> String {
    let mut out = String::new();

    if let Some(root) = ast.root() {
        render_node(ast, root, 0, &mut out);
    }

    out
}

pub fn render_node(ast: &Ast, id: NodeId, depth: usize, out: &mut String) {
    let node = ast.node(id);

    out.push_str(&" ".repeat(depth * INDENT));
    match node.kind() {
        NodeKind::Leaf(token) => out.push_str(&format!(" Terminal: {}\n", token)),
        NodeKind::Interior(tag) => out.push_str(&format!(" Nonterminal: {}\n", tag)),
    }

    for child in node.children() {
        render_node(ast, *child, depth + 1, out);
    }
}
