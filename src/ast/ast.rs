use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

use super::tags::NodeTag;

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A payload-bearing token (identifier or number).
    Leaf(Token),
    /// A node materialized by a tagged reduction.
    Interior(NodeTag),
}

#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    children: Vec<NodeId>,
    /// Back-reference for diagnostics only; ownership flows through `children`.
    parent: Option<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn tag(&self) -> Option<NodeTag> {
        match self.kind {
            NodeKind::Interior(tag) => Some(tag),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match &self.kind {
            NodeKind::Leaf(token) => Some(token),
            NodeKind::Interior(_) => None,
        }
    }
}

/// Arena holding every node created during one parse.
///
/// Nodes orphaned by error recovery stay in the arena but are unreachable
/// from the root.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    pub fn tag(&self, id: NodeId) -> Option<NodeTag> {
        self.node(id).tag()
    }

    /// Number of nodes allocated, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf(&mut self, token: Token) -> Result<NodeId, Error> {
        let position = token.span.start.clone();
        self.alloc(
            Node {
                kind: NodeKind::Leaf(token),
                children: vec![],
                parent: None,
            },
            position,
        )
    }

    /// Allocates an interior node owning `children` and points them back at it.
    pub fn interior(&mut self, tag: NodeTag, children: Vec<NodeId>) -> Result<NodeId, Error> {
        let position = children
            .first()
            .and_then(|first| self.nodes.get(first.0))
            .and_then(|first| first.token())
            .map(|token| token.span.start.clone())
            .unwrap_or_else(Position::null);

        let id = self.alloc(
            Node {
                kind: NodeKind::Interior(tag),
                children,
                parent: None,
            },
            position,
        )?;

        for index in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[index];
            self.nodes[child.0].parent = Some(id);
        }

        Ok(id)
    }

    fn alloc(&mut self, node: Node, position: Position) -> Result<NodeId, Error> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| Error::new(ErrorImpl::AllocationFailure, position))?;

        self.nodes.push(node);
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Pre-order walk from the root.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = vec![];
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = pending.pop() {
            order.push(id);
            pending.extend(self.children(id).iter().rev());
        }

        order
    }

    /// Tags of the children of `id`, leaves reported as `None`.
    pub fn child_tags(&self, id: NodeId) -> Vec<Option<NodeTag>> {
        self.children(id).iter().map(|child| self.tag(*child)).collect()
    }
}
