//! Tree construction on reduction.
//!
//! Values on the parse stack are fragments: ordered runs of sibling nodes.
//! Untagged rules concatenate the fragments of their right-hand side and hand
//! the run upward unchanged, so only tagged rules ever create interior nodes.

use crate::{
    ast::{
        ast::{Ast, NodeId},
        tags::NodeTag,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A non-empty run of sibling nodes, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(Vec<NodeId>);

impl Fragment {
    pub fn single(id: NodeId) -> Self {
        Fragment(vec![id])
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The node itself when the run has exactly one member.
    pub fn into_single(self) -> Option<NodeId> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Combines the right-hand-side values of a rule being reduced.
///
/// Absent values are skipped. Without a tag the present fragments are joined
/// into one run (absent if there are none); with a tag a single interior node
/// owning that run is created, even when the run is empty.
pub fn build(
    ast: &mut Ast,
    tag: Option<NodeTag>,
    fragments: Vec<Option<Fragment>>,
) -> Result<Option<Fragment>, Error> {
    let present: Vec<Fragment> = fragments.into_iter().flatten().collect();
    let total = present.iter().map(Fragment::len).sum();

    let mut chain: Vec<NodeId> = Vec::new();
    chain
        .try_reserve(total)
        .map_err(|_| Error::new(ErrorImpl::AllocationFailure, Position::null()))?;
    for fragment in present {
        chain.extend(fragment.0);
    }

    match tag {
        None if chain.is_empty() => Ok(None),
        None => Ok(Some(Fragment(chain))),
        Some(tag) => Ok(Some(Fragment::single(ast.interior(tag, chain)?))),
    }
}
