//! Structural validation of the red-black invariants.

use thiserror::Error;

use crate::node::RbNode;
use crate::util::{first, get_l, get_p, get_r, next};

/// A broken red-black structural invariant, reported with the arena
/// index nearest the damage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("root node {0} is not black")]
    RootNotBlack(u32),
    #[error("child of node {0} does not point back to it")]
    BrokenParentLink(u32),
    #[error("red node {0} has a red child")]
    RedRedEdge(u32),
    #[error("black-height mismatch between the subtrees of node {0}")]
    BlackHeightMismatch(u32),
    #[error("in-order key sequence is not strictly ascending at node {0}")]
    OutOfOrder(u32),
}

/// Checks every invariant: root color, parent back-links, no red-red
/// edges, uniform black-height, and a strictly ascending in-order key
/// sequence. An empty tree is valid.
pub fn check<K: Ord>(arena: &[RbNode<K>], root: Option<u32>) -> Result<(), InvariantViolation> {
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent(root));
    }
    if !arena[root as usize].black {
        return Err(InvariantViolation::RootNotBlack(root));
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(pv) = prev {
            if arena[pv as usize].key >= arena[i as usize].key {
                return Err(InvariantViolation::OutOfOrder(i));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

fn black_height<K>(arena: &[RbNode<K>], node: Option<u32>) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);

    for c in [l, r].into_iter().flatten() {
        if get_p(arena, c) != Some(node) {
            return Err(InvariantViolation::BrokenParentLink(node));
        }
    }

    if !arena[node as usize].black {
        for c in [l, r].into_iter().flatten() {
            if !arena[c as usize].black {
                return Err(InvariantViolation::RedRedEdge(node));
            }
        }
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(InvariantViolation::BlackHeightMismatch(node));
    }

    Ok(lh + usize::from(arena[node as usize].black))
}
