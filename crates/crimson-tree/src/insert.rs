//! Insertion engine: red-leaf attachment and the insertion fixup.

use crate::node::{RbNode, Side};
use crate::rotate::rotate;
use crate::util::{child, get_p, is_black, is_red, set_black, set_child, set_p, side_of};

/// BST insert of the already-allocated node `n`. Returns the new root.
///
/// Equal keys descend right, so inserting a key that is already present
/// produces a second node for it; callers that want set semantics check
/// for presence first (as [`RbTree::insert`](crate::RbTree::insert) does).
pub fn insert<K: Ord>(arena: &mut [RbNode<K>], root: Option<u32>, n: u32) -> Option<u32> {
    let Some(mut curr) = root else {
        set_black(arena, n, true);
        return Some(n);
    };

    loop {
        let side = if arena[n as usize].key < arena[curr as usize].key {
            Side::Left
        } else {
            Side::Right
        };
        match child(arena, curr, side) {
            Some(next) => curr = next,
            None => return attach(arena, root, n, curr, side),
        }
    }
}

/// Links the red node `n` into the empty `side` slot of `parent` and
/// rebalances. Returns the new root.
pub fn attach<K>(
    arena: &mut [RbNode<K>],
    root: Option<u32>,
    n: u32,
    parent: u32,
    side: Side,
) -> Option<u32> {
    debug_assert!(child(arena, parent, side).is_none());
    set_child(arena, parent, side, Some(n));
    set_p(arena, n, Some(parent));
    fixup(arena, root, n)
}

/// Resolves the red-red violation introduced at `z`, then forces the
/// root black.
///
/// Loop invariant: `z` is red and the only possible violation is between
/// `z` and its parent. A red parent is never the root, so the grandparent
/// exists and is black.
fn fixup<K>(arena: &mut [RbNode<K>], mut root: Option<u32>, mut z: u32) -> Option<u32> {
    loop {
        let Some(p) = get_p(arena, z) else { break };
        if is_black(arena, Some(p)) {
            break;
        }
        let g = get_p(arena, p).expect("red parent is not the root");
        let side = side_of(arena, g, Some(p));
        let uncle = child(arena, g, side.opposite());

        if is_red(arena, uncle) {
            // Uncle red: recolor and push the violation two levels up.
            set_black(arena, p, true);
            set_black(arena, uncle.expect("red link is a real node"), true);
            set_black(arena, g, false);
            z = g;
            continue;
        }

        // Uncle black. An inner grandchild is first rotated into the
        // outer position, with `z` moving to the old parent.
        let mut low = z;
        if child(arena, p, side.opposite()) == Some(low) {
            rotate(arena, &mut root, p, side);
            low = p;
        }

        // Outer grandchild: one rotation of the grandparent finishes.
        let p = get_p(arena, low).expect("outer grandchild has a parent");
        let g = get_p(arena, p).expect("red-red chain has a grandparent");
        set_black(arena, p, true);
        set_black(arena, g, false);
        rotate(arena, &mut root, g, side.opposite());
        break;
    }

    if let Some(r) = root {
        set_black(arena, r, true);
    }
    root
}
