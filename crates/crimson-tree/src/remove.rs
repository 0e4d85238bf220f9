//! Deletion engine: successor handoff, transplant, and the double-black
//! fixup.

use std::mem;

use crate::node::RbNode;
use crate::rotate::rotate;
use crate::util::{
    child, first, get_l, get_p, get_r, is_black, is_red, set_black, set_child, set_p, side_of,
};

/// Unlinks the node at `z` and rebalances. Returns the new root and the
/// arena slot that left the tree (for the caller to recycle).
///
/// When `z` has two real children its in-order successor's key is moved
/// into `z`'s slot and the successor node is spliced out instead, so the
/// freed slot is not always `z`.
pub fn remove<K>(arena: &mut [RbNode<K>], mut root: Option<u32>, z: u32) -> (Option<u32>, u32) {
    let doomed = if get_l(arena, z).is_some() && get_r(arena, z).is_some() {
        let succ = first(arena, get_r(arena, z)).expect("right subtree is non-empty");
        swap_keys(arena, z, succ);
        succ
    } else {
        z
    };

    // At most one real child remains; it (or the NIL leaf) takes the
    // doomed node's place.
    let x = get_l(arena, doomed).or(get_r(arena, doomed));
    let p = get_p(arena, doomed);
    let doomed_black = is_black(arena, Some(doomed));

    match p {
        Some(p) => {
            let slot = side_of(arena, p, Some(doomed));
            set_child(arena, p, slot, x);
        }
        None => root = x,
    }
    if let Some(x) = x {
        set_p(arena, x, p);
    }

    // Splicing out a black node leaves a black-height deficit at `x`.
    if doomed_black {
        root = fixup(arena, root, x, p);
    }

    let d = &mut arena[doomed as usize];
    d.p = None;
    d.l = None;
    d.r = None;

    (root, doomed)
}

/// Resolves the extra black unit carried by `x`, which may be the NIL
/// leaf left where a black node was spliced out; `parent` is its parent.
///
/// Cases, per iteration (side-relative; `s` = sibling):
/// 1. `s` red — rotate the parent toward `x`, exposing a black sibling.
/// 2. `s` and both its children black, parent black — recolor `s` red and
///    move the deficit up to the parent.
/// 3. as 2 but parent red — swap parent/sibling colors; resolved.
/// 4. `s` black, near child red, far child black — rotate the near child
///    over `s` so the far child becomes red.
/// 5. `s` black, far child red — sibling takes the parent's color, parent
///    and far child go black, rotate the parent toward `x`; resolved.
fn fixup<K>(
    arena: &mut [RbNode<K>],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32> {
    while x != root && is_black(arena, x) {
        let p = parent.expect("non-root node has a parent");
        let side = side_of(arena, p, x);
        let mut s = child(arena, p, side.opposite());

        if is_red(arena, s) {
            set_black(arena, s.expect("red link is a real node"), true);
            set_black(arena, p, false);
            rotate(arena, &mut root, p, side);
            s = child(arena, p, side.opposite());
        }

        let s = s.expect("double-black node has a real sibling");
        let near = child(arena, s, side);
        let far = child(arena, s, side.opposite());

        if is_black(arena, near) && is_black(arena, far) {
            set_black(arena, s, false);
            if is_red(arena, Some(p)) {
                set_black(arena, p, true);
                break;
            }
            x = Some(p);
            parent = get_p(arena, p);
            continue;
        }

        if is_black(arena, far) {
            let near = near.expect("near child is red");
            set_black(arena, near, true);
            set_black(arena, s, false);
            rotate(arena, &mut root, s, side.opposite());
        }

        // Far child red: terminal rotation, deficit resolved regardless
        // of the parent's color.
        let s = child(arena, p, side.opposite()).expect("double-black node has a real sibling");
        let far = child(arena, s, side.opposite()).expect("far child is red");
        let p_black = is_black(arena, Some(p));
        set_black(arena, s, p_black);
        set_black(arena, p, true);
        set_black(arena, far, true);
        rotate(arena, &mut root, p, side);
        break;
    }

    if let Some(x) = x {
        set_black(arena, x, true);
    }
    root
}

/// Swaps the keys of two distinct arena slots, leaving links and colors
/// in place.
fn swap_keys<K>(arena: &mut [RbNode<K>], a: u32, b: u32) {
    debug_assert_ne!(a, b);
    let (lo, hi) = if a < b {
        (a as usize, b as usize)
    } else {
        (b as usize, a as usize)
    };
    let (head, tail) = arena.split_at_mut(hi);
    mem::swap(&mut head[lo].key, &mut tail[0].key);
}
