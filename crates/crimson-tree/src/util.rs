//! Arena link/color helpers and ordered walks.
//!
//! All tree machinery works with `u32` indices into a caller-owned
//! `Vec<RbNode<K>>` arena; `None` links stand for the NIL leaf.

use std::cmp::Ordering;

use crate::node::{RbNode, Side};

#[inline]
pub(crate) fn get_p<K>(arena: &[RbNode<K>], i: u32) -> Option<u32> {
    arena[i as usize].p
}

#[inline]
pub(crate) fn get_l<K>(arena: &[RbNode<K>], i: u32) -> Option<u32> {
    arena[i as usize].l
}

#[inline]
pub(crate) fn get_r<K>(arena: &[RbNode<K>], i: u32) -> Option<u32> {
    arena[i as usize].r
}

#[inline]
pub(crate) fn set_p<K>(arena: &mut [RbNode<K>], i: u32, v: Option<u32>) {
    arena[i as usize].p = v;
}

#[inline]
pub(crate) fn child<K>(arena: &[RbNode<K>], i: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => arena[i as usize].l,
        Side::Right => arena[i as usize].r,
    }
}

#[inline]
pub(crate) fn set_child<K>(arena: &mut [RbNode<K>], i: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => arena[i as usize].l = v,
        Side::Right => arena[i as usize].r = v,
    }
}

/// Which child slot of `parent` holds `link`.
///
/// During the deletion fixup `link` may be `None` (the NIL leaf left
/// behind by a transplant); the vacated slot is then the answer, since a
/// black node's sibling subtree is never empty.
#[inline]
pub(crate) fn side_of<K>(arena: &[RbNode<K>], parent: u32, link: Option<u32>) -> Side {
    if get_l(arena, parent) == link {
        Side::Left
    } else {
        Side::Right
    }
}

/// NIL links count as black.
#[inline]
pub(crate) fn is_black<K>(arena: &[RbNode<K>], link: Option<u32>) -> bool {
    link.map_or(true, |i| arena[i as usize].black)
}

#[inline]
pub(crate) fn is_red<K>(arena: &[RbNode<K>], link: Option<u32>) -> bool {
    !is_black(arena, link)
}

#[inline]
pub(crate) fn set_black<K>(arena: &mut [RbNode<K>], i: u32, black: bool) {
    arena[i as usize].black = black;
}

/// Leftmost node under `root`.
pub fn first<K>(arena: &[RbNode<K>], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<K>(arena: &[RbNode<K>], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<K>(arena: &[RbNode<K>], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<K>(arena: &[RbNode<K>], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds a node by key.
pub fn find<K: Ord>(arena: &[RbNode<K>], root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(&arena[i as usize].key) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

fn size_inner<K>(arena: &[RbNode<K>], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<K>(arena: &[RbNode<K>], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}
