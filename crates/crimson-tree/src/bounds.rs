//! Ceiling and floor queries.

use std::cmp::Ordering;

use crate::node::RbNode;
use crate::util::{get_l, get_r};

/// Smallest stored key `>= key`, or `None` if every key is smaller.
///
/// A candidate is held whenever the descent moves left past a
/// larger-or-equal key; an exact match returns immediately.
pub fn ceil<K: Ord>(arena: &[RbNode<K>], root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match arena[i as usize].key.cmp(key) {
            Ordering::Less => curr = get_r(arena, i),
            Ordering::Equal => return Some(i),
            Ordering::Greater => {
                result = Some(i);
                curr = get_l(arena, i);
            }
        }
    }
    result
}

/// Largest stored key `<= key`, or `None` if every key is larger.
pub fn floor<K: Ord>(arena: &[RbNode<K>], root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match arena[i as usize].key.cmp(key) {
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Equal => return Some(i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}
