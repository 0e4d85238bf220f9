//! The rotation primitive shared by both fixup state machines.

use crate::node::{RbNode, Side};
use crate::util::{child, get_p, set_child, set_p, side_of};

/// Rotates `x` down toward `dir`; the child on the opposite side rises
/// into `x`'s position and `x` becomes its `dir` child. The rising
/// child's old `dir` subtree moves under `x`. Three parent links are
/// rewritten; colors are untouched. `root` is updated when `x` was the
/// root.
///
/// `rotate(.., Side::Left)` is the classic `rotate_left`. Rotating when
/// the rising child is the NIL leaf is a programming error.
pub(crate) fn rotate<K>(arena: &mut [RbNode<K>], root: &mut Option<u32>, x: u32, dir: Side) {
    let y = child(arena, x, dir.opposite()).expect("rotation requires a real child to rise");
    let mid = child(arena, y, dir);

    set_child(arena, x, dir.opposite(), mid);
    if let Some(mid) = mid {
        set_p(arena, mid, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    match p {
        Some(p) => {
            let slot = side_of(arena, p, Some(x));
            set_child(arena, p, slot, Some(y));
        }
        None => *root = Some(y),
    }

    set_child(arena, y, dir, Some(x));
    set_p(arena, x, Some(y));
}
