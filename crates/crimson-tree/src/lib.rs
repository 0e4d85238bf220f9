//! Arena-backed red-black tree: an ordered-key set with ceiling/floor
//! queries and in-order iteration, O(log n) under arbitrary insert and
//! delete sequences.
//!
//! Instead of heap nodes linked by pointers, all "pointers" are
//! `Option<u32>` indices into a `Vec<RbNode<K>>` arena; `None` stands for
//! the NIL leaf and is treated as black everywhere, so the fixup code
//! never special-cases absent children. Deleted slots are recycled
//! through a free list.
//!
//! Two API levels:
//!
//! - [`RbTree`] — the owning container most callers want.
//! - Free functions ([`insert`], [`remove`], [`find`], [`ceil`],
//!   [`floor`], [`first`], [`next`], [`check`], …) operating on a
//!   caller-owned arena plus a root index, for embedding the machinery
//!   in structures that manage their own node storage.
//!
//! ```
//! use crimson_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [2, 1, 4, 5, 9, 3] {
//!     tree.insert(key);
//! }
//! tree.remove(&4);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 9]);
//! assert_eq!(tree.ceil(&6), Some(&9));
//! assert_eq!(tree.floor(&6), Some(&5));
//! ```

pub mod bounds;
pub mod insert;
pub mod node;
pub mod print;
pub mod remove;
mod rotate;
pub mod tree;
pub mod util;
pub mod validate;

pub use bounds::{ceil, floor};
pub use insert::{attach, insert};
pub use node::{RbNode, Side};
pub use print::print;
pub use remove::remove;
pub use tree::{Iter, RbTree};
pub use util::{find, first, last, next, prev, size};
pub use validate::{check, InvariantViolation};
