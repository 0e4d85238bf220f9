//! Owning red-black tree facade over the arena layer.

use std::cmp::Ordering;
use std::fmt;

use crate::node::{RbNode, Side};
use crate::util::{child, first, last, next, prev};
use crate::validate::InvariantViolation;
use crate::{bounds, insert, remove, util, validate};

/// An ordered set of keys backed by a red-black tree.
///
/// Nodes live in a `Vec` arena; the handles returned by [`find`],
/// [`first_index`], [`next`] and friends are indices into it. A handle
/// stays valid until the node it names is removed; removing a key whose
/// node has two children recycles the slot of its in-order *successor*
/// instead, so treat any removal as invalidating outstanding handles.
///
/// Not synchronized: callers sharing a tree across threads must
/// serialize access themselves.
///
/// [`find`]: RbTree::find
/// [`first_index`]: RbTree::first_index
/// [`next`]: RbTree::next
pub struct RbTree<K> {
    arena: Vec<RbNode<K>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl<K: Ord> RbTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Preallocates arena capacity for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Vec::with_capacity(n),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Inserts `key`, returning `true` if it was not already present.
    ///
    /// Inserting a present key is a no-op returning `false`, so the tree
    /// never holds duplicates.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(root) = self.root else {
            let n = self.alloc(key);
            self.arena[n as usize].black = true;
            self.root = Some(n);
            self.len = 1;
            return true;
        };

        let mut curr = root;
        loop {
            let side = match key.cmp(&self.arena[curr as usize].key) {
                Ordering::Equal => return false,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match child(&self.arena, curr, side) {
                Some(next) => curr = next,
                None => {
                    let n = self.alloc(key);
                    self.root = insert::attach(&mut self.arena, self.root, n, curr, side);
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Removes `key`, returning `true` if it was present. Removing an
    /// absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(z) = util::find(&self.arena, self.root, key) else {
            return false;
        };
        let (root, freed) = remove::remove(&mut self.arena, self.root, z);
        self.root = root;
        self.free.push(freed);
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Handle of the node holding `key`.
    pub fn find(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key)
    }

    /// Smallest stored key `>= key`. Returns `key` itself when present.
    pub fn ceil(&self, key: &K) -> Option<&K> {
        bounds::ceil(&self.arena, self.root, key).map(|i| self.key(i))
    }

    /// Largest stored key `<= key`. Returns `key` itself when present.
    pub fn floor(&self, key: &K) -> Option<&K> {
        bounds::floor(&self.arena, self.root, key).map(|i| self.key(i))
    }

    /// Verifies the full red-black invariant set over the current tree.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        validate::check(&self.arena, self.root)
    }
}

impl<K> RbTree<K> {
    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Arena capacity is kept.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| self.key(i))
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn first_index(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last_index(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    /// Handle of the in-order successor of `curr`.
    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    /// Handle of the in-order predecessor of `curr`.
    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    /// Key behind a node handle.
    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].key
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    fn alloc(&mut self, key: K) -> u32 {
        match self.free.pop() {
            Some(slot) => {
                self.arena[slot as usize] = RbNode::new(key);
                slot
            }
            None => {
                self.arena.push(RbNode::new(key));
                (self.arena.len() - 1) as u32
            }
        }
    }
}

impl<K: Ord> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// Lazy ascending key iterator; walks successor links, so the tree must
/// not be mutated while it is alive (the borrow checker enforces this).
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        Some(&self.arena[i as usize].key)
    }
}
