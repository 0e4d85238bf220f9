//! Node storage cell and left/right side parameterization.

/// A node in the arena.
///
/// Links (`p`, `l`, `r`) are indices into the owning `Vec<RbNode<K>>`;
/// `None` is the NIL leaf, which every helper treats as black. The parent
/// link is a plain back-index, so the child→parent→child cycle carries no
/// ownership.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub key: K,
    /// Node color: `true` = black, `false` = red.
    pub black: bool,
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl<K> RbNode<K> {
    /// A detached red node, ready to be attached as a leaf.
    pub fn new(key: K) -> Self {
        Self {
            key,
            black: false,
            p: None,
            l: None,
            r: None,
        }
    }
}

/// Which child slot of a parent a node occupies.
///
/// Both fixup state machines and the rotation primitive are written once
/// in terms of a side and its mirror, instead of duplicating every case
/// for left/right orientation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
