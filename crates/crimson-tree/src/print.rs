//! Debug printer for tree diagnostics.

use std::fmt::Debug;

use crate::node::RbNode;

/// Renders the subtree at `node` as an indented diagram, one node per
/// line with its arena index and color.
pub fn print<K: Debug>(arena: &[RbNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.black { "black" } else { "red" };
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!("Node[{i}] {color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.key)
        }
    }
}
