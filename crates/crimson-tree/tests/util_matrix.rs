use crimson_tree::{check, find, first, insert, next, remove, size, RbNode};

fn insert_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    arena.push(RbNode::new(value));
    let idx = (arena.len() - 1) as u32;
    let root = insert(arena, root, idx);
    if let Err(err) = check(arena, root) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    root
}

fn delete_value(arena: &mut Vec<RbNode<i32>>, root: Option<u32>, value: i32) -> Option<u32> {
    if let Some(idx) = find(arena, root, &value) {
        let (root, _freed) = remove(arena, root, idx);
        if let Err(err) = check(arena, root) {
            panic!("invalid red-black tree after remove({value}): {err}");
        }
        root
    } else {
        root
    }
}

fn in_order(arena: &[RbNode<i32>], root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i as usize].key);
        curr = next(arena, i);
    }
    out
}

#[test]
fn insert_delete_various_numbers() {
    let mut arena = Vec::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        root = insert_value(&mut arena, root, value);
    }
    assert_eq!(size(&arena, root), 13);

    root = delete_value(&mut arena, root, 100);
    assert_eq!(size(&arena, root), 12);

    root = delete_value(&mut arena, root, 33);
    root = delete_value(&mut arena, root, 33);
    assert_eq!(size(&arena, root), 11);

    root = delete_value(&mut arena, root, 10);
    assert_eq!(size(&arena, root), 10);

    root = delete_value(&mut arena, root, 60);
    assert_eq!(size(&arena, root), 9);

    root = delete_value(&mut arena, root, 22);
    assert_eq!(size(&arena, root), 8);
}

#[test]
fn numbers_from_0_to_100() {
    let mut arena = Vec::new();
    let mut root = None;

    for i in 0..=100 {
        root = insert_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        root = delete_value(&mut arena, root, i);
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
}

#[test]
fn numbers_from_100_to_11() {
    let mut arena = Vec::new();
    let mut root = None;

    for i in (11..=100).rev() {
        root = insert_value(&mut arena, root, i);
    }
    for i in (11..=100).rev() {
        root = delete_value(&mut arena, root, i);
    }
    assert_eq!(root, None);
}

#[test]
fn numbers_both_directions_from_50() {
    let mut arena = Vec::new();
    let mut root = None;

    for i in 0..=100 {
        root = insert_value(&mut arena, root, 50 + i);
        root = insert_value(&mut arena, root, 50 - i);
        assert_eq!(size(&arena, root), (i * 2 + 2) as usize);
    }
    for i in 0..=100 {
        root = delete_value(&mut arena, root, 50 - i);
        root = delete_value(&mut arena, root, 50 + i);
    }
    assert_eq!(root, None);
}

fn raw(key: i32, black: bool, p: Option<u32>, l: Option<u32>, r: Option<u32>) -> RbNode<i32> {
    let mut n = RbNode::new(key);
    n.black = black;
    n.p = p;
    n.l = l;
    n.r = r;
    n
}

// Preassembled tree:
//
//             10B
//         ┌────┴────┐
//       -10R       20R
//      ┌──┴──┐   ┌──┴──┐
//    -20B   6B  15B   25B
//          ┌─┴─┐
//         2R   8R
//
// Adding 4 recolors twice on the way up: 2 and 8 turn black, 6 turns
// red, and the root stays black.
#[test]
fn double_recolor_pass_on_insert() {
    let mut arena = vec![
        raw(10, true, None, Some(1), Some(6)),
        raw(-10, false, Some(0), Some(2), Some(3)),
        raw(-20, true, Some(1), None, None),
        raw(6, true, Some(1), Some(4), Some(5)),
        raw(2, false, Some(3), None, None),
        raw(8, false, Some(3), None, None),
        raw(20, false, Some(0), Some(7), Some(8)),
        raw(15, true, Some(6), None, None),
        raw(25, true, Some(6), None, None),
    ];
    let root = Some(0);
    check(&arena, root).expect("preassembled tree is valid");

    let root = insert_value(&mut arena, root, 4);

    assert_eq!(in_order(&arena, root), [-20, -10, 2, 4, 6, 8, 10, 15, 20, 25]);
    assert!(arena[4].black, "2 turns black");
    assert!(arena[5].black, "8 turns black");
    assert!(!arena[3].black, "6 turns red");
    let root = root.expect("tree is non-empty");
    assert_eq!(arena[root as usize].key, 10);
    assert!(arena[root as usize].black, "root stays black");
}

#[test]
fn two_child_removal_hands_the_key_to_the_successor_slot() {
    let mut arena = Vec::new();
    let mut root = None;
    for value in [50, 25, 75, 10, 30, 60, 90] {
        root = insert_value(&mut arena, root, value);
    }

    let z = find(&arena, root, &50).expect("key present");
    let (root, freed) = remove(&mut arena, root, z);
    check(&arena, root).expect("valid after removing an inner node");

    // 50 had two children, so the slot that left the tree is the one
    // that held the in-order successor (60), not 50's own.
    assert_ne!(freed, z);
    assert_eq!(in_order(&arena, root), [10, 25, 30, 60, 75, 90]);
    assert_eq!(find(&arena, root, &60), Some(z));
}
