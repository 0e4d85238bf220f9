use crimson_tree::RbTree;

#[test]
fn ceil_and_floor_between_even_keys() {
    let tree: RbTree<i32> = (0..=98).step_by(2).collect();

    for i in (1..=97).step_by(2) {
        assert_eq!(tree.ceil(&i), Some(&(i + 1)), "ceil({i})");
        assert_eq!(tree.floor(&i), Some(&(i - 1)), "floor({i})");
    }
}

#[test]
fn exact_match_returns_the_key_itself() {
    let tree: RbTree<i32> = (0..=98).step_by(2).collect();

    for i in (0..=98).step_by(2) {
        assert_eq!(tree.ceil(&i), Some(&i));
        assert_eq!(tree.floor(&i), Some(&i));
    }
}

#[test]
fn out_of_range_queries_are_absent() {
    let tree: RbTree<i32> = (0..=98).step_by(2).collect();

    assert_eq!(tree.ceil(&99), None);
    assert_eq!(tree.floor(&-1), None);
    assert_eq!(tree.ceil(&-1), Some(&0));
    assert_eq!(tree.floor(&99), Some(&98));
}

#[test]
fn empty_tree_has_no_bounds() {
    let tree: RbTree<i32> = RbTree::new();
    assert_eq!(tree.ceil(&0), None);
    assert_eq!(tree.floor(&0), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
}

#[test]
fn bounds_track_removals() {
    let mut tree: RbTree<i32> = [10, 20, 30, 40].into_iter().collect();

    assert_eq!(tree.ceil(&25), Some(&30));
    assert_eq!(tree.floor(&25), Some(&20));

    tree.remove(&30);
    assert_eq!(tree.ceil(&25), Some(&40));

    tree.remove(&20);
    assert_eq!(tree.floor(&25), Some(&10));
}
