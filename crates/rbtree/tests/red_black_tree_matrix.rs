use rbtree::{Color, RbTree, TreeError};

const DEMO_KEYS: [i64; 10] = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12];

fn demo_tree() -> RbTree {
    let mut tree = RbTree::new();
    for key in DEMO_KEYS {
        tree.insert(key);
        if let Err(err) = tree.assert_valid() {
            panic!("invalid red-black tree after insert({key}): {err}");
        }
    }
    tree
}

fn erase_key(tree: &mut RbTree, key: i64) {
    let id = tree
        .find(key)
        .unwrap_or_else(|| panic!("key {key} should be present"));
    assert_eq!(tree.erase(id), Ok(key));
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after erase({key}): {err}");
    }
}

#[test]
fn demo_scenario_matrix() {
    let mut tree = demo_tree();
    assert_eq!(tree.to_sorted_vec(), vec![2, 5, 8, 10, 12, 23, 24, 34, 67, 156]);

    let steps: [(i64, &[i64]); 4] = [
        (2, &[5, 8, 10, 12, 23, 24, 34, 67, 156]),
        (156, &[5, 8, 10, 12, 23, 24, 34, 67]),
        (24, &[5, 8, 10, 12, 23, 34, 67]),
        (10, &[5, 8, 12, 23, 34, 67]),
    ];
    for (key, expected) in steps {
        erase_key(&mut tree, key);
        assert_eq!(tree.to_sorted_vec(), expected);
        assert_eq!(tree.len(), expected.len());
    }
}

#[test]
fn empty_tree_reports_absence() {
    let tree = RbTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.find(1), None);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.traverse().next(), None);
    assert_eq!(tree.to_sorted_vec(), Vec::<i64>::new());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.black_height(), 0);
    assert_eq!(tree.assert_valid(), Ok(0));
}

#[test]
fn find_min_max_matrix() {
    let mut tree = demo_tree();
    for key in DEMO_KEYS {
        let id = tree.find(key).expect("inserted key is found");
        assert_eq!(tree.key(id), Some(key));
    }
    for missing in [0, 3, 11, 100, 1000, -5] {
        assert_eq!(tree.find(missing), None);
        assert!(!tree.contains(missing));
    }

    assert_eq!(tree.min().and_then(|id| tree.key(id)), Some(2));
    assert_eq!(tree.max().and_then(|id| tree.key(id)), Some(156));

    erase_key(&mut tree, 2);
    erase_key(&mut tree, 156);
    assert_eq!(tree.min().and_then(|id| tree.key(id)), Some(5));
    assert_eq!(tree.max().and_then(|id| tree.key(id)), Some(67));
    assert_eq!(tree.find(2), None);
    assert_eq!(tree.find(156), None);
}

#[test]
fn root_stays_black_and_traverse_reports_colors() {
    let tree = demo_tree();
    let colors: Vec<Color> = tree.traverse().map(|(_, c)| c).collect();
    assert_eq!(colors.len(), 10);
    let snapshot = tree.snapshot();
    let root = snapshot.root.expect("non-empty tree has a root");
    assert_eq!(root.color, Color::Black);
    assert_eq!(snapshot.len, 10);
}

#[test]
fn erase_invalidates_handle() {
    let mut tree = demo_tree();
    let id = tree.find(2).unwrap();
    assert_eq!(tree.erase(id), Ok(2));
    assert_eq!(
        tree.erase(id),
        Err(TreeError::InvalidHandle {
            index: id.index(),
            generation: id.generation(),
        })
    );
    assert_eq!(tree.key(id), None);
    assert_eq!(tree.len(), 9);
    tree.assert_valid().unwrap();
}

#[test]
fn two_child_erase_invalidates_successor_handle() {
    let mut tree = RbTree::new();
    let two = tree.insert(2);
    let one = tree.insert(1);
    let three = tree.insert(3);

    assert_eq!(tree.erase(two), Ok(2));
    assert_eq!(tree.key(two), None);
    assert_eq!(tree.key(three), None);
    assert_eq!(tree.key(one), Some(1));

    let moved = tree.find(3).expect("successor key survives");
    assert_eq!(moved.index(), two.index());
    assert_ne!(moved, two);
    assert_eq!(tree.to_sorted_vec(), vec![1, 3]);
    tree.assert_valid().unwrap();
}

#[test]
fn erase_rejects_handle_unknown_to_tree() {
    let mut a = RbTree::new();
    let mut b = RbTree::new();
    let ha = a.insert(100);
    let hb = b.insert(7);
    b.insert(8);
    assert_eq!((ha.index(), ha.generation()), (hb.index(), hb.generation()));

    assert!(matches!(b.erase(ha), Err(TreeError::InvalidHandle { .. })));
    assert_eq!(b.key(ha), None);
    assert_eq!(b.to_sorted_vec(), vec![7, 8]);
    assert!(b.assert_valid().is_ok());
    assert_eq!(a.to_sorted_vec(), vec![100]);

    let mut c = a.clone();
    assert!(matches!(c.erase(ha), Err(TreeError::InvalidHandle { .. })));
    assert_eq!(c.to_sorted_vec(), vec![100]);
    let hc = c.find(100).expect("clone keeps key 100");
    assert_ne!(hc, ha);
    assert!(matches!(a.erase(hc), Err(TreeError::InvalidHandle { .. })));
    assert_eq!(c.erase(hc), Ok(100));
    assert!(c.is_empty());

    assert_eq!(a.erase(ha), Ok(100));
    assert!(a.is_empty());
}

#[test]
fn size_conservation_ladder_matrix() {
    let mut tree = RbTree::new();
    for i in 0..200 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in (0..200).step_by(2) {
        assert_eq!(tree.remove(i), Some(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.traverse().count(), 100);

    for i in 0..200 {
        assert_eq!(tree.contains(i), i % 2 == 1);
    }
    assert!(tree.height() <= 2 * 8);
}

#[test]
fn descending_inserts_and_reverse_erases() {
    let mut tree: RbTree = (0..64).rev().collect();
    tree.assert_valid().unwrap();
    for i in (0..64).rev() {
        assert_eq!(tree.remove(i), Some(i));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.remove(0), None);
}

#[test]
fn duplicates_are_kept() {
    let mut tree = RbTree::new();
    tree.extend([5, 5, 3, 5, 3]);
    tree.assert_valid().unwrap();
    assert_eq!(tree.to_sorted_vec(), vec![3, 3, 5, 5, 5]);

    assert_eq!(tree.remove(5), Some(5));
    assert_eq!(tree.to_sorted_vec(), vec![3, 3, 5, 5]);
    tree.assert_valid().unwrap();
}

#[test]
fn next_prev_navigation() {
    let tree = demo_tree();
    let mut forward = Vec::new();
    let mut curr = tree.min();
    while let Some(id) = curr {
        forward.push(tree.key(id).unwrap());
        curr = tree.next(id);
    }
    assert_eq!(forward, tree.to_sorted_vec());

    let mut backward = Vec::new();
    let mut curr = tree.max();
    while let Some(id) = curr {
        backward.push(tree.key(id).unwrap());
        curr = tree.prev(id);
    }
    backward.reverse();
    assert_eq!(backward, forward);

    let handles: Vec<i64> = tree.handles().filter_map(|id| tree.key(id)).collect();
    assert_eq!(handles, forward);
}

#[test]
fn to_sorted_array_respects_buffer_length() {
    let tree = demo_tree();
    let mut small = [0; 4];
    assert_eq!(tree.to_sorted_array(&mut small), 4);
    assert_eq!(small, [2, 5, 8, 10]);

    let mut large = [-1; 12];
    assert_eq!(tree.to_sorted_array(&mut large), 10);
    assert_eq!(&large[..10], &[2, 5, 8, 10, 12, 23, 24, 34, 67, 156]);
    assert_eq!(&large[10..], &[-1, -1]);
}

#[test]
fn clear_and_destroy() {
    let mut tree = demo_tree();
    let id = tree.find(8).unwrap();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.key(id), None);
    assert!(tree.erase(id).is_err());

    tree.extend([1, 2, 3]);
    assert_eq!(tree.to_sorted_vec(), vec![1, 2, 3]);
    assert_eq!(tree.destroy(), 3);
}

#[test]
fn debug_and_print_render() {
    let tree: RbTree = [2, 1, 3].into_iter().collect();
    assert_eq!(
        format!("{tree:?}"),
        "[(1, Red), (2, Black), (3, Red)]"
    );
    assert_eq!(tree.print(), "2 black\n  L=1 red\n  R=3 red\n");
}

#[test]
fn snapshot_serializes_to_json() {
    let tree: RbTree = [2, 1].into_iter().collect();
    let json = serde_json::to_value(tree.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "len": 2,
            "root": {
                "key": 2,
                "color": "black",
                "left": { "key": 1, "color": "red" }
            }
        })
    );
}
