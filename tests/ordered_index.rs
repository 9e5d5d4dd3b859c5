// ordtree/tests/ordered_index.rs

use ordtree::{
    AvlTree, BinarySortTree, OrderedIndex, RedBlackTree, TraversalOrder, TreeConfig, TreeError,
};

fn build<T: OrderedIndex<i32> + Default>(keys: &[i32]) -> T {
    let mut index = T::default();
    for &k in keys {
        index.insert(Some(k)).unwrap();
    }
    index
}

fn check_rejections<T: OrderedIndex<i32> + Default>() {
    let mut index = T::default();
    assert_eq!(index.remove(Some(&1)), Err(TreeError::EmptyTree));
    assert_eq!(index.remove(None), Err(TreeError::NullKey));
    assert_eq!(index.insert(None), Err(TreeError::NullKey));
    assert!(index.is_empty());

    for k in [5, 3, 8, 1, 4] {
        index.insert(Some(k)).unwrap();
    }
    let before = index.to_sequence(TraversalOrder::LevelOrder);

    assert_eq!(index.insert(Some(4)), Err(TreeError::DuplicateKey));
    assert_eq!(index.insert(None), Err(TreeError::NullKey));
    assert_eq!(index.remove(Some(&7)), Err(TreeError::KeyNotFound));
    assert_eq!(index.remove(None), Err(TreeError::NullKey));

    assert_eq!(index.len(), 5);
    assert_eq!(index.to_sequence(TraversalOrder::LevelOrder), before);
    assert!(index.validate().is_ok());
}

fn check_round_trip<T: OrderedIndex<i32> + Default>() {
    let keys = [13, 2, 21, 8, 34, 1, 5, 3, 55, 89];
    let mut index: T = build(&keys);
    for k in keys {
        assert_eq!(index.find(&k), Some(&k));
    }
    assert_eq!(index.find(&4), None);

    let mut sorted = keys.to_vec();
    sorted.sort();
    assert_eq!(index.to_sequence(TraversalOrder::InOrder), sorted);

    for k in keys {
        assert_eq!(index.remove(Some(&k)), Ok(k));
        assert_eq!(index.find(&k), None);
        assert!(index.validate().is_ok());
    }
    assert!(index.is_empty());
}

#[test]
fn rejections_are_uniform_across_trees() {
    check_rejections::<RedBlackTree<i32>>();
    check_rejections::<AvlTree<i32>>();
    check_rejections::<BinarySortTree<i32>>();
}

#[test]
fn insert_find_remove_round_trip() {
    check_round_trip::<RedBlackTree<i32>>();
    check_round_trip::<AvlTree<i32>>();
    check_round_trip::<BinarySortTree<i32>>();
}

#[test]
fn red_black_fixtures_through_trait() {
    let tree: RedBlackTree<i32> = build(&[40, 70, 90, 20, 60, 80, 50, 45, 48]);
    assert_eq!(
        tree.to_sequence(TraversalOrder::LevelOrder),
        vec![50, 40, 70, 20, 45, 60, 90, 48, 80]
    );

    let mut tree: RedBlackTree<i32> = build(&[40, 70, 90, 20, 60, 80, 50, 45, 48, 15]);
    for k in [20, 40, 15, 50, 90, 70, 80] {
        assert_eq!(OrderedIndex::remove(&mut tree, Some(&k)), Ok(k));
    }
    assert_eq!(tree.to_sequence(TraversalOrder::LevelOrder), vec![48, 45, 60]);
    assert!(tree.root().is_some_and(|root| root.is_black()));
}

#[test]
fn binary_sort_tree_fixture_through_trait() {
    let tree: BinarySortTree<i32> = build(&[34, 24, 18, 39, 28, 6, 64, 14, 42, 48, 32, 66, 27]);
    assert_eq!(
        tree.to_sequence(TraversalOrder::PreOrder),
        vec![34, 24, 18, 6, 14, 28, 27, 32, 39, 64, 42, 48, 66]
    );
    assert_eq!(
        tree.to_sequence(TraversalOrder::PostOrder),
        vec![14, 6, 18, 27, 32, 28, 24, 48, 42, 66, 64, 39, 34]
    );
}

#[test]
fn avl_delete_with_balanced_child() {
    let mut tree: AvlTree<i32> = build(&[10, 6, 12, 4, 8]);
    assert_eq!(OrderedIndex::remove(&mut tree, Some(&12)), Ok(12));
    assert_eq!(tree.to_sequence(TraversalOrder::LevelOrder), vec![6, 4, 10, 8]);
}

#[test]
fn string_keys() {
    let mut tree = RedBlackTree::new();
    for word in ["pear", "apple", "fig", "kiwi", "banana"] {
        tree.insert(word.to_string()).unwrap();
    }
    assert_eq!(tree.min().map(String::as_str), Some("apple"));
    assert_eq!(tree.successor(&"fig".to_string()).map(String::as_str), Some("kiwi"));
    assert_eq!(tree.remove(&"kiwi".to_string()), Ok("kiwi".to_string()));
    assert_eq!(tree.in_order(), vec!["apple", "banana", "fig", "pear"]);
}

#[test]
fn config_from_json() {
    let config: TreeConfig =
        serde_json::from_str(r#"{"initialCapacity": 64, "verifyInvariants": true}"#).unwrap();
    let mut tree = RedBlackTree::with_config(config).unwrap();
    for k in (0..64).rev() {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.len(), 64);
    assert!(tree.config().verify_invariants);

    let order: TraversalOrder = serde_json::from_str(r#""postOrder""#).unwrap();
    assert_eq!(order, TraversalOrder::PostOrder);

    let partial: TreeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(partial, TreeConfig::default());
}

#[test]
fn oversized_capacity_is_rejected() {
    let config = TreeConfig {
        initial_capacity: usize::MAX,
        verify_invariants: false,
    };
    if usize::BITS > 32 {
        assert!(matches!(
            RedBlackTree::<i32>::with_config(config),
            Err(TreeError::ConfigError(_))
        ));
    }
}

#[test]
fn unallocatable_capacity_is_an_error() {
    let config: TreeConfig =
        serde_json::from_str(&format!(r#"{{"initialCapacity": {}}}"#, u32::MAX)).unwrap();
    assert!(config.validate().is_ok());
    assert!(matches!(
        RedBlackTree::<u128>::with_config(config),
        Err(TreeError::CapacityExhausted(_))
    ));
}
