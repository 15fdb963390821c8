//! Tests for the tree metrics (recursive and explicit-stack variants)

use rstest::{fixture, rstest};

use treemetrics::domain::{metrics, metrics_stack, parse_bracket, random_tree, Metrics, Node, Tree};
use treemetrics::util::testing;

#[fixture]
fn full_tree() -> Tree {
    testing::init_test_setup();
    //      1
    //    /   \
    //   2     3
    //  / \   / \
    // 4   5 6   7
    Tree::new(
        Node::new(1)
            .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
            .with_right(Node::new(3).with_left(Node::new(6)).with_right(Node::new(7))),
    )
}

fn all_variants(tree: &Tree) -> [Metrics; 2] {
    [metrics::measure(tree.root()), metrics_stack::measure(tree.root())]
}

// ============================================================
// Concrete scenarios
// ============================================================

#[rstest]
fn given_full_tree_of_seven_when_measuring_then_matches_known_metrics(full_tree: Tree) {
    let expected = Metrics {
        height: 3,
        count: 7,
        sum: 28,
        diameter: 5,
    };

    for measured in all_variants(&full_tree) {
        assert_eq!(measured, expected);
    }
    assert_eq!(full_tree.height(), 3);
    assert_eq!(full_tree.count(), 7);
    assert_eq!(full_tree.sum(), 28);
    assert_eq!(full_tree.diameter(), 5);
    assert_eq!(metrics::diameter_quadratic(full_tree.root()), 5);
}

#[test]
fn given_single_node_when_measuring_then_everything_is_one_except_sum() {
    let tree = Tree::new(Node::new(10));

    for measured in all_variants(&tree) {
        assert_eq!(
            measured,
            Metrics {
                height: 1,
                count: 1,
                sum: 10,
                diameter: 1
            }
        );
    }
    assert_eq!(metrics::diameter_quadratic(tree.root()), 1);
}

#[test]
fn given_absent_tree_when_measuring_then_everything_is_zero() {
    let tree = Tree::empty();

    for measured in all_variants(&tree) {
        assert_eq!(measured, Metrics::default());
    }
    assert_eq!(metrics::height(None), 0);
    assert_eq!(metrics_stack::height_by_levels(None), 0);
    assert_eq!(metrics::diameter_quadratic(None), 0);
}

#[rstest]
#[case("1{2{3{4}}}", 4, 4, 10, 4)]
#[case("1{,2{,3{,4}}}", 4, 4, 10, 4)]
#[case("1{2{4{8},5},3{,7{,9}}}", 4, 8, 39, 7)]
#[case("-5{-3,-2}", 2, 3, -10, 3)]
#[case("0{1{2{3,4{5,6}},7},8}", 5, 9, 36, 6)]
fn given_shaped_tree_when_measuring_then_variants_agree_with_expected(
    #[case] bracket: &str,
    #[case] height: usize,
    #[case] count: usize,
    #[case] sum: i64,
    #[case] diameter: usize,
) {
    let tree = parse_bracket(bracket).unwrap();
    let expected = Metrics {
        height,
        count,
        sum,
        diameter,
    };

    for measured in all_variants(&tree) {
        assert_eq!(measured, expected, "tree {}", bracket);
    }
    assert_eq!(metrics_stack::height_by_levels(tree.root()), height);
    assert_eq!(metrics::diameter_quadratic(tree.root()), diameter);
}

// ============================================================
// Properties over random trees
// ============================================================

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(2, 3)]
#[case(10, 4)]
#[case(100, 5)]
#[case(1_000, 6)]
#[case(10_000, 7)]
fn given_random_tree_when_computing_diameter_then_linear_matches_quadratic(
    #[case] size: usize,
    #[case] seed: u64,
) {
    let tree = random_tree(size, seed);
    let quadratic = metrics::diameter_quadratic(tree.root());

    assert_eq!(metrics::diameter(tree.root()), quadratic);
    assert_eq!(metrics_stack::diameter(tree.root()), quadratic);
}

#[rstest]
fn given_many_small_random_trees_when_computing_diameter_then_linear_matches_quadratic() {
    for seed in 0..500 {
        let size = (seed % 40) as usize;
        let tree = random_tree(size, seed);
        assert_eq!(
            metrics::diameter(tree.root()),
            metrics::diameter_quadratic(tree.root()),
            "size {} seed {}",
            size,
            seed
        );
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(57)]
#[case(2_500)]
fn given_random_tree_when_measuring_then_basic_properties_hold(#[case] size: usize) {
    let tree = random_tree(size, size as u64 + 11);
    let measured = metrics_stack::measure(tree.root());

    // count is zero exactly for the absent tree
    assert_eq!(measured.count == 0, tree.is_empty());
    // height is zero exactly for the absent tree
    assert_eq!(measured.height == 0, tree.is_empty());
    // a path cannot hold more nodes than the tree has
    assert!(measured.diameter <= measured.count);
    assert!(measured.height <= measured.diameter);
    assert_eq!(measured.count, size);
    assert_eq!(metrics::measure(tree.root()), measured);
    assert_eq!(metrics_stack::height_by_levels(tree.root()), measured.height);
}

#[rstest]
#[case(1, 3)]
#[case(300, 8)]
#[case(4_000, 9)]
fn given_random_tree_when_swapping_children_then_sum_unchanged(#[case] size: usize, #[case] seed: u64) {
    let tree = random_tree(size, seed);
    let sum = tree.sum();

    // swap at the root only
    let mut root = tree.clone().into_root().unwrap();
    std::mem::swap(&mut root.left, &mut root.right);
    let swapped_root = Tree::from_root(Some(root));
    assert_eq!(swapped_root.sum(), sum);

    // swap at every node
    let mirrored = tree.mirrored();
    assert_eq!(mirrored.sum(), sum);
    assert_eq!(metrics_stack::sum(mirrored.root()), sum);
}
