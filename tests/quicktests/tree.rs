use persistent_avl::{Nullable, Tree};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same values as the model.
fn do_ops<T>(ops: &[Op<T>], mut tree: Nullable<Tree<T>>, model: &mut Vec<T>) -> Nullable<Tree<T>>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree = Nullable::new(tree.insert(x.clone()));
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                tree = tree.remove(x);
                if let Ok(pos) = model.binary_search(x) {
                    model.remove(pos);
                }
            }
            Op::Iter => {
                assert!(tree.iter().eq(model.iter()));
            }
        }
        assert_eq!(tree.size(), model.len());
        assert!(tree.as_option().map_or(true, Tree::is_balanced));
    }

    tree
}

fn build(xs: &[i8]) -> Nullable<Tree<i8>> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut model = Vec::new();

    let tree = do_ops(&ops, Nullable::empty(), &mut model);
    tree.to_list() == model
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_is_persistent(xs: Vec<i8>, x: i8) -> bool {
    let tree = build(&xs);
    let before = tree.to_list();

    let new_tree = tree.insert(x);

    tree.to_list() == before
        && tree.size() == xs.len()
        && (-128..=127).all(|y: i8| tree.contains(&y) == xs.contains(&y))
        && new_tree.contains(&x)
}

#[quickcheck]
fn remove_is_persistent(xs: Vec<i8>, x: i8) -> bool {
    let tree = build(&xs);
    let before = tree.to_list();

    let _new_tree = tree.remove(&x);

    tree.to_list() == before
}

#[quickcheck]
fn insert_grows_by_one(xs: Vec<i8>, x: i8) -> bool {
    let tree = build(&xs);

    tree.insert(x).size() == tree.size() + 1
}

#[quickcheck]
fn remove_shrinks_only_when_present(xs: Vec<i8>, x: i8) -> bool {
    let tree = build(&xs);
    let removed = tree.remove(&x);

    if tree.contains(&x) {
        removed.size() == tree.size() - 1
    } else {
        removed.size() == tree.size()
    }
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let tree = removes.iter().fold(build(&xs), |tree, x| tree.remove(x));
    let list = tree.to_list();

    list.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn every_node_is_balanced(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for x in &removes {
        tree = tree.remove(x);
        if !tree.as_option().map_or(true, Tree::is_balanced) {
            return false;
        }
    }
    tree.as_option().map_or(true, Tree::is_balanced)
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, x: i8) -> TestResult {
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let tree = build(&xs);
    let round_tripped = Nullable::new(tree.insert(x)).remove(&x);

    TestResult::from_bool(round_tripped.to_list() == tree.to_list() && !round_tripped.contains(&x))
}

#[quickcheck]
fn equal_regardless_of_insertion_order(xs: Vec<i8>) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut reordered = xs.clone();
    reordered.reverse();
    reordered.rotate_left(xs.len() / 2);

    let a = build(&xs);
    let b = build(&reordered);
    let extra = Nullable::new(b.insert(0));

    TestResult::from_bool(a == b && a != extra)
}

#[quickcheck]
fn iterator_matches_list(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let list = tree.to_list();

    tree.iter().copied().eq(list.iter().copied())
        && tree.iter().rev().copied().eq(list.iter().rev().copied())
        && tree.iter().len() == list.len()
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> TestResult {
    let tree = build(&xs);
    match tree.as_option() {
        None => TestResult::discard(),
        Some(tree) => TestResult::from_bool(
            Some(tree.min()) == xs.iter().min() && Some(tree.max()) == xs.iter().max(),
        ),
    }
}
