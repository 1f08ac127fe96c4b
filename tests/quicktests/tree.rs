use ordered_tree::{Traversal, Tree, TreeError};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// removes, and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Copy + Ord + std::fmt::Debug,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(*x) == set.insert(*x),
            Op::Remove(x) => tree.remove(x) == set.remove(x),
            Op::Rebalance => {
                tree.rebalance();
                tree.is_balanced()
            }
        };
        if !agrees {
            return false;
        }
    }

    true
}

fn sorted(mut values: Vec<i16>) -> Vec<i16> {
    values.sort_unstable();
    values
}

#[quickcheck]
fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(xs.iter().copied());
    let mut set: BTreeSet<_> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.in_order() == set.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn built_tree_is_sorted_and_balanced(xs: Vec<i16>) -> bool {
    let tree = Tree::new(xs.iter().copied());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.in_order() == expected && tree.is_balanced()
}

#[quickcheck]
fn insert_then_find(xs: Vec<i16>, x: i16) -> bool {
    let mut tree = Tree::new(xs.iter().copied());
    let inserted = tree.insert(x);

    inserted != xs.contains(&x) && matches!(tree.find(&x), Ok(Some(node)) if *node.value() == x)
}

#[quickcheck]
fn remove_then_find(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs.iter().copied());
    for delete in &deletes {
        tree.remove(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

    deletes
        .iter()
        .all(|x| matches!(tree.find(x), Ok(None) | Err(TreeError::EmptyTree)))
        && still_present.iter().all(|x| tree.contains(*x))
        && tree.is_empty() == still_present.is_empty()
}

#[quickcheck]
fn rebalance_preserves_values(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs);
    for x in inserts {
        tree.insert(x);
    }
    let before = tree.in_order();

    tree.rebalance();
    let once = tree.in_order();
    let once_shape = tree.pre_order();

    tree.rebalance();

    tree.is_balanced() && once == before && tree.in_order() == before && tree.pre_order() == once_shape
}

#[quickcheck]
fn traversals_hold_same_values(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs);
    for x in inserts {
        tree.insert(x);
    }
    if tree.is_empty() {
        return tree.level_order() == Err(TreeError::EmptyTree);
    }

    let in_order = tree.in_order();
    [Traversal::PreOrder, Traversal::PostOrder, Traversal::LevelOrder]
        .iter()
        .all(|order| tree.values(*order).map(sorted).as_ref() == Ok(&in_order))
}

#[quickcheck]
fn every_node_has_a_depth(xs: Vec<i16>) -> bool {
    let tree = Tree::new(xs);
    let height = tree.height();
    let mut ok = true;
    tree.pre_order_with(|node| match tree.depth(node) {
        Ok(depth) => ok &= (depth as isize) <= height,
        Err(_) => ok = false,
    });

    ok
}
