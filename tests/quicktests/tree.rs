use ordered_tree::tree::OrderedTree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a plain `Vec` standing in for a multiset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same keys, with the same multiplicities, in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut OrderedTree<K>, keys: &mut Vec<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                keys.push(k.clone());
            }
            Op::Remove(k) => {
                let removed = bst.remove(k);
                match keys.iter().position(|x| x == k) {
                    Some(pos) => {
                        keys.swap_remove(pos);
                        assert!(removed);
                    }
                    None => assert!(!removed),
                }
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut keys = Vec::new();

        do_ops(&ops, &mut tree, &mut keys);
        keys.sort_unstable();

        tree.len() == keys.len() && tree.in_order().into_iter().copied().eq(keys)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove(delete) {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn missing_remove_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before: Vec<i8> = tree.traversal().iter().map(|n| *n.key()).collect();

        !tree.remove(&missing)
            && tree.traversal().iter().map(|n| *n.key()).eq(before)
    }
}

quickcheck::quickcheck! {
    fn pre_order_starts_at_root(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        tree.traversal().first().map(|n| n.key()) == xs.first()
            && tree.traversal().len() == xs.len()
    }
}
