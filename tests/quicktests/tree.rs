use keytree::{Error, Tree};

use std::collections::HashSet;

use crate::{Op, Record};

/// Gives every key its own record, numbered by position.
fn records(keys: &[i8]) -> Vec<Record> {
    keys.iter()
        .enumerate()
        .map(|(id, &key)| Record { key, id: id as u16 })
        .collect()
}

fn sorted_keys<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<i8> {
    let mut keys: Vec<_> = records.into_iter().map(|r| r.key).collect();
    keys.sort_unstable();
    keys
}

/// Applies a set of operations to a tree and to a plain list of records.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same records as the model.
fn do_ops(ops: &[Op], tree: &mut Tree<Record>, model: &mut Vec<Record>) -> bool {
    for (id, op) in ops.iter().enumerate() {
        match *op {
            Op::Insert(key) => {
                let record = Record { key, id: id as u16 };
                tree.insert(record);
                model.push(record);
            }
            Op::Remove(key) => match tree.remove(key.into()) {
                Ok(None) => {
                    if !model.is_empty() {
                        return false;
                    }
                }
                Ok(Some(removed)) => match model.iter().position(|r| *r == removed) {
                    Some(pos) if removed.key == key => {
                        model.swap_remove(pos);
                    }
                    _ => return false,
                },
                Err(Error::NotFound { key: missing }) => {
                    if missing != i64::from(key) || model.iter().any(|r| r.key == key) {
                        return false;
                    }
                }
                Err(_) => return false,
            },
            Op::Iter => {
                let in_order: Vec<_> = tree.iter().map(|r| r.key).collect();
                if in_order != sorted_keys(model.iter()) {
                    return false;
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.len() == model.len()
        && tree.is_empty() == model.is_empty()
        && model.iter().all(|r| tree.contains(r.key.into()))
}

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    for k in removes {
        let _ = tree.remove(k.into());
    }

    let keys: Vec<_> = tree.iter().collect();
    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let inserted = records(&xs);
    let tree: Tree<Record> = inserted.iter().copied().collect();

    // The first record inserted with a key is the one closest to the root.
    inserted.iter().all(|r| {
        let first = inserted.iter().find(|other| other.key == r.key);
        tree.find(r.key.into()) == first
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find((*x).into()).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove((*delete).into());
        match still_present.iter().position(|x| x == delete) {
            // Only one copy of a duplicated key goes per call.
            Some(pos) => {
                if removed != Ok(Some(*delete)) {
                    return false;
                }
                still_present.swap_remove(pos);
            }
            None if still_present.is_empty() => {
                if removed != Ok(None) {
                    return false;
                }
            }
            None => {
                if removed != Err(Error::NotFound { key: (*delete).into() }) {
                    return false;
                }
            }
        }
    }

    deletes
        .iter()
        .filter(|x| !still_present.contains(*x))
        .all(|x| tree.find((*x).into()).is_none())
        && still_present.iter().all(|x| tree.find((*x).into()).is_some())
}

#[quickcheck]
fn minimum_and_maximum_bound_every_key(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    match (tree.minimum(), tree.maximum()) {
        (None, None) => xs.is_empty(),
        (Some(min), Some(max)) => tree.iter().all(|x| min <= x && x <= max),
        _ => false,
    }
}

#[quickcheck]
fn post_order_ends_at_root(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    let mut seen = Vec::new();
    tree.post_order(|x| seen.push(*x));
    seen.last() == xs.first() && sorted(seen) == sorted(xs)
}

#[quickcheck]
fn clone_is_equal_and_independent(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut cloned = tree.clone();
    let equal = cloned == tree;

    match xs.first() {
        Some(first) => {
            let _ = cloned.remove((*first).into());
            equal && cloned.len() + 1 == tree.len()
        }
        None => equal,
    }
}

fn sorted(mut xs: Vec<i8>) -> Vec<i8> {
    xs.sort_unstable();
    xs
}

#[test]
fn worked_examples() {
    let mut tree: Tree<i32> = [50, 75, 57, 54, 25, 5, 15].into_iter().collect();
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [5, 15, 25, 50, 54, 57, 75]
    );
    tree.insert(80);
    assert_eq!(tree.maximum(), Some(&80));

    let mut tree: Tree<i32> = [55, 60, 10, 15, 5, 12, 13, 70].into_iter().collect();
    assert_eq!(tree.remove(55), Ok(Some(55)));
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [5, 10, 12, 13, 15, 60, 70]
    );
    assert_eq!(tree.post_order_iter().last(), Some(&60));

    let mut empty: Tree<i32> = Tree::new();
    assert_eq!(empty.remove(7), Ok(None));
    assert!(empty.is_empty());

    let mut tree: Tree<i32> = [55, 70, 30].into_iter().collect();
    let before = tree.clone();
    assert_eq!(tree.remove(50), Err(Error::NotFound { key: 50 }));
    assert_eq!(tree, before);
}
