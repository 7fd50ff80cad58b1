#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// A payload with an explicit identity so tests can tell apart records that share a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record {
    key: i8,
    id: u16,
}

impl keytree::Keyed for Record {
    fn key(&self) -> i64 {
        self.key.into()
    }
}

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert a record with this key
    Insert(i8),
    /// Remove a record with this key
    Remove(i8),
    /// Compare in-order iteration with the model
    Iter,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]) {
            Some(0) => Op::Insert(i8::arbitrary(g)),
            Some(1) => Op::Remove(i8::arbitrary(g)),
            _ => Op::Iter,
        }
    }
}
