#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary tree in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Add a left leaf under the n-th live position
    AddLeft(usize, i8),
    /// Add a right leaf under the n-th live position
    AddRight(usize, i8),
    /// Remove the n-th live position
    Remove(usize),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::AddLeft(usize::arbitrary(g), i8::arbitrary(g)),
            1 => Op::AddRight(usize::arbitrary(g), i8::arbitrary(g)),
            2 => Op::Remove(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
