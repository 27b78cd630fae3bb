use super::sequence_tree::*;

use crate::api::*;
use crate::error::*;

use std::iter;
use std::ops::{Add, AddAssign, Range};

impl Default for SequenceTree {
    fn default() -> SequenceTree {
        SequenceTree::new()
    }
}

impl PartialEq for SequenceTree {
    ///
    /// Trees are equal if they have the same content, whatever their shape
    ///
    fn eq(&self, other: &SequenceTree) -> bool {
        self.len() == other.len() && self.bytes().eq(other.bytes())
    }
}

impl Eq for SequenceTree { }

impl Sequence for SequenceTree {
    type Cell = u8;

    #[inline]
    fn len(&self) -> usize {
        SequenceTree::len(self)
    }

    fn read_cells<'a>(&'a self, range: Range<usize>) -> Box<dyn 'a+Iterator<Item=&'a u8>> {
        Box::new(self.chunks_in_range(range).flat_map(|chunk| chunk.iter()))
    }
}

impl PersistentSequence for SequenceTree {
    #[inline]
    fn concat(&self, right: &SequenceTree) -> SequenceTree {
        SequenceTree::concat(self, right)
    }

    #[inline]
    fn split(&self, pos: usize) -> Result<(SequenceTree, SequenceTree)> {
        SequenceTree::split(self, pos)
    }

    #[inline]
    fn substr(&self, start: usize, len: usize) -> Result<SequenceTree> {
        SequenceTree::substr(self, start, len)
    }

    #[inline]
    fn insert(&self, pos: usize, insertion: &SequenceTree) -> Result<SequenceTree> {
        SequenceTree::insert(self, pos, insertion)
    }
}

// Operator forms of concatenation

impl<'a> Add<&'a SequenceTree> for &'a SequenceTree {
    type Output = SequenceTree;

    fn add(self, right: &'a SequenceTree) -> SequenceTree {
        self.concat(right)
    }
}

impl Add for SequenceTree {
    type Output = SequenceTree;

    fn add(self, right: SequenceTree) -> SequenceTree {
        self.concat(&right)
    }
}

impl AddAssign for SequenceTree {
    fn add_assign(&mut self, other: SequenceTree) {
        *self = self.concat(&other);
    }
}

impl<'a> AddAssign<&'a SequenceTree> for SequenceTree {
    fn add_assign(&mut self, other: &'a SequenceTree) {
        *self = self.concat(other);
    }
}

impl Extend<SequenceTree> for SequenceTree {
    fn extend<I: IntoIterator<Item=SequenceTree>>(&mut self, iter: I) {
        for tree in iter {
            *self += tree;
        }
    }
}

impl<'a> Extend<&'a SequenceTree> for SequenceTree {
    fn extend<I: IntoIterator<Item=&'a SequenceTree>>(&mut self, iter: I) {
        for tree in iter {
            *self += tree;
        }
    }
}

impl iter::FromIterator<SequenceTree> for SequenceTree {
    ///
    /// Concatenates a series of trees from left to right. The result uses the configuration of the first tree.
    ///
    fn from_iter<I: IntoIterator<Item=SequenceTree>>(iter: I) -> SequenceTree {
        let mut iter = iter.into_iter();

        match iter.next() {
            Some(mut first) => {
                first.extend(iter);
                first
            }

            None => SequenceTree::new()
        }
    }
}
