use super::node::*;

use std::ops::{Range};

///
/// Iterator that reads the fragments of a sequence tree from left to right
///
/// The traversal keeps its own stack, so very deep trees can be read without recursing.
///
pub struct RopeChunks<'a> {
    /// Nodes still to be visited, with the next node on top
    pub (super) stack: Vec<&'a RopeNode>,

    /// The part of the first leaf that's in range, if the iterator starts partway through a leaf
    pub (super) first: Option<&'a [u8]>,

    /// The remaining number of cells to read from this iterator
    pub (super) remaining_cells: usize
}

impl<'a> RopeChunks<'a> {
    ///
    /// Creates an iterator over every fragment underneath a node
    ///
    pub (crate) fn new(root: &'a RopeNode) -> RopeChunks<'a> {
        RopeChunks {
            stack:              vec![root],
            first:              None,
            remaining_cells:    root.len()
        }
    }

    ///
    /// Creates an iterator over the fragments covering a range of cells. The range is clipped to the length of the node.
    ///
    pub (crate) fn with_range(root: &'a RopeNode, range: Range<usize>) -> RopeChunks<'a> {
        let end             = range.end.min(root.len());
        let start           = range.start.min(end);

        // Descend to the leaf containing the start of the range, remembering the right-hand subtrees we skip over
        let mut stack       = vec![];
        let mut node        = root;
        let mut skip        = start;

        while let RopeNode::Branch(branch) = node {
            let left_len = branch.left().len();

            if skip < left_len {
                stack.push(&**branch.right());
                node = &**branch.left();
            } else {
                skip -= left_len;
                node = &**branch.right();
            }
        }

        let first = node.fragment().map(|fragment| &fragment[skip.min(fragment.len())..]);

        RopeChunks {
            stack:              stack,
            first:              first,
            remaining_cells:    end - start
        }
    }

    ///
    /// Clips a fragment to the number of cells remaining in this iterator
    ///
    fn take_cells(&mut self, fragment: &'a [u8]) -> &'a [u8] {
        let len                 = fragment.len().min(self.remaining_cells);
        self.remaining_cells    -= len;

        &fragment[..len]
    }
}

impl<'a> Iterator for RopeChunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.remaining_cells == 0 {
            // No more cells to read
            return None;
        }

        if let Some(first) = self.first.take() {
            if !first.is_empty() {
                return Some(self.take_cells(first));
            }
        }

        while let Some(node) = self.stack.pop() {
            match node {
                RopeNode::Leaf(fragment) => {
                    if !fragment.is_empty() {
                        return Some(self.take_cells(fragment));
                    }
                }

                RopeNode::Branch(branch) => {
                    // Visit the left-hand side first
                    self.stack.push(&**branch.right());
                    self.stack.push(&**branch.left());
                }
            }
        }

        // Overran the end of the rope
        None
    }
}
