use super::node::*;
use super::split::*;
use super::concat::*;

use std::sync::*;

///
/// Extracts the cells in `start..(start+len)` from a subtree
///
/// Only the subtrees that overlap the range are visited, so nothing is built for the parts of
/// the tree that are discarded.
///
pub (crate) fn substr_node(node: &Arc<RopeNode>, start: usize, len: usize, short_threshold: usize) -> Arc<RopeNode> {
    debug_assert!(start + len <= node.len());

    let mut node    = node;
    let mut start   = start;

    // Descend while the range is inside a single child
    loop {
        if len == 0                             { return RopeNode::empty(); }
        if start == 0 && len == node.len()      { return Arc::clone(node); }

        match &**node {
            RopeNode::Leaf(fragment) => return RopeNode::leaf(fragment.slice(start..(start+len))),

            RopeNode::Branch(branch) => {
                let left_len    = branch.left().len();
                let end         = start + len;

                if end <= left_len {
                    node = branch.left();
                } else if start >= left_len {
                    start   -= left_len;
                    node    = branch.right();
                } else {
                    // Range spans both children: take the tail of the left and the head of the right
                    let left    = suffix_node(branch.left(), start, short_threshold);
                    let right   = prefix_node(branch.right(), end - left_len, short_threshold);

                    return concat_nodes(&left, &right, short_threshold);
                }
            }
        }
    }
}
