use super::node::*;
use super::branch::*;
use super::concat::*;

use std::sync::*;

///
/// The route from a node down to the point where it's cut in two
///
struct Cut<'a> {
    /// The branches passed on the way down, and whether the cut is in their left-hand child
    path: Vec<(&'a RopeBranch, bool)>,

    /// The cells before the cut in the node where the descent stopped
    before: Arc<RopeNode>,

    /// The cells from the cut onwards in the node where the descent stopped
    after: Arc<RopeNode>
}

///
/// Walks down from a node to the position `pos`, stopping as soon as the cut falls on a node boundary
///
/// This keeps its own path rather than recursing, as trees built by appending can be very deep.
///
fn find_cut<'a>(node: &'a Arc<RopeNode>, pos: usize) -> Cut<'a> {
    let mut path    = vec![];
    let mut node    = node;
    let mut offset  = pos;

    loop {
        // Cutting at either end of a node leaves it unchanged
        if offset == 0          { return Cut { path, before: RopeNode::empty(), after: Arc::clone(node) }; }
        if offset >= node.len() { return Cut { path, before: Arc::clone(node), after: RopeNode::empty() }; }

        match &**node {
            RopeNode::Leaf(fragment) => {
                // Both halves share the original fragment's storage
                return Cut { path, before: RopeNode::leaf(fragment.slice(..offset)), after: RopeNode::leaf(fragment.slice(offset..)) };
            }

            RopeNode::Branch(branch) => {
                let left_len = branch.left().len();

                if offset < left_len {
                    path.push((branch, true));
                    node = branch.left();
                } else {
                    path.push((branch, false));
                    offset  -= left_len;
                    node    = branch.right();
                }
            }
        }
    }
}

///
/// Splits a subtree into the cells before `pos` and the cells from `pos` onwards
///
/// `pos` must be no greater than the length of the node. Subtrees that lie entirely on one
/// side of the split point are shared with the original tree rather than copied.
///
pub (crate) fn split_node(node: &Arc<RopeNode>, pos: usize, short_threshold: usize) -> (Arc<RopeNode>, Arc<RopeNode>) {
    debug_assert!(pos <= node.len());

    let Cut { path, mut before, mut after } = find_cut(node, pos);

    // Graft the siblings passed on the way down back on to the side they belong to
    for (branch, cut_left) in path.into_iter().rev() {
        if cut_left {
            after   = concat_nodes(&after, branch.right(), short_threshold);
        } else {
            before  = concat_nodes(branch.left(), &before, short_threshold);
        }
    }

    (before, after)
}

///
/// Returns the cells before `pos` in a subtree, without building the part after it
///
pub (crate) fn prefix_node(node: &Arc<RopeNode>, pos: usize, short_threshold: usize) -> Arc<RopeNode> {
    debug_assert!(pos <= node.len());

    let Cut { path, mut before, .. } = find_cut(node, pos);

    for (branch, cut_left) in path.into_iter().rev() {
        if !cut_left {
            before = concat_nodes(branch.left(), &before, short_threshold);
        }
    }

    before
}

///
/// Returns the cells from `pos` onwards in a subtree, without building the part before it
///
pub (crate) fn suffix_node(node: &Arc<RopeNode>, pos: usize, short_threshold: usize) -> Arc<RopeNode> {
    debug_assert!(pos <= node.len());

    let Cut { path, mut after, .. } = find_cut(node, pos);

    for (branch, cut_left) in path.into_iter().rev() {
        if cut_left {
            after = concat_nodes(&after, branch.right(), short_threshold);
        }
    }

    after
}
