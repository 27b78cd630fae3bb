use super::node::*;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use std::sync::*;

///
/// Joins two fragments into a single new fragment
///
fn fuse(left: &Bytes, right: &Bytes) -> Bytes {
    let mut fused = BytesMut::with_capacity(left.len() + right.len());
    fused.extend_from_slice(left);
    fused.extend_from_slice(right);

    fused.freeze()
}

///
/// Concatenates two subtrees, merging short leaves so that repeated appends of small fragments
/// don't build long chains of tiny nodes
///
/// Neither input is modified. The combined length must fit in a `usize`: callers with
/// untrusted lengths should check before calling.
///
pub (crate) fn concat_nodes(left: &Arc<RopeNode>, right: &Arc<RopeNode>, short_threshold: usize) -> Arc<RopeNode> {
    // Nothing to join if either side is empty
    if right.is_empty() { return Arc::clone(left); }
    if left.is_empty()  { return Arc::clone(right); }

    match (&**left, &**right) {
        // Two short leaves become a single flat leaf
        (RopeNode::Leaf(left_fragment), RopeNode::Leaf(right_fragment))
            if left.is_short_leaf(short_threshold) && right.is_short_leaf(short_threshold) => {
            trace!(left = left_fragment.len(), right = right_fragment.len(), "Fusing short leaves");

            RopeNode::leaf(fuse(left_fragment, right_fragment))
        }

        // A branch ending in a short leaf absorbs a short leaf on the right
        (RopeNode::Branch(left_branch), RopeNode::Leaf(right_fragment))
            if right.is_short_leaf(short_threshold) => {
            match &**left_branch.right() {
                RopeNode::Leaf(tail) if tail.len() <= short_threshold => {
                    trace!(tail = tail.len(), right = right_fragment.len(), "Fusing short leaf into branch tail");

                    let fused = RopeNode::leaf(fuse(tail, right_fragment));
                    concat_nodes(left_branch.left(), &fused, short_threshold)
                }

                _ => RopeNode::branch(Arc::clone(left), Arc::clone(right))
            }
        }

        // Everything else gets a new branch node that shares both subtrees
        _ => RopeNode::branch(Arc::clone(left), Arc::clone(right))
    }
}
