use super::node::*;

use std::mem;
use std::sync::*;

///
/// Represents a branch in a sequence tree
///
#[derive(Clone)]
pub struct RopeBranch {
    /// The left-hand side of the rope (first part of the sequence)
    left: Arc<RopeNode>,

    /// The right-hand side of the rope
    right: Arc<RopeNode>,

    /// The total length of all the fragments under this branch
    length: usize,

    /// The depth of the deepest leaf under this branch
    depth: usize
}

impl RopeBranch {
    ///
    /// Creates a branch joining two subtrees, caching their combined length and depth
    ///
    /// The combined length of the two subtrees must fit in a `usize`
    ///
    pub (crate) fn new(left: Arc<RopeNode>, right: Arc<RopeNode>) -> RopeBranch {
        let length  = left.len() + right.len();
        let depth   = left.depth().max(right.depth()) + 1;

        RopeBranch { left, right, length, depth }
    }

    #[inline] pub fn left(&self) -> &Arc<RopeNode> { &self.left }
    #[inline] pub fn right(&self) -> &Arc<RopeNode> { &self.right }
    #[inline] pub fn len(&self) -> usize { self.length }
    #[inline] pub fn depth(&self) -> usize { self.depth }

    ///
    /// Replaces both children with the shared empty leaf, returning the original children
    ///
    fn take_children(&mut self) -> [Arc<RopeNode>; 2] {
        [mem::replace(&mut self.left, RopeNode::empty()), mem::replace(&mut self.right, RopeNode::empty())]
    }
}

impl Drop for RopeBranch {
    fn drop(&mut self) {
        // Branches whose children are both leaves can be freed the usual way
        if matches!(*self.left, RopeNode::Leaf(_)) && matches!(*self.right, RopeNode::Leaf(_)) {
            return;
        }

        // Dropping the children directly recurses once per level of the tree, so unwind the tree with an explicit stack
        let mut unreferenced = Vec::from(self.take_children());

        while let Some(node) = unreferenced.pop() {
            // Subtrees that are still part of another tree stay alive
            if let Some(RopeNode::Branch(mut branch)) = Arc::into_inner(node) {
                unreferenced.extend(branch.take_children());
            }
        }
    }
}
