use super::branch::*;

use bytes::Bytes;

use std::sync::*;

/// The empty leaf shared by every empty tree
static EMPTY_LEAF: OnceLock<Arc<RopeNode>> = OnceLock::new();

///
/// A node in a sequence tree
///
/// Nodes are never modified once they are created: edits build new nodes that refer to the
/// unchanged parts of the original tree.
///
#[derive(Clone)]
pub enum RopeNode {
    /// A leaf node holds a contiguous fragment of the sequence
    Leaf(Bytes),

    /// A branch node represents the concatenation of two subtrees
    Branch(RopeBranch)
}

impl RopeNode {
    ///
    /// Creates a new, empty leaf node
    ///
    pub fn empty() -> Arc<RopeNode> {
        Arc::clone(EMPTY_LEAF.get_or_init(|| Arc::new(RopeNode::Leaf(Bytes::new()))))
    }

    ///
    /// Creates a leaf node from a fragment
    ///
    pub fn leaf(fragment: Bytes) -> Arc<RopeNode> {
        Arc::new(RopeNode::Leaf(fragment))
    }

    ///
    /// Creates a branch node from a left and right subtree
    ///
    /// The caller is responsible for making sure the combined length fits in a `usize`
    ///
    pub (crate) fn branch(left: Arc<RopeNode>, right: Arc<RopeNode>) -> Arc<RopeNode> {
        Arc::new(RopeNode::Branch(RopeBranch::new(left, right)))
    }

    ///
    /// The number of cells stored underneath this node
    ///
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            RopeNode::Leaf(fragment)    => fragment.len(),
            RopeNode::Branch(branch)    => branch.len()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// The number of branches between this node and its deepest leaf
    ///
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            RopeNode::Leaf(_)           => 0,
            RopeNode::Branch(branch)    => branch.depth()
        }
    }

    ///
    /// True if this is a leaf that can be fused with a neighbouring leaf
    ///
    #[inline]
    pub fn is_short_leaf(&self, short_threshold: usize) -> bool {
        match self {
            RopeNode::Leaf(fragment)    => fragment.len() <= short_threshold,
            RopeNode::Branch(_)         => false
        }
    }

    ///
    /// Returns the fragment stored in this node if it's a leaf
    ///
    #[inline]
    pub fn fragment(&self) -> Option<&Bytes> {
        match self {
            RopeNode::Leaf(fragment)    => Some(fragment),
            RopeNode::Branch(_)         => None
        }
    }
}
