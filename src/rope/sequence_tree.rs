use super::node::*;
use super::concat::*;
use super::split::*;
use super::substr::*;
use super::rope_iterator::*;

use crate::config::*;
use crate::error::*;

use bytes::Bytes;
use tracing::debug;

use std::sync::*;
use std::ops::{Range};

///
/// A persistent sequence tree (rope)
///
/// A `SequenceTree` is a cheap handle onto an immutable tree of fragments. Editing operations
/// never change an existing tree: they return a new tree which shares every subtree it didn't
/// need to change with the tree (or trees) it was made from. Cloning a tree only clones the
/// handle, and the nodes are freed when the last tree referring to them is dropped.
///
/// ```
/// use flo_seq_rope::*;
///
/// let tree    = SequenceTree::build("The quick dog");
/// let edited  = tree.insert(10, &SequenceTree::build("brown ")).unwrap();
///
/// assert!(edited.to_text() == "The quick brown dog");
/// assert!(tree.to_text() == "The quick dog");
/// ```
///
#[derive(Clone)]
pub struct SequenceTree {
    /// The root node of this tree
    pub (super) root: Arc<RopeNode>,

    /// The configuration for the family of trees this belongs to
    pub (super) config: RopeConfig
}

impl SequenceTree {
    ///
    /// Creates a new, empty tree using the default configuration
    ///
    pub fn new() -> SequenceTree {
        RopeConfig::default().empty()
    }

    ///
    /// Creates a tree made up of a single leaf containing the specified text, using the default configuration
    ///
    pub fn build<Content: AsRef<[u8]>>(content: Content) -> SequenceTree {
        RopeConfig::default().build(content)
    }

    ///
    /// Creates a single-leaf tree with a specific configuration
    ///
    pub fn with_config(fragment: Bytes, config: RopeConfig) -> SequenceTree {
        SequenceTree {
            root:   RopeNode::leaf(fragment),
            config: config
        }
    }

    ///
    /// Creates a tree in the same family as this one from a root node
    ///
    fn with_root(&self, root: Arc<RopeNode>) -> SequenceTree {
        SequenceTree {
            root:   root,
            config: self.config
        }
    }

    ///
    /// The configuration that this tree uses when it's combined with other trees
    ///
    #[inline]
    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    ///
    /// The root node of this tree
    ///
    #[inline]
    pub fn root(&self) -> &Arc<RopeNode> {
        &self.root
    }

    ///
    /// Returns the number of cells in this tree. The length is cached on every node so this is O(1)
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    ///
    /// The number of branches between the root and the deepest leaf (0 for a tree that's a single leaf)
    ///
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(&*self.root, RopeNode::Leaf(_))
    }

    ///
    /// If this tree is a concatenation, returns the left-hand subtree
    ///
    pub fn left(&self) -> Option<SequenceTree> {
        match &*self.root {
            RopeNode::Branch(branch)    => Some(self.with_root(Arc::clone(branch.left()))),
            RopeNode::Leaf(_)           => None
        }
    }

    ///
    /// If this tree is a concatenation, returns the right-hand subtree
    ///
    pub fn right(&self) -> Option<SequenceTree> {
        match &*self.root {
            RopeNode::Branch(branch)    => Some(self.with_root(Arc::clone(branch.right()))),
            RopeNode::Leaf(_)           => None
        }
    }

    ///
    /// Counts the non-empty leaves in this tree
    ///
    pub fn leaf_count(&self) -> usize {
        self.chunks().count()
    }

    ///
    /// Reads the cell at the specified position, if it's in the tree
    ///
    pub fn get(&self, pos: usize) -> Option<u8> {
        if pos >= self.len() { return None; }

        let mut node    = &*self.root;
        let mut offset  = pos;

        while let RopeNode::Branch(branch) = node {
            let left_len = branch.left().len();

            if offset < left_len {
                node = &**branch.left();
            } else {
                offset  -= left_len;
                node    = &**branch.right();
            }
        }

        node.fragment().and_then(|fragment| fragment.get(offset).copied())
    }

    ///
    /// Concatenates two trees, returning an error instead of a tree if the combined length would overflow
    ///
    pub fn try_concat(&self, right: &SequenceTree) -> Result<SequenceTree> {
        if self.len().checked_add(right.len()).is_none() {
            return Err(SequenceError::CapacityOverflow { left: self.len(), right: right.len() });
        }

        Ok(self.with_root(concat_nodes(&self.root, &right.root, self.config.short_threshold)))
    }

    ///
    /// Concatenates two trees. Neither tree is changed: the result shares their subtrees.
    ///
    /// Short leaves at the join are fused into a single leaf, so appending small fragments one at a time
    /// doesn't produce a long chain of tiny nodes.
    ///
    /// # Panics
    ///
    /// Panics if the combined length exceeds `usize::MAX`. Use `try_concat` to handle that case.
    ///
    pub fn concat(&self, right: &SequenceTree) -> SequenceTree {
        match self.try_concat(right) {
            Ok(tree)    => tree,
            Err(err)    => panic!("{}", err)
        }
    }

    ///
    /// Appends a tree to the end of this one (the same as `concat`)
    ///
    #[inline]
    pub fn append(&self, tail: &SequenceTree) -> SequenceTree {
        self.concat(tail)
    }

    ///
    /// Appends a tree to the end of this one, failing if the combined length would overflow
    ///
    #[inline]
    pub fn try_append(&self, tail: &SequenceTree) -> Result<SequenceTree> {
        self.try_concat(tail)
    }

    ///
    /// Splits this tree into the cells before `pos` and the cells from `pos` onwards
    ///
    pub fn split(&self, pos: usize) -> Result<(SequenceTree, SequenceTree)> {
        self.check_pos(pos)?;

        let (left, right) = split_node(&self.root, pos, self.config.short_threshold);
        Ok((self.with_root(left), self.with_root(right)))
    }

    ///
    /// Returns a tree containing `len` cells starting at `start`
    ///
    pub fn substr(&self, start: usize, len: usize) -> Result<SequenceTree> {
        let end = start.checked_add(len);

        if start > self.len() || end.map(|end| end > self.len()).unwrap_or(true) {
            debug!(start, count = len, len = self.len(), "Substring out of range");
            return Err(SequenceError::SubstrRange { start, count: len, len: self.len() });
        }

        Ok(self.with_root(substr_node(&self.root, start, len, self.config.short_threshold)))
    }

    ///
    /// Inserts a tree at the specified position, returning the new tree
    ///
    pub fn insert(&self, pos: usize, insertion: &SequenceTree) -> Result<SequenceTree> {
        let (left, right) = self.split(pos)?;

        left.try_concat(insertion)?.try_concat(&right)
    }

    ///
    /// Iterates over the fragments of this tree in order
    ///
    pub fn chunks<'a>(&'a self) -> RopeChunks<'a> {
        RopeChunks::new(&self.root)
    }

    ///
    /// Iterates over the parts of the fragments that cover a range of cells. The range is clipped to the length of the tree.
    ///
    pub fn chunks_in_range<'a>(&'a self, range: Range<usize>) -> RopeChunks<'a> {
        RopeChunks::with_range(&self.root, range)
    }

    ///
    /// Iterates over the cells of this tree in order
    ///
    pub fn bytes<'a>(&'a self) -> impl 'a+Iterator<Item=u8> {
        self.chunks().flat_map(|chunk| chunk.iter().copied())
    }

    ///
    /// Copies the content of this tree into a single vector
    ///
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.len());
        self.chunks().for_each(|chunk| result.extend_from_slice(chunk));

        result
    }

    ///
    /// Converts this tree to a string. Invalid UTF-8 sequences are replaced with the replacement character.
    ///
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into()
    }

    ///
    /// Returns an error if a position is past the end of this tree
    ///
    fn check_pos(&self, pos: usize) -> Result<()> {
        if pos > self.len() {
            debug!(pos, len = self.len(), "Position out of range");
            Err(SequenceError::Range { pos, len: self.len() })
        } else {
            Ok(())
        }
    }
}
