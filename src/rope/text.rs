use super::node::*;
use super::sequence_tree::*;

use crate::config::*;

use bytes::Bytes;

use std::fmt;

impl From<Bytes> for SequenceTree {
    ///
    /// Creates a tree from a fragment without copying it
    ///
    fn from(fragment: Bytes) -> SequenceTree {
        SequenceTree::with_config(fragment, RopeConfig::default())
    }
}

impl From<Vec<u8>> for SequenceTree {
    fn from(cells: Vec<u8>) -> SequenceTree {
        SequenceTree::from(Bytes::from(cells))
    }
}

impl From<String> for SequenceTree {
    fn from(text: String) -> SequenceTree {
        SequenceTree::from(Bytes::from(text))
    }
}

impl<'a> From<&'a [u8]> for SequenceTree {
    fn from(cells: &'a [u8]) -> SequenceTree {
        SequenceTree::build(cells)
    }
}

impl<'a> From<&'a str> for SequenceTree {
    fn from(text: &'a str) -> SequenceTree {
        SequenceTree::build(text)
    }
}

impl fmt::Display for SequenceTree {
    ///
    /// Writes out the content of this tree as text
    ///
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Characters can straddle fragment boundaries, so decode the whole sequence at once
        f.write_str(&self.to_text())
    }
}

///
/// A step in writing out the structure of a tree
///
enum StructureStep<'a> {
    /// Write out a node
    Node(&'a RopeNode),

    /// Close a branch with the specified length
    Close(usize)
}

///
/// Writes out the structure of a node: leaves are written as `[fragment]`, and branches
/// as `{left right}<length>`
///
fn write_structure(node: &RopeNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Deep trees are common, so this works through an explicit stack instead of recursing
    let mut steps = vec![StructureStep::Node(node)];

    while let Some(step) = steps.pop() {
        match step {
            StructureStep::Node(RopeNode::Leaf(fragment)) => {
                write!(f, "[{}]", fragment.escape_ascii())?;
            }

            StructureStep::Node(RopeNode::Branch(branch)) => {
                f.write_str("{")?;

                steps.push(StructureStep::Close(branch.len()));
                steps.push(StructureStep::Node(branch.right()));
                steps.push(StructureStep::Node(branch.left()));
            }

            StructureStep::Close(length) => {
                write!(f, "}}<{}>", length)?;
            }
        }
    }

    Ok(())
}

impl fmt::Debug for RopeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_structure(self, f)
    }
}

impl fmt::Debug for SequenceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_structure(&self.root, f)
    }
}
