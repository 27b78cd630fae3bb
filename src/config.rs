use crate::rope::*;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Leaves this length or shorter are fused together when concatenated
pub const DEFAULT_SHORT_THRESHOLD: usize = 20;

///
/// Settings shared by a family of sequence trees
///
/// Every tree carries the configuration it was built with. Operations that combine two trees
/// use the configuration of the left-hand tree.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    /// The maximum length of a leaf that can be fused with a neighbouring leaf during concatenation
    pub short_threshold: usize,
}

impl Default for RopeConfig {
    fn default() -> RopeConfig {
        RopeConfig {
            short_threshold: DEFAULT_SHORT_THRESHOLD
        }
    }
}

impl RopeConfig {
    ///
    /// Returns a copy of this configuration with a different short-fragment threshold
    ///
    pub fn with_short_threshold(self, short_threshold: usize) -> RopeConfig {
        RopeConfig { short_threshold, ..self }
    }

    ///
    /// Creates a tree containing a single leaf holding the specified content
    ///
    pub fn build<Content: AsRef<[u8]>>(&self, content: Content) -> SequenceTree {
        SequenceTree::with_config(Bytes::copy_from_slice(content.as_ref()), *self)
    }

    ///
    /// Creates an empty tree in this family
    ///
    pub fn empty(&self) -> SequenceTree {
        SequenceTree::with_config(Bytes::new(), *self)
    }
}
