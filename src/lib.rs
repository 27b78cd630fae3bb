//!
//! `flo_seq_rope` is a persistent implementation of the rope data structure, designed for holding
//! large genetic or text sequences while they're assembled and cut up by a sequence-processing
//! pipeline.
//! 
//! Ropes are an extension of the string type that support efficient manipulation of very large
//! amounts of data. The ropes in this crate are persistent: a tree is never changed once it has
//! been made. Concatenating, splitting, inserting or taking a substring produces a new tree that
//! shares all of the unchanged subtrees of its inputs, so keeping many versions of a sequence
//! around is cheap.
//! 
//!  * Trees cache their length on every node, so `len()` is constant time
//!  * Short fragments are fused as they're concatenated, so a tree built by appending many small
//!    records doesn't turn into a long chain of tiny nodes
//!  * Fragments are reference-counted `Bytes` values: splitting a fragment shares its storage
//!  * Every tree is `Send` and `Sync` and can be read from many threads at once
//! 
//! ## Examples
//! 
//! Taking a substring of a concatenated rope
//! 
//! ```
//! use flo_seq_rope::*;
//! 
//! let first   = SequenceTree::build("The quick brown ");
//! let second  = SequenceTree::build("fox jumps over ");
//! let joined  = first.concat(&second);
//! 
//! assert!(joined.to_text() == "The quick brown fox jumps over ");
//! assert!(joined.substr(4, 5).unwrap().to_text() == "quick");
//! ```
//! 
//! Out of range positions are reported as errors rather than being clipped
//! 
//! ```
//! use flo_seq_rope::*;
//! 
//! let tree = SequenceTree::build("abc");
//! assert!(tree.substr(1, 10).unwrap_err().is_range_error());
//! ```

pub mod api;
pub mod rope;
pub mod config;
pub mod error;

pub use crate::api::*;
pub use crate::rope::*;
pub use crate::config::*;
pub use crate::error::*;
