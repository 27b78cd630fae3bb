mod node;
mod branch;
mod concat;
mod split;
mod substr;
mod sequence_tree;
mod rope_iterator;
mod rope_extensions;
mod text;
#[cfg(test)] mod property_tests;

pub use self::node::*;
pub use self::branch::*;
pub use self::sequence_tree::*;
pub use self::rope_iterator::*;
