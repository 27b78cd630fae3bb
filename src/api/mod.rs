mod sequence_trait;
mod persistent_sequence_trait;
mod sequence_edit;

pub use self::sequence_trait::*;
pub use self::persistent_sequence_trait::*;
pub use self::sequence_edit::*;
