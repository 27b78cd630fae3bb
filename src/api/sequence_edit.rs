use std::ops::{Range};

///
/// The editing actions that can be applied to a persistent sequence
///
#[derive(Clone, PartialEq, Debug)]
pub enum SequenceEdit<Seq> {
    /// Inserts a sequence before the cell at the specified position
    Insert(usize, Seq),

    /// Adds a sequence to the end
    Append(Seq),

    /// Keeps only the cells in the specified range
    Retain(Range<usize>)
}
