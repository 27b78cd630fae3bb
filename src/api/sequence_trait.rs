use std::ops::{Range};

///
/// Represents a read-only sequence of cells
///
pub trait Sequence {
    /// A 'cell' in the sequence. For a DNA or UTF-8 sequence this is `u8`
    type Cell: Clone;

    ///
    /// Returns the number of cells in this sequence
    ///
    fn len(&self) -> usize;

    ///
    /// True if this sequence has no cells
    ///
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Reads the cell values for a range in this sequence. The range is clipped to the length of the sequence.
    ///
    fn read_cells<'a>(&'a self, range: Range<usize>) -> Box<dyn 'a+Iterator<Item=&'a Self::Cell>>;
}
