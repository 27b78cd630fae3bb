use super::sequence_trait::*;
use super::sequence_edit::*;

use crate::error::*;

///
/// A sequence that is edited by creating new versions of itself
///
/// None of these operations change `self`: every edit returns a new sequence, and the original
/// remains valid and unchanged.
///
pub trait PersistentSequence : Sequence+Sized {
    ///
    /// Returns a sequence made from this one followed by `right`
    ///
    fn concat(&self, right: &Self) -> Self;

    ///
    /// Returns the cells before `pos` and the cells from `pos` onwards
    ///
    fn split(&self, pos: usize) -> Result<(Self, Self)>;

    ///
    /// Returns the `len` cells starting at `start`
    ///
    fn substr(&self, start: usize, len: usize) -> Result<Self>;

    ///
    /// Returns a sequence with `insertion` placed before the cell at `pos`
    ///
    fn insert(&self, pos: usize, insertion: &Self) -> Result<Self>;

    ///
    /// Returns a sequence with `tail` added to the end of this one
    ///
    fn append(&self, tail: &Self) -> Self {
        self.concat(tail)
    }

    ///
    /// Performs the specified editing action, returning the edited sequence
    ///
    fn apply(&self, edit: &SequenceEdit<Self>) -> Result<Self> {
        match edit {
            SequenceEdit::Insert(pos, insertion)    => self.insert(*pos, insertion),
            SequenceEdit::Append(tail)              => Ok(self.append(tail)),
            SequenceEdit::Retain(range)             => {
                if range.start > range.end {
                    return Err(SequenceError::Range { pos: range.start, len: self.len() });
                }

                self.substr(range.start, range.len())
            }
        }
    }
}
