//! `reflist` - an ordered, duplicate-permitting sequence with reference semantics.
//!
//! The crate revolves around a single type, [`sequence::Sequence`]: a resizable,
//! index-addressable container whose elements live in shared cells. See the
//! `Sequence` documentation for the full model (aliasing vs. shallow copy vs.
//! deep copy, reactive vs. non-reactive operations).

pub mod error;
pub mod sequence;

pub use error::{Error, Result};

use crate::sequence::element::Element;

/// ### -> `Candidate<T>`
///
/// The value form accepted by every inserting operation (`append`, `insert`,
/// `set`).
///
/// - `Candidate::Value(T)` allocates a fresh cell for the value. The new slot
///   is not aliased by any other sequence.
/// - `Candidate::Element(Element<T>)` reuses an existing cell, typically one
///   obtained from `get` or `pop` on another sequence. The slot then aliases
///   that cell: writes through either side are visible through both.
///
/// ### -> `Usage`
///
/// ```
/// use reflist::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let left = Sequence::<i32>::from_values([1, 2, 3]);
///     let right = Sequence::<i32>::allocate(1);
///
///     // Move a shared handle of left[0] into right.
///     let head = left.get(0)?;
///     right.append(Candidate::Element(head));
///
///     // Writing through the cell is visible in both sequences.
///     left.modify(0, 99)?;
///     assert_eq!(right.get(0)?.value(), 99);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub enum Candidate<T> {
    /// A plain value. Inserting it allocates a fresh, unshared cell.
    Value(T),
    /// A handle to an existing cell. Inserting it shares the cell.
    Element(Element<T>),
}

impl<T> Candidate<T> {
    pub(crate) fn into_cell(self) -> std::rc::Rc<std::cell::RefCell<T>> {
        match self {
            Candidate::Value(value) => std::rc::Rc::new(std::cell::RefCell::new(value)),
            Candidate::Element(element) => element.cell(),
        }
    }
}

/// ### -> `BincodeConfiguration`
///
/// Knobs for the `Bincode` trait (requires the `serde` feature). The codec
/// operates on a value snapshot of the sequence, so cell sharing is not
/// preserved across a serialize/deserialize round trip.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default)]
pub struct BincodeConfiguration {
    /// Upper bound, in bytes, that the codec may read or write.
    /// `None` means unlimited.
    pub byte_limit: Option<u64>,
}
