//! Error taxonomy for sequence operations.
//!
//! Every variant is a local, caller-recoverable condition. Operations signal
//! at the point of violation and perform no partial mutation beforehand: a
//! failed call leaves the sequence exactly as it was.

/// Errors produced by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An indexed read, write, or removal outside the valid range.
    ///
    /// Valid positions for a sequence of length `n` are `0..n`, or `-n..0`
    /// when counting from the end (`-1` is the last element).
    #[error("index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    /// A removal or search by value found no equal element.
    #[error("value not found in sequence")]
    ValueNotFound,

    /// A sort was requested over elements that admit no total order
    /// (e.g. floating-point NaN) and no comparator was supplied.
    #[error("elements are not mutually comparable")]
    Incomparable,

    /// A deep copy encountered a self-referential structure.
    /// Cyclic deep copy is unsupported.
    #[error("cycle detected while deep-copying a self-referential structure")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, Error>;
