use std::ops::Range;

use crate::error::Result;
use crate::sequence::deep::DeepClone;
use crate::sequence::element::Element;
use crate::Candidate;

/// ### -> `Length Trait`
///
/// Element counting and length comparison.
pub trait Length {
    /// Number of elements currently held.
    fn length(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.length().cmp(&other.length())
    }
}

/// ### -> `Operation<T> Trait`
///
/// The core positional and value operations of a sequence.
///
/// Every indexed operation accepts negative positions counting from the end
/// (`-1` is the last element). For a sequence of length `n` the valid range
/// is `-n..n`; anything outside fails with `Error::IndexOutOfRange` and the
/// sequence is left unchanged.
///
/// ### -> `Usage`
///
/// ```
/// use reflist::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let fruits = Sequence::from_values(["apple", "banana", "cherry"]);
///
///     assert_eq!(fruits.get(0)?.value(), "apple");
///     assert_eq!(fruits.get(-1)?.value(), "cherry");
///     assert!(fruits.contains(&"banana"));
///
///     fruits.append(Candidate::Value("orange"));
///     fruits.insert(1, Candidate::Value("grape"));
///     fruits.extend(["kiwi", "melon"]);
///     assert_eq!(fruits.length(), 7);
///
///     fruits.remove(&"grape")?;
///     let last = fruits.pop(None)?;
///     assert_eq!(last.value(), "melon");
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Operation<T>: Length {
    /// ### -> `get`
    ///
    /// Returns a handle to the element at `index`.
    ///
    /// The handle shares the slot's cell: writing through it updates the
    /// value seen by this sequence and by every other sequence sharing the
    /// cell.
    ///
    /// Fails with `Error::IndexOutOfRange` if `index` is outside `-n..n`.
    fn get(&self, index: isize) -> Result<Element<T>>;

    /// ### -> `set`
    ///
    /// Rebinds the slot at `index` to `value`, returning a handle to the
    /// displaced element.
    ///
    /// This is a *non-reactive* write: the old cell itself is untouched, so
    /// shallow copies still holding it keep the old value. Use
    /// `Reactive::modify` to write through the cell instead.
    ///
    /// Fails with `Error::IndexOutOfRange` if `index` is outside `-n..n`
    /// (in particular, on an empty sequence).
    fn set(&self, index: isize, value: Candidate<T>) -> Result<Element<T>>;

    /// ### -> `insert`
    ///
    /// Places `value` at `index`, shifting later elements right.
    ///
    /// The index is clamped to `[0, length]` after negative resolution, so
    /// inserting far past the end appends and inserting far before the start
    /// prepends. Never fails.
    fn insert(&self, index: isize, value: Candidate<T>);

    /// ### -> `append`
    ///
    /// Places `value` at the end.
    fn append(&self, value: Candidate<T>);

    /// ### -> `extend`
    ///
    /// Appends every value of `iter` in order. Each value gets a fresh,
    /// unshared cell; see `Reactive::extend_from` to append another
    /// sequence's cells by reference.
    fn extend(&self, iter: impl IntoIterator<Item = T>);

    /// ### -> `remove`
    ///
    /// Removes the first element equal to `value`.
    ///
    /// Fails with `Error::ValueNotFound` if no element compares equal, in
    /// which case the sequence is unchanged.
    fn remove(&self, value: &T) -> Result<()>
    where
        T: PartialEq;

    /// ### -> `pop`
    ///
    /// Removes and returns the element at `index`, defaulting to the last
    /// element when `index` is `None`.
    ///
    /// Fails with `Error::IndexOutOfRange` if the index is invalid or the
    /// sequence is empty.
    fn pop(&self, index: Option<isize>) -> Result<Element<T>>;

    /// ### -> `delete`
    ///
    /// Removes the element at `index` without returning it.
    ///
    /// Fails with `Error::IndexOutOfRange` if the index is invalid.
    fn delete(&self, index: isize) -> Result<()>;

    /// True iff some element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Position of the first element equal to `value`, or
    /// `Error::ValueNotFound`.
    fn index_of(&self, value: &T) -> Result<usize>
    where
        T: PartialEq;

    /// Number of elements equal to `value`.
    fn count(&self, value: &T) -> usize
    where
        T: PartialEq;

    /// Removes every element. Cells shared with other sequences stay alive
    /// there.
    fn clear(&self);
}

/// ### -> `Sort<T> Trait`
///
/// In-place reordering. All methods mutate the receiver and return no value
/// distinct from it - there is no reordered result to capture, which is an
/// easy contract to violate for callers used to copy-returning sorts.
///
/// Only the slot order of *this* sequence changes. Shallow copies keep their
/// own slot order; they observe nothing.
pub trait Sort<T> {
    /// ### -> `sort`
    ///
    /// Stable in-place ascending sort under the natural order of `T`.
    ///
    /// Natural order here means `Ord`: arithmetic ascending for integers,
    /// and for `String`/`&str` lexicographic by Unicode scalar value. The
    /// string rule is fixed by this crate and will not vary with locale.
    fn sort(&self)
    where
        T: Ord;

    /// Stable in-place sort under an explicit comparator.
    fn sort_by(&self, comparator: impl FnMut(&T, &T) -> std::cmp::Ordering);

    /// ### -> `try_sort`
    ///
    /// Stable in-place ascending sort for partially ordered element types.
    ///
    /// Fails with `Error::Incomparable` if any compared pair admits no
    /// ordering (e.g. a floating-point NaN). On failure the sequence is left
    /// exactly as it was - the sort runs on a scratch buffer and is only
    /// committed when every comparison succeeded.
    fn try_sort(&self) -> Result<()>
    where
        T: PartialOrd;

    /// Reverses the element order in place.
    fn reverse(&self);
}

/// ### -> `Reactive<T> Trait`
///
/// Operations whose results *share element cells* with the receiver. A write
/// through either side (via `Element::write` or `modify`) is visible through
/// both. This mirrors the reference semantics of dynamic-language lists,
/// where slicing and concatenation copy references, not objects.
///
/// ### -> `Usage`
///
/// ```
/// use reflist::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let numbers = Sequence::from_values([0u32, 1, 2, 3, 4, 5, 6]);
///
///     // [1:4] -> 1, 2, 3
///     let sliced = Reactive::slice(&numbers, Some(1), Some(4), None);
///     assert_eq!(sliced.snapshot(), vec![1, 2, 3]);
///
///     // The slice shares cells with the source.
///     numbers.modify(2, 200)?;
///     assert_eq!(sliced.get(1)?.value(), 200);
///
///     // [::-1] -> full reverse
///     let reversed = Reactive::slice(&numbers, None, None, Some(-1));
///     assert_eq!(reversed.get(0)?.value(), 6);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Reactive<T>: Operation<T>
where
    Self: Sized,
{
    /// ### -> `slice`
    ///
    /// Returns a new sequence of the elements selected by
    /// `start..stop (by step)`, sharing their cells with the receiver.
    ///
    /// Semantics follow the common slicing convention: out-of-range bounds
    /// are clamped, never an error; negative indices count from the end; a
    /// negative `step` traverses backwards (defaults: start at the last
    /// element, stop before the first). `step` of zero selects nothing and
    /// yields an empty sequence.
    fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self;

    /// Returns a new sequence sharing the cells of the given slot range,
    /// clamped to the current length. `None` extracts everything, which is
    /// exactly a shallow copy.
    fn extract(&self, range: Option<Range<usize>>) -> Self;

    /// ### -> `modify`
    ///
    /// Writes `value` *through* the cell at `index`, returning a handle to
    /// it. Every sequence sharing the cell observes the new value.
    ///
    /// Fails with `Error::IndexOutOfRange` if `index` is outside `-n..n`.
    fn modify(&self, index: isize, value: T) -> Result<Element<T>>;

    /// New sequence holding the receiver's cells followed by `other`'s.
    /// Neither source is mutated.
    fn concat(&self, other: &Self) -> Self;

    /// ### -> `repeat`
    ///
    /// New sequence holding the receiver's cells repeated `count` times
    /// (`0` yields an empty sequence).
    ///
    /// The repetitions alias the *same* cells: after
    /// `Sequence::from_values([0]).repeat(5)`, modifying any slot through
    /// `modify` changes all five. This is the familiar `[x] * n` pitfall,
    /// kept deliberately; use `NonReactive` copies where isolation is
    /// needed.
    fn repeat(&self, count: usize) -> Self;

    /// Appends `other`'s cells to the receiver by reference.
    fn extend_from(&self, other: &Self);
}

/// ### -> `NonReactive<T> Trait`
///
/// Value-cloning counterparts of the reactive views. Results carry fresh
/// cells with cloned values; no mutable state is shared with the receiver at
/// the top level. (For elements that are themselves sequences, the clone is
/// per-level only - use `Copying::deep_copy` for full transitive
/// independence.)
pub trait NonReactive<T>: Operation<T>
where
    Self: Sized,
    T: Clone,
{
    /// Like `Reactive::slice`, but every selected value is cloned into a
    /// fresh cell.
    fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self;

    /// Like `Reactive::extract`, but values are cloned.
    fn extract(&self, range: Option<Range<usize>>) -> Self;

    /// Reversed copy; the receiver is untouched.
    fn reversed(&self) -> Self;

    /// Ascending sorted copy under the natural order; the receiver is
    /// untouched.
    fn sorted(&self) -> Self
    where
        T: Ord;
}

/// ### -> `Copying<T> Trait`
///
/// The three aliasing tiers, made explicit:
///
/// - plain `Clone` of a `Sequence<T>` is *assignment aliasing*: both handles
///   denote the identical container, every mutation is visible through both;
/// - `shallow_copy` makes a new top-level container whose slots share the
///   original's element cells;
/// - `deep_copy` duplicates the entire reachable structure, sharing nothing.
pub trait Copying<T>
where
    Self: Sized,
{
    /// New top-level container; element cells shared with the receiver.
    /// Structural mutation (insert/remove/sort) of either side is invisible
    /// to the other; writes through shared cells are visible to both.
    fn shallow_copy(&self) -> Self;

    /// ### -> `deep_copy`
    ///
    /// Fully independent duplicate: all reachable nested containers are
    /// duplicated via [`DeepClone`], so no mutable state is shared
    /// transitively.
    ///
    /// Fails with `Error::CycleDetected` if the structure references itself;
    /// cyclic deep copy is unsupported.
    fn deep_copy(&self) -> Result<Self>
    where
        T: DeepClone;
}

/// ### -> `SnapShot<T> Trait`
///
/// Detached value snapshots.
pub trait SnapShot<T> {
    /// Clones every element value into an independent `Vec<T>`, in order.
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone;
}

/// ### -> `Equality<T> Trait`
///
/// Three comparison tiers, from identity to value equality:
///
/// - `identical`: same container - both handles came from the same
///   `Sequence` (or a `Clone` of it);
/// - `cell_eq`: distinct containers whose slots hold the same cells in the
///   same order (e.g. a sequence and its shallow copy);
/// - `value_eq`: element-wise value equality, the weakest and most common
///   tier. `PartialEq` for `Sequence<T>` uses `identical || value_eq`.
pub trait Equality<T> {
    fn identical(&self, other: &Self) -> bool;

    fn cell_eq(&self, other: &Self) -> bool;

    fn value_eq(&self, other: &Self) -> bool
    where
        T: PartialEq;
}

/// ### -> `Aggregate<T> Trait`
///
/// Whole-sequence reductions over value snapshots.
pub trait Aggregate<T> {
    /// Smallest element under the natural order, `None` when empty.
    fn minimum(&self) -> Option<T>
    where
        T: Ord + Clone;

    /// Largest element under the natural order, `None` when empty.
    fn maximum(&self) -> Option<T>
    where
        T: Ord + Clone;

    /// Sum of all elements (the additive identity when empty).
    fn total(&self) -> T
    where
        T: std::iter::Sum<T> + Clone;
}

/// ### -> `Bincode<T> Trait`
///
/// Binary serialization of the value snapshot (requires the `serde`
/// feature). Cell sharing is not preserved across the codec boundary: a
/// deserialized sequence holds fresh, unshared cells.
#[cfg(feature = "serde")]
pub trait Bincode<T>: SnapShot<T>
where
    Self: Sized,
{
    /// Serializes the current snapshot.
    fn bincode(&self, configuration: &crate::BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize + Clone;

    /// Reconstructs a sequence from bytes produced by [`Bincode::bincode`].
    fn from_bincode(
        bytes: &[u8],
        configuration: &crate::BincodeConfiguration,
    ) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned;
}
