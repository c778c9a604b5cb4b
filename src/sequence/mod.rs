use std::cell::RefCell;
use std::rc::Rc;

pub mod deep;
pub mod element;
mod traits;

use crate::error::{Error, Result};
use deep::{CycleTrace, DeepClone};
use element::Element;
use traits::{
    Aggregate, Copying, Equality, Length, NonReactive, Operation, Reactive, SnapShot, Sort,
};

type Cell<T> = Rc<RefCell<T>>;

/// ### -> `Sequence<T>` - An ordered, duplicate-permitting sequence with reference semantics.
///
/// `Sequence<T>` is a resizable, index-addressable container whose elements
/// live in shared cells (`Rc<RefCell<T>>`). Insertion order is significant
/// and preserved; duplicates are permitted; positions accept negative
/// indices counting from the end (`-1` is the last element).
///
/// ### -> `Reactivity Explained`
///
/// **Reactivity** refers to the ability to share element modifications
/// across multiple containers referencing the same cells:
///
/// - **Reactive operations** (`Reactive::slice`, `extract`, `concat`,
///   `repeat`, `extend_from`, `modify`, plus `Candidate::Element` insertion)
///   produce or feed containers that share cells with their source. Writing
///   an element through one side is immediately visible through every other
///   container holding that cell.
/// - **Non-reactive operations** (`set`, `NonReactive::slice`, `extract`,
///   `reversed`, `sorted`, `Candidate::Value` insertion) allocate fresh
///   cells with cloned or newly supplied values; changes never propagate.
///
/// ### -> `Aliasing, Shallow Copy, Deep Copy`
///
/// Three distinct copy relationships, chosen explicitly:
///
/// - `Clone` on a `Sequence<T>` handle is **plain assignment aliasing**:
///   both handles denote the identical container, so insertions, removals
///   and reorderings through either are visible through both. No new
///   container is introduced.
/// - `Copying::shallow_copy` creates a **new top-level container** whose
///   slots share the original's cells. Top-level structure is independent;
///   element values are shared.
/// - `Copying::deep_copy` recursively duplicates the entire reachable
///   structure via [`deep::DeepClone`]; nothing mutable is shared. Fails
///   with `Error::CycleDetected` on self-referential structures.
///
/// ### -> `Invariants`
///
/// 1. A positional operation at `i` is legal iff `-n <= i < n` for length
///    `n`; violations fail with `Error::IndexOutOfRange`.
/// 2. A failing operation performs no partial mutation.
/// 3. Iteration (`iter`, `IntoIterator`, `values`) walks a snapshot of the
///    slot vector taken when the iterator is created; structural mutation
///    mid-iteration can never skip or repeat elements.
///
/// ### -> `Error Handling`
///
/// User errors (bad index, absent value, unordered elements, cyclic deep
/// copy) return `Result::Err` with a typed [`crate::Error`]. Borrow-rule
/// misuse - holding an [`Element`] write guard across another call touching
/// the same cell - panics via `RefCell`, as it indicates a caller bug rather
/// than a recoverable condition.
///
/// ### -> `Concurrency`
///
/// None. `Sequence<T>` is single-threaded by construction (`Rc`/`RefCell`,
/// hence `!Send + !Sync`); wrap it externally if you need to share across
/// threads.
///
/// ### -> `Usage`
///
/// ```
/// use reflist::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let numbers = Sequence::from_values([3, 1, 4, 2]);
///
///     numbers.sort();
///     assert_eq!(numbers.snapshot(), vec![1, 2, 3, 4]);
///
///     let copy = numbers.shallow_copy();
///     copy.append(Candidate::Value(5));
///     assert_eq!(numbers.length(), 4); // top-level structure independent
///
///     numbers.modify(0, 100)?;
///     assert_eq!(copy.get(0)?.value(), 100); // element cells shared
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Sequence<T> {
    cells: Rc<RefCell<Vec<Cell<T>>>>,
}

/// Plain assignment aliasing: the clone denotes the identical container.
/// Use `Copying::shallow_copy` / `Copying::deep_copy` for new containers.
impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::allocate(0)
    }
}

/// Maps `index` to a concrete position, resolving negative offsets.
fn resolve_index(index: isize, length: usize) -> Result<usize> {
    let resolved = if index < 0 {
        index + length as isize
    } else {
        index
    };
    if resolved < 0 || resolved as usize >= length {
        return Err(Error::IndexOutOfRange { index, length });
    }
    Ok(resolved as usize)
}

/// Collects the cells selected by `start..stop (by step)` under the common
/// slicing convention: bounds clamped, negative indices from the end,
/// negative step traverses backwards, step of zero selects nothing.
fn slice_cells<T>(
    cells: &[Cell<T>],
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Vec<Cell<T>> {
    let length = cells.len() as isize;
    let step = step.unwrap_or(1);
    let mut picked = Vec::new();

    if step > 0 {
        let clamp = |bound: isize| -> isize {
            let resolved = if bound < 0 { length + bound } else { bound };
            resolved.clamp(0, length)
        };
        let start = clamp(start.unwrap_or(0));
        let stop = clamp(stop.unwrap_or(length));

        let mut i = start;
        while i < stop {
            picked.push(Rc::clone(&cells[i as usize]));
            i += step;
        }
    } else if step < 0 {
        // Walking backwards: start is inclusive (default: last element),
        // stop is exclusive (default: one before the first, i.e. -1).
        let clamp = |bound: isize, low: isize, high: isize| -> isize {
            let resolved = if bound < 0 { length + bound } else { bound };
            resolved.clamp(low, high)
        };
        let start = clamp(start.unwrap_or(length - 1), -1, length - 1);
        let stop = match stop {
            Some(bound) => clamp(bound, -1, length),
            None => -1,
        };

        let mut i = start;
        while i > stop {
            picked.push(Rc::clone(&cells[i as usize]));
            i += step;
        }
    }
    // step of zero falls through and selects nothing

    picked
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with `capacity` slots pre-reserved.
    pub fn allocate(capacity: usize) -> Self {
        Self::from_cells(Vec::with_capacity(capacity))
    }

    /// Creates a sequence from an ordered collection of values, each in a
    /// fresh cell.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_cells(
            values
                .into_iter()
                .map(|value| Rc::new(RefCell::new(value)))
                .collect(),
        )
    }

    fn from_cells(cells: Vec<Cell<T>>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(cells)),
        }
    }

    /// Slots currently reserved, including unused ones.
    pub fn capacity(&self) -> usize {
        self.cells.borrow().capacity()
    }

    /// Iterates over the elements as [`Element`] handles.
    ///
    /// The iterator holds a snapshot of the slot vector taken here, so
    /// structural mutation of the sequence during iteration affects the
    /// sequence but never the iteration.
    pub fn iter(&self) -> Iter<T> {
        let cells: Vec<Cell<T>> = self.cells.borrow().iter().map(Rc::clone).collect();
        Iter {
            cells: cells.into_iter(),
        }
    }

    /// Iterates over cloned element values.
    pub fn values(&self) -> std::vec::IntoIter<T>
    where
        T: Clone,
    {
        self.snapshot().into_iter()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> Length for Sequence<T> {
    fn length(&self) -> usize {
        self.cells.borrow().len()
    }
}

impl<T> Operation<T> for Sequence<T> {
    fn get(&self, index: isize) -> Result<Element<T>> {
        let cells = self.cells.borrow();
        let position = resolve_index(index, cells.len())?;
        Ok(Element::from_cell(Rc::clone(&cells[position])))
    }

    fn set(&self, index: isize, value: crate::Candidate<T>) -> Result<Element<T>> {
        let mut cells = self.cells.borrow_mut();
        let position = resolve_index(index, cells.len())?;
        let displaced = std::mem::replace(&mut cells[position], value.into_cell());
        Ok(Element::from_cell(displaced))
    }

    fn insert(&self, index: isize, value: crate::Candidate<T>) {
        let mut cells = self.cells.borrow_mut();
        let length = cells.len() as isize;
        let position = if index < 0 {
            (length + index).max(0)
        } else {
            index.min(length)
        };
        cells.insert(position as usize, value.into_cell());
    }

    fn append(&self, value: crate::Candidate<T>) {
        self.cells.borrow_mut().push(value.into_cell());
    }

    fn extend(&self, iter: impl IntoIterator<Item = T>) {
        let mut cells = self.cells.borrow_mut();
        cells.extend(iter.into_iter().map(|value| Rc::new(RefCell::new(value))));
    }

    fn remove(&self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let mut cells = self.cells.borrow_mut();
        let position = cells
            .iter()
            .position(|cell| *cell.borrow() == *value)
            .ok_or(Error::ValueNotFound)?;
        cells.remove(position);
        Ok(())
    }

    fn pop(&self, index: Option<isize>) -> Result<Element<T>> {
        let mut cells = self.cells.borrow_mut();
        let position = resolve_index(index.unwrap_or(-1), cells.len())?;
        Ok(Element::from_cell(cells.remove(position)))
    }

    fn delete(&self, index: isize) -> Result<()> {
        let mut cells = self.cells.borrow_mut();
        let position = resolve_index(index, cells.len())?;
        cells.remove(position);
        Ok(())
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.cells
            .borrow()
            .iter()
            .any(|cell| *cell.borrow() == *value)
    }

    fn index_of(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.cells
            .borrow()
            .iter()
            .position(|cell| *cell.borrow() == *value)
            .ok_or(Error::ValueNotFound)
    }

    fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.cells
            .borrow()
            .iter()
            .filter(|cell| *cell.borrow() == *value)
            .count()
    }

    fn clear(&self) {
        self.cells.borrow_mut().clear();
    }
}

impl<T> Sort<T> for Sequence<T> {
    fn sort(&self)
    where
        T: Ord,
    {
        self.cells
            .borrow_mut()
            .sort_by(|a, b| a.borrow().cmp(&*b.borrow()));
    }

    fn sort_by(&self, mut comparator: impl FnMut(&T, &T) -> std::cmp::Ordering) {
        self.cells
            .borrow_mut()
            .sort_by(|a, b| comparator(&*a.borrow(), &*b.borrow()));
    }

    fn try_sort(&self) -> Result<()>
    where
        T: PartialOrd,
    {
        // Sort a scratch copy of the slot vector so an Incomparable failure
        // leaves the sequence untouched.
        let mut scratch: Vec<Cell<T>> = self.cells.borrow().clone();
        let mut comparable = true;
        scratch.sort_by(|a, b| match a.borrow().partial_cmp(&*b.borrow()) {
            Some(ordering) => ordering,
            None => {
                comparable = false;
                std::cmp::Ordering::Equal
            }
        });
        if !comparable {
            return Err(Error::Incomparable);
        }
        *self.cells.borrow_mut() = scratch;
        Ok(())
    }

    fn reverse(&self) {
        self.cells.borrow_mut().reverse();
    }
}

impl<T> Reactive<T> for Sequence<T> {
    fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        let cells = self.cells.borrow();
        Self::from_cells(slice_cells(&cells, start, stop, step))
    }

    fn extract(&self, range: Option<std::ops::Range<usize>>) -> Self {
        let cells = self.cells.borrow();
        let range = match range {
            Some(range) => range.start.min(cells.len())..range.end.min(cells.len()),
            None => 0..cells.len(),
        };
        if range.start >= range.end {
            return Self::allocate(0);
        }
        Self::from_cells(cells[range].iter().map(Rc::clone).collect())
    }

    fn modify(&self, index: isize, value: T) -> Result<Element<T>> {
        let cell = {
            let cells = self.cells.borrow();
            let position = resolve_index(index, cells.len())?;
            Rc::clone(&cells[position])
        };
        *cell.borrow_mut() = value;
        Ok(Element::from_cell(cell))
    }

    fn concat(&self, other: &Self) -> Self {
        let mut combined: Vec<Cell<T>> = self.cells.borrow().iter().map(Rc::clone).collect();
        combined.extend(other.cells.borrow().iter().map(Rc::clone));
        Self::from_cells(combined)
    }

    fn repeat(&self, count: usize) -> Self {
        let cells = self.cells.borrow();
        let mut repeated = Vec::with_capacity(cells.len() * count);
        for _ in 0..count {
            repeated.extend(cells.iter().map(Rc::clone));
        }
        Self::from_cells(repeated)
    }

    fn extend_from(&self, other: &Self) {
        // other may alias self; collect before taking the write borrow
        let shared: Vec<Cell<T>> = other.cells.borrow().iter().map(Rc::clone).collect();
        self.cells.borrow_mut().extend(shared);
    }
}

impl<T: Clone> NonReactive<T> for Sequence<T> {
    fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        let picked = {
            let cells = self.cells.borrow();
            slice_cells(&cells, start, stop, step)
        };
        Self::from_values(picked.iter().map(|cell| cell.borrow().clone()))
    }

    fn extract(&self, range: Option<std::ops::Range<usize>>) -> Self {
        let shared = Reactive::extract(self, range);
        Self::from_values(shared.snapshot())
    }

    fn reversed(&self) -> Self {
        let mut values = self.snapshot();
        values.reverse();
        Self::from_values(values)
    }

    fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut values = self.snapshot();
        values.sort();
        Self::from_values(values)
    }
}

impl<T> Copying<T> for Sequence<T> {
    fn shallow_copy(&self) -> Self {
        Reactive::extract(self, None)
    }

    fn deep_copy(&self) -> Result<Self>
    where
        T: DeepClone,
    {
        let mut trace = CycleTrace::new();
        self.deep_clone(&mut trace)
    }
}

impl<T: DeepClone> DeepClone for Sequence<T> {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        trace.enter(Rc::as_ptr(&self.cells) as *const ())?;
        let copied = (|| {
            let source = self.cells.borrow();
            let mut cells = Vec::with_capacity(source.len());
            for cell in source.iter() {
                let value = cell.borrow().deep_clone(trace)?;
                cells.push(Rc::new(RefCell::new(value)));
            }
            Ok(Self::from_cells(cells))
        })();
        trace.leave();
        copied
    }
}

impl<T> SnapShot<T> for Sequence<T> {
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.cells
            .borrow()
            .iter()
            .map(|cell| cell.borrow().clone())
            .collect()
    }
}

impl<T> Equality<T> for Sequence<T> {
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    fn cell_eq(&self, other: &Self) -> bool {
        if self.identical(other) {
            return true;
        }
        let left = self.cells.borrow();
        let right = other.cells.borrow();
        left.len() == right.len()
            && left
                .iter()
                .zip(right.iter())
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }

    fn value_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.identical(other) {
            return true;
        }
        let left = self.cells.borrow();
        let right = other.cells.borrow();
        left.len() == right.len()
            && left
                .iter()
                .zip(right.iter())
                .all(|(a, b)| Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow())
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl<T> Aggregate<T> for Sequence<T> {
    fn minimum(&self) -> Option<T>
    where
        T: Ord + Clone,
    {
        self.snapshot().into_iter().min()
    }

    fn maximum(&self) -> Option<T>
    where
        T: Ord + Clone,
    {
        self.snapshot().into_iter().max()
    }

    fn total(&self) -> T
    where
        T: std::iter::Sum<T> + Clone,
    {
        self.snapshot().into_iter().sum()
    }
}

#[cfg(feature = "serde")]
impl<T> traits::Bincode<T> for Sequence<T> {
    fn bincode(&self, configuration: &crate::BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize + Clone,
    {
        use bincode::Options;
        let snapshot = self.snapshot();
        let options = bincode::options().with_fixint_encoding();
        let bytes = match configuration.byte_limit {
            Some(limit) => options.with_limit(limit).serialize(&snapshot)?,
            None => options.serialize(&snapshot)?,
        };
        Ok(bytes)
    }

    fn from_bincode(
        bytes: &[u8],
        configuration: &crate::BincodeConfiguration,
    ) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        use bincode::Options;
        let options = bincode::options().with_fixint_encoding();
        let values: Vec<T> = match configuration.byte_limit {
            Some(limit) => options.with_limit(limit).deserialize(bytes)?,
            None => options.deserialize(bytes)?,
        };
        Ok(Self::from_values(values))
    }
}

/// Snapshot iterator over [`Element`] handles. See [`Sequence::iter`].
pub struct Iter<T> {
    cells: std::vec::IntoIter<Cell<T>>,
}

impl<T> Iterator for Iter<T> {
    type Item = Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(Element::from_cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = Element<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders contents list-style, e.g. `[1, 2, 3]`. Cells currently held under
/// a write borrow render as `<borrowed>`. Illustrative output only, not a
/// stable format.
impl<T: std::fmt::Debug> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.cells.borrow();
        formatter.write_str("[")?;
        for (position, cell) in cells.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            match cell.try_borrow() {
                Ok(value) => write!(formatter, "{:?}", &*value)?,
                Err(_) => formatter.write_str("<borrowed>")?,
            }
        }
        formatter.write_str("]")
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
