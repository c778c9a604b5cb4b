use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A handle to one live element cell of a sequence.
///
/// `Element<T>` preserves the value semantics the user expects while keeping
/// the cell shared: writing through the handle also updates the value inside
/// every sequence slot that holds the same cell. This is what the sequence
/// documentation calls "reactivity".
///
/// Cloning an `Element` clones the handle, never the value.
///
/// ### -> `Usage`
///
/// ```
/// use reflist::sequence::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let sequence = Sequence::<i32>::from_values([42]);
///
///     let element = sequence.get(0)?;
///     assert_eq!(element.value(), 42);
///
///     // Writing through the handle updates the sequence slot too.
///     *element.write() += 1;
///     assert_eq!(sequence.get(0)?.value(), 43);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Element<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Element<T> {
    /// Wraps a value in a fresh, unshared cell.
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    pub(crate) fn from_cell(cell: Rc<RefCell<T>>) -> Self {
        Self { cell }
    }

    /// Returns the underlying shared cell.
    pub fn cell(&self) -> Rc<RefCell<T>> {
        Rc::clone(&self.cell)
    }

    /// Immutably borrows the value.
    ///
    /// Panics if the cell is currently mutably borrowed; holding guards across
    /// further sequence calls is the caller's responsibility.
    pub fn read(&self) -> Ref<'_, T> {
        self.cell.borrow()
    }

    /// Mutably borrows the value. Writes are visible through every slot
    /// sharing this cell.
    ///
    /// Panics if the cell is currently borrowed.
    pub fn write(&self) -> RefMut<'_, T> {
        self.cell.borrow_mut()
    }

    /// Clones the value out of the cell.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }

    /// Replaces the value inside the cell, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.cell.replace(value)
    }

    /// True if both handles point at the same cell.
    pub fn shares(&self, other: &Element<T>) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T> Clone for Element<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Element<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.try_borrow() {
            Ok(value) => write!(formatter, "{:?}", &*value),
            Err(_) => formatter.write_str("<borrowed>"),
        }
    }
}

impl<T: PartialEq> PartialEq for Element<T> {
    /// Value equality. Use [`Element::shares`] for cell identity.
    fn eq(&self, other: &Self) -> bool {
        self.shares(other) || *self.read() == *other.read()
    }
}
