use crate::error::{Error, Result};

/// Bookkeeping for an in-progress deep copy.
///
/// Holds the addresses of the containers currently being duplicated on the
/// recursion path. Re-entering an address means the structure references
/// itself, which a deep copy cannot terminate on.
#[derive(Default)]
pub struct CycleTrace {
    visiting: Vec<*const ()>,
}

impl CycleTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a container address as being copied. Fails with
    /// [`Error::CycleDetected`] if the address is already on the path.
    pub fn enter(&mut self, address: *const ()) -> Result<()> {
        if self.visiting.contains(&address) {
            return Err(Error::CycleDetected);
        }
        self.visiting.push(address);
        Ok(())
    }

    /// Unmarks the most recently entered address.
    pub fn leave(&mut self) {
        self.visiting.pop();
    }
}

/// Recursive duplication with no shared mutable state between source and copy.
///
/// Implementors duplicate every reachable nested container rather than
/// sharing cells. Scalars and other value-only types simply clone. Types that
/// can nest sequences (including `Sequence<T>` itself) must thread the
/// [`CycleTrace`] through so self-referential structures are rejected instead
/// of recursed into forever.
///
/// Implement this for your own element types to make them eligible for
/// `Copying::deep_copy`:
///
/// ```
/// use reflist::sequence::prelude::*;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i64, y: i64 }
///
/// impl DeepClone for Point {
///     fn deep_clone(&self, _trace: &mut CycleTrace) -> reflist::Result<Self> {
///         Ok(self.clone()) // no nested containers
///     }
/// }
///
/// let points = Sequence::from_values([Point { x: 1, y: 2 }]);
/// let copy = points.deep_copy().unwrap();
/// assert!(copy.value_eq(&points));
/// ```
pub trait DeepClone: Sized {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self>;
}

macro_rules! deep_clone_by_clone {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepClone for $t {
                fn deep_clone(&self, _trace: &mut CycleTrace) -> Result<Self> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

deep_clone_by_clone! {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String,
}

impl DeepClone for &'static str {
    fn deep_clone(&self, _trace: &mut CycleTrace) -> Result<Self> {
        Ok(*self)
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        match self {
            Some(value) => Ok(Some(value.deep_clone(trace)?)),
            None => Ok(None),
        }
    }
}

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        Ok(Box::new((**self).deep_clone(trace)?))
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        self.iter().map(|value| value.deep_clone(trace)).collect()
    }
}

impl<A: DeepClone, B: DeepClone> DeepClone for (A, B) {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        Ok((self.0.deep_clone(trace)?, self.1.deep_clone(trace)?))
    }
}

impl<A: DeepClone, B: DeepClone, C: DeepClone> DeepClone for (A, B, C) {
    fn deep_clone(&self, trace: &mut CycleTrace) -> Result<Self> {
        Ok((
            self.0.deep_clone(trace)?,
            self.1.deep_clone(trace)?,
            self.2.deep_clone(trace)?,
        ))
    }
}
