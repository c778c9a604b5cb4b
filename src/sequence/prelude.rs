pub use {
    crate::error::{Error, Result},
    crate::sequence::deep::{CycleTrace, DeepClone},
    crate::sequence::element::Element,
    crate::sequence::traits::{
        Aggregate, Copying, Equality, Length, NonReactive, Operation, Reactive, SnapShot, Sort,
    },
    crate::sequence::{Iter, Sequence},
    crate::Candidate,
};

#[cfg(feature = "serde")]
pub use {crate::sequence::traits::Bincode, crate::BincodeConfiguration};
