mod get;
mod remove;
mod reverse;
mod snapshot;

#[cfg(feature = "serde")]
mod bincode;
