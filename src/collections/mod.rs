//! Ordered containers used for graph storage.

pub mod list;

pub use list::{Iter, SequentialList};
