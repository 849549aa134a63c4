//! Sorted key-value map over a left-leaning-red-black tree.

mod depth;
mod empty;
mod error;
mod llrb;

pub use crate::depth::Depth;
pub use crate::empty::Empty;
pub use crate::error::Error;
pub use crate::llrb::{Iter, Keys, OrderedMap, Stats, Values};
