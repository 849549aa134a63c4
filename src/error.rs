use std::fmt;

use thiserror::Error;

/// Error enumerates over all the ways [`OrderedMap::validate`] can find
/// the tree broken. Regular map operations never fail.
///
/// [`OrderedMap::validate`]: crate::OrderedMap::validate
#[derive(Debug, PartialEq, Error)]
pub enum Error<K>
where
    K: fmt::Debug,
{
    /// Root node is red after a mutation returned.
    #[error("root node is red")]
    RedRoot,
    /// A red link is leaning to the right.
    #[error("red link leaning right")]
    RightLeaningRed,
    /// Fatal case, two red links in a row on a downward path.
    #[error("consecutive red links")]
    ConsecutiveReds,
    /// Fatal case, black height differs between left and right subtree.
    /// The String component can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Entries are not in sort-order, (key, ancestor-key it must sort
    /// against).
    #[error("sort error, {0:?} out of order with {1:?}")]
    SortError(K, K),
    /// Cached entry count does not match the nodes in the tree.
    #[error("cached count {cached} but counted {counted} nodes")]
    CountMismatch { cached: usize, counted: usize },
}
