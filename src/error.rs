/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use core::fmt;

/// Failure modes for the fallible `Vector` operations.
///
/// Every variant is fail-slow: the vector on which the failing operation was
/// called is left completely untouched (see the crate-level documentation
/// for the propagation guarantee).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// `index` is outside `[0, size)` (or `[0, size]` for `insert`).
    OutOfBounds { index: usize, size: usize },

    /// `pop`-style removal attempted on a vector with `size == 0`.
    ///
    /// The primary `pop` entry point returns `Option` instead of this error
    /// (a single well-known failure cause does not need a typed error), but
    /// the variant is kept for the `Result`-returning sibling kept for
    /// symmetry with `update`/`insert`.
    Empty,

    /// A trie descent reached a null child slot where the node's shape
    /// claimed one existed. Indicates the vector's shape invariants were
    /// violated before this operation ran; not reachable for a vector built
    /// exclusively through this crate's own API.
    Missing,

    /// An invariant was found broken mid-operation, e.g. `pop` could not
    /// find a right-most subtree to promote when the shape said one should
    /// exist. Same disposition as `Missing`.
    Malformed,

    /// Allocation failed. Only reachable from the capacity-hinted `try_*`
    /// constructors; ordinary growth goes through the global allocator and
    /// aborts the process on exhaustion, which this crate does not attempt
    /// to intercept.
    OutOfMemory,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::OutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for vector of size {size}")
            }
            VectorError::Empty => f.write_str("operation requires a non-empty vector"),
            VectorError::Missing => f.write_str("trie descent found a missing child"),
            VectorError::Malformed => f.write_str("vector shape invariant violated"),
            VectorError::OutOfMemory => f.write_str("allocation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VectorError {}
