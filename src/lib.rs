/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! `pvec` is a persistent, indexed sequence: a bit-partitioned trie of
//! branching factor 32 with a small tail buffer, giving amortized O(1)
//! append and O(log₃₂ n) random access, update, and removal from the end.
//! Every mutating operation returns a new [`Vector`] that shares every
//! subtree the mutation did not touch with the vector it was called on,
//! which is left completely unchanged.
//!
//! ```
//! use pvec::Vector;
//!
//! let v0 = Vector::new();
//! let v1 = v0.push(1).push(2).push(3);
//! let v2 = v1.update(1, 20).unwrap();
//!
//! assert_eq!(v1.get(1), Some(&2));
//! assert_eq!(v2.get(1), Some(&20));
//! assert_eq!(v1.len(), 3);
//! ```
//!
//! # Structural sharing and pointer kinds
//!
//! [`Vector`] is generic over the [`archery::SharedPointerKind`] used for
//! its internal reference counting: [`archery::RcK`] (the default, via
//! [`Vector::new`]) for single-threaded use, or [`archery::ArcK`] (via
//! [`Vector::new_sync`] / the [`VectorSync`] alias) when the immutable
//! vector itself needs to cross a thread boundary. Both share the exact
//! same trie code; only the reference-counting primitive changes.
//!
//! # `no_std`
//!
//! This crate is `no_std` by default and depends only on `alloc`. Enable
//! the `std` feature (on by default) for [`std::error::Error`] on
//! [`VectorError`]; enable `serde` for (de)serialization support.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

extern crate alloc;

mod error;
mod vector;

/// Non-atomic shared-pointer kind; the default for [`Vector`].
pub use archery::RcK;
/// Atomic shared-pointer kind; see [`VectorSync`].
pub use archery::ArcK;
/// The generic parameter [`Vector`] is parameterized over.
pub use archery::SharedPointerKind;
pub use error::VectorError;
pub use vector::{Iter, Vector, VectorSync};
