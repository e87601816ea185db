/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use alloc::boxed::Box;
use archery::{SharedPointer, SharedPointerKind};
use core::mem;

/// Bits consumed per trie level (branching factor `WIDTH = 2^BITS`).
pub(crate) const BITS: u32 = 5;
pub(crate) const WIDTH: usize = 1 << BITS;
pub(crate) const MASK: usize = WIDTH - 1;

pub(crate) type ChildArray<T, P> = Box<[Option<SharedPointer<Node<T, P>, P>>; WIDTH]>;
pub(crate) type LeafArray<T, P> = Box<[Option<SharedPointer<T, P>>; WIDTH]>;

fn empty_child_array<T, P: SharedPointerKind>() -> ChildArray<T, P> {
    Box::new(core::array::from_fn(|_| None))
}

fn empty_leaf_array<T, P: SharedPointerKind>() -> LeafArray<T, P> {
    Box::new(core::array::from_fn(|_| None))
}

/// A single trie node: either an inner node of child pointers, or a leaf of
/// up to `WIDTH` elements. Every element and every child is wrapped in its
/// own [`SharedPointer`], so path-copying a node never requires `T: Clone` —
/// it only clones pointers, exactly as a leaf bucket entry is shared rather
/// than duplicated elsewhere in this crate.
pub(crate) enum Node<T, P: SharedPointerKind> {
    Branch(ChildArray<T, P>),
    Leaf(LeafArray<T, P>),
}

impl<T, P: SharedPointerKind> Node<T, P> {
    pub(crate) fn empty_branch() -> Node<T, P> {
        Node::Branch(empty_child_array())
    }

    pub(crate) fn empty_leaf() -> Node<T, P> {
        Node::Leaf(empty_leaf_array())
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of left-packed occupied child slots of a branch node.
    pub(crate) fn child_count(&self) -> usize {
        match self {
            Node::Branch(children) => children.iter().take_while(|c| c.is_some()).count(),
            Node::Leaf(_) => 0,
        }
    }

    pub(crate) fn child(&self, index: usize) -> Option<&SharedPointer<Node<T, P>, P>> {
        match self {
            Node::Branch(children) => children[index].as_ref(),
            Node::Leaf(_) => None,
        }
    }

    /// Precondition: slot `index` is occupied.
    pub(crate) fn child_mut(&mut self, index: usize) -> &mut SharedPointer<Node<T, P>, P> {
        match self {
            Node::Branch(children) => children[index].as_mut().expect("child_mut on empty slot"),
            Node::Leaf(_) => panic!("child_mut on a leaf node"),
        }
    }

    pub(crate) fn leaf_item(&self, index: usize) -> Option<&SharedPointer<T, P>> {
        match self {
            Node::Leaf(items) => items[index].as_ref(),
            Node::Branch(_) => None,
        }
    }

    /// Shallow-copy: a fresh node with the same shape, cloning (not
    /// duplicating) every occupied slot. The copy starts out uniquely owned.
    pub(crate) fn shallow_copy(&self) -> Node<T, P> {
        match self {
            Node::Branch(children) => {
                let mut copy = empty_child_array();
                for (slot, child) in copy.iter_mut().zip(children.iter()) {
                    *slot = child.clone();
                }
                Node::Branch(copy)
            }
            Node::Leaf(items) => {
                let mut copy = empty_leaf_array();
                for (slot, item) in copy.iter_mut().zip(items.iter()) {
                    *slot = item.clone();
                }
                Node::Leaf(copy)
            }
        }
    }

    pub(crate) fn set_child(&mut self, index: usize, child: SharedPointer<Node<T, P>, P>) {
        match self {
            Node::Branch(children) => children[index] = Some(child),
            Node::Leaf(_) => panic!("set_child on a leaf node"),
        }
    }

    pub(crate) fn take_child(&mut self, index: usize) -> Option<SharedPointer<Node<T, P>, P>> {
        match self {
            Node::Branch(children) => children[index].take(),
            Node::Leaf(_) => None,
        }
    }

    pub(crate) fn set_item(&mut self, index: usize, item: SharedPointer<T, P>) {
        match self {
            Node::Leaf(items) => items[index] = Some(item),
            Node::Branch(_) => panic!("set_item on a branch node"),
        }
    }

    pub(crate) fn take_item(&mut self, index: usize) -> Option<SharedPointer<T, P>> {
        match self {
            Node::Leaf(items) => items[index].take(),
            Node::Branch(_) => None,
        }
    }
}

/// `SharedPointer::make_mut` clones the pointee when it is not uniquely
/// owned, which is exactly the path-copy `shallow_copy` already implements.
impl<T, P: SharedPointerKind> Clone for Node<T, P> {
    fn clone(&self) -> Node<T, P> {
        self.shallow_copy()
    }
}

/// Reclaims a node's subtree iteratively, bounded by trie depth rather than
/// by native call stack depth. A node is only ever torn apart here once its
/// own reference count has reached zero; children that are still shared
/// elsewhere are simply released (their own count decremented) and left
/// alone.
impl<T, P: SharedPointerKind> Drop for Node<T, P> {
    fn drop(&mut self) {
        let Node::Branch(children) = self else {
            // Leaf payloads hold no further trie structure; ordinary field
            // drop glue for the boxed array is already non-recursive.
            return;
        };

        let mut stack: alloc::vec::Vec<ChildArray<T, P>> = alloc::vec::Vec::new();
        stack.push(mem::replace(children, empty_child_array()));

        while let Some(mut frame) = stack.pop() {
            for slot in frame.iter_mut() {
                let Some(child) = slot.take() else { continue };

                match SharedPointer::try_unwrap(child) {
                    Ok(mut owned) => {
                        // Can't destructure `owned` by value: `Node` implements
                        // `Drop`, so moving `grandchildren` out of it is E0509.
                        // Take the array through `&mut` instead, as above.
                        if let Node::Branch(ref mut grandchildren) = owned {
                            stack.push(mem::replace(grandchildren, empty_child_array()));
                        }
                        // `owned` (now an empty branch, or an untouched leaf)
                        // drops trivially here.
                    }
                    Err(_still_shared) => {
                        // Another version still owns this subtree; dropping
                        // `_still_shared` here only decrements its count.
                    }
                }
            }
        }
    }
}
