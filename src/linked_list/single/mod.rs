//! # Singly Linked List
//!
//! ## Core Components
//!
//! - [`list::SingleLinkedList`]: the container, owning a sentinel and the chain of nodes behind it.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: forward positions, including the before-begin
//!   position at the sentinel and the end position past the last element.
//! - [`iter`]: borrowing and owning Rust iterators over the elements.
//! - [`error::ListError`]: the preconditions that list and cursor operations can violate.
//!
//! ## Value semantics
//!
//! A list behaves like a value even though its elements are linked by pointers. Cloning
//! copies every element into an independent chain, `clone_from` builds the copy before it
//! replaces anything, and [`swap`](list::SingleLinkedList::swap) exchanges two chains without
//! touching an element. Lists compare element by element, lexicographically.
//!
//! ## Preconditions
//!
//! Popping or erasing with nothing to remove, and advancing or dereferencing the end
//! position, are programming errors and panic. Each of these operations has a `try_`
//! form that reports a [`error::ListError`] instead.

pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;

mod impls;
mod node;

pub use cursor::{Cursor, CursorMut};
pub use error::{ListError, ListResult};
pub use list::SingleLinkedList;

#[cfg(test)]
mod tests;
