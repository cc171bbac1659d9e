//! Owned, singly linked sequence containers.
//!
//! See [`linked_list`] for the list itself and its cursors.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::single::SingleLinkedList;
