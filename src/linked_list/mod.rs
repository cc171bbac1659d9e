//! A singly linked list that owns its nodes.
//!
//! Each element is stored in its own heap node, and each node owns the node
//! that follows it. A value-less sentinel sits in front of the first node, so
//! positions can insert and erase at the front of the list the same way as
//! anywhere else.
//!
//! # Examples
//!
//! ```
//! use forward_list::linked_list::single::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([1, 2, 3]);
//! list.push_front(0);
//! assert_eq!(list.len(), 4);
//!
//! // Insert after the second element, then erase the element after the sentinel.
//! let mut cursor = list.begin_mut();
//! cursor.move_next();
//! cursor.insert_after(10);
//! list.before_begin_mut().erase_after();
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 10, 2, 3]);
//!
//! let copy = list.clone();
//! assert_eq!(copy, list);
//! assert!(SingleLinkedList::from([1, 2]) < SingleLinkedList::from([1, 2, 3]));
//! ```
pub mod single;
