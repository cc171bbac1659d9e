//! The list container and its storage operations.

use core::mem;
use core::ptr::NonNull;

use log::trace;

use super::{
    cursor::{Anchor, Cursor, CursorMut},
    error::{ListError, ListResult},
    iter::{Iter, IterMut},
    node::{Sentinel, Slot},
};

/// A singly linked list that owns its elements.
///
/// Every element lives in its own heap node. The list keeps a value-less
/// sentinel in front of the first node, so positions handed out by
/// [`before_begin`](Self::before_begin) can insert or erase at the front the
/// same way as anywhere else.
pub struct SingleLinkedList<T> {
    head: Sentinel<T>,
    pub(crate) len: usize,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        SingleLinkedList {
            head: Sentinel::new(),
            len: 0,
        }
    }

    /// Get the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the first element, if any
    pub fn front(&self) -> Option<&T> {
        self.head.next().map(|node| &node.value)
    }

    /// Get a mutable reference to the first element, if any
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.link_mut().as_deref_mut().map(|node| &mut node.value)
    }

    /// Push a new element to the front of the list
    pub fn push_front(&mut self, value: T) {
        self.head.link_after(value);
        self.len += 1;
    }

    /// Pop the first element of the list.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. See [`try_pop_front`](Self::try_pop_front)
    /// for the non-panicking form.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Ok(value) => value,
            Err(err) => panic!("pop_front: {err}"),
        }
    }

    /// Pop the first element of the list, or fail with [`ListError::Empty`].
    pub fn try_pop_front(&mut self) -> ListResult<T> {
        let value = self.head.unlink_after().ok_or(ListError::Empty)?;
        self.len -= 1;
        Ok(value)
    }

    /// Remove every element, releasing the nodes front to back.
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!("clearing single linked list of {} nodes", self.len);
        }
        while self.head.unlink_after().is_some() {}
        self.len = 0;
    }

    /// Exchange the contents of two lists without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self.head.link_mut(), other.head.link_mut());
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Get an iterator over references to the elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.next(), self.len)
    }

    /// Get an iterator over mutable references to the elements
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.link_mut().as_deref_mut(), self.len)
    }

    /// Get a read-only cursor at the sentinel, before the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        let list = NonNull::from(self);
        Cursor::new(list, Anchor::BeforeBegin(unsafe { Self::sentinel_of(list) }))
    }

    /// Get a read-only cursor at the first element, or at the end if empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        let mut cursor = self.before_begin();
        cursor.move_next();
        cursor
    }

    /// Get a read-only cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(NonNull::from(self), Anchor::End)
    }

    /// Get a mutable cursor at the sentinel, before the first element.
    ///
    /// Inserting after this position pushes to the front of the list, and
    /// erasing after it pops the front.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let list = NonNull::from(self);
        CursorMut::new(list, Anchor::BeforeBegin(unsafe { Self::sentinel_of(list) }))
    }

    /// Get a mutable cursor at the first element, or at the end if empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = self.before_begin_mut();
        cursor.move_next();
        cursor
    }

    /// Get a mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(NonNull::from(self), Anchor::End)
    }

    /// Get a pointer to the sentinel of the list behind `list`.
    ///
    /// # Safety
    ///
    /// `list` must point to a live list. The returned pointer carries the
    /// same access rights as `list`.
    unsafe fn sentinel_of(list: NonNull<Self>) -> NonNull<Sentinel<T>> {
        unsafe { NonNull::new_unchecked(&raw mut (*list.as_ptr()).head) }
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SingleLinkedList;
    use crate::linked_list::single::error::ListError;

    #[test]
    fn test_new_list_is_empty() {
        let list = SingleLinkedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.begin(), list.end());
    }

    #[test]
    fn test_front_mut() {
        let mut list = SingleLinkedList::new();
        assert_eq!(list.front_mut(), None);
        list.push_front(1);
        if let Some(front) = list.front_mut() {
            *front = 10;
        }
        assert_eq!(list.front(), Some(&10));
    }

    #[test]
    fn test_try_pop_front_on_empty() {
        let mut list = SingleLinkedList::<i32>::new();
        assert_eq!(list.try_pop_front(), Err(ListError::Empty));
        assert_eq!(list.len(), 0);
    }

    #[test]
    #[should_panic(expected = "the list is empty")]
    fn test_pop_front_on_empty_panics() {
        let mut list = SingleLinkedList::<i32>::new();
        list.pop_front();
    }

    #[test]
    fn test_clear_twice() {
        let mut list = SingleLinkedList::new();
        list.push_front(1);
        list.clear();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }
}
