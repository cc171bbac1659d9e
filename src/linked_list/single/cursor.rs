//! Positions within a [`SingleLinkedList`].
//!
//! A cursor references one of three kinds of position:
//!
//! - the sentinel, "before the first element", handed out by
//!   [`SingleLinkedList::before_begin`];
//! - a real element, which can be dereferenced;
//! - the end, one past the last element, which references no node.
//!
//! [`Cursor`] and [`CursorMut`] are the same [`BasicCursor`] over a shared
//! or an exclusive element reference. A `CursorMut` converts into a
//! `Cursor`, never the other way round, and the two compare equal when they
//! reference the same position.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    error::{ListError, ListResult},
    list::SingleLinkedList,
    node::{Node, Sentinel, Slot},
};

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}

    impl<T> Sealed for &T {}
    impl<T> Sealed for &mut T {}
}

/// The element reference a [`BasicCursor`] hands out.
///
/// Implemented for `&T` and `&mut T` only.
pub trait ElementRef<T>: sealed::Sealed {
    /// Name of the cursor variant, used for formatting.
    const NAME: &'static str;
}

impl<T> ElementRef<T> for &T {
    const NAME: &'static str = "Cursor";
}

impl<T> ElementRef<T> for &mut T {
    const NAME: &'static str = "CursorMut";
}

/// A read-only position within a list.
pub type Cursor<'a, T> = BasicCursor<T, &'a T>;

/// A position within a list that can mutate elements and the chain.
pub type CursorMut<'a, T> = BasicCursor<T, &'a mut T>;

/// The node a cursor references.
pub(crate) enum Anchor<T> {
    BeforeBegin(NonNull<Sentinel<T>>),
    Node(NonNull<Node<T>>),
    End,
}

impl<T> Clone for Anchor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Anchor<T> {}

impl<T> PartialEq for Anchor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Anchor::BeforeBegin(a), Anchor::BeforeBegin(b)) => a == b,
            (Anchor::Node(a), Anchor::Node(b)) => a == b,
            (Anchor::End, Anchor::End) => true,
            _ => false,
        }
    }
}

impl<T> Anchor<T> {
    fn from_next(next: Option<NonNull<Node<T>>>) -> Self {
        next.map_or(Anchor::End, Anchor::Node)
    }

    /// # Safety
    ///
    /// The anchored sentinel or node must be alive for `'v`.
    unsafe fn value<'v>(self) -> ListResult<&'v T> {
        match self {
            Anchor::BeforeBegin(_) => Err(ListError::BeforeBegin),
            Anchor::Node(node) => Ok(unsafe { &node.as_ref().value }),
            Anchor::End => Err(ListError::PastEnd),
        }
    }

    /// # Safety
    ///
    /// The anchored node must be alive for `'v` and not otherwise borrowed.
    unsafe fn value_mut<'v>(self) -> ListResult<&'v mut T> {
        match self {
            Anchor::BeforeBegin(_) => Err(ListError::BeforeBegin),
            Anchor::Node(mut node) => Ok(unsafe { &mut node.as_mut().value }),
            Anchor::End => Err(ListError::PastEnd),
        }
    }

    /// # Safety
    ///
    /// The anchored sentinel or node must be alive for `'v`.
    unsafe fn peek<'v>(self) -> Option<&'v T> {
        let next = match self {
            Anchor::BeforeBegin(head) => unsafe { head.as_ref() }.next(),
            Anchor::Node(node) => unsafe { node.as_ref() }.next(),
            Anchor::End => None,
        };
        next.map(|node| &node.value)
    }

    /// Get the position after this one, reading through shared references.
    ///
    /// # Safety
    ///
    /// The anchored sentinel or node must be alive.
    unsafe fn successor(self) -> ListResult<Self> {
        let next = match self {
            Anchor::BeforeBegin(head) => unsafe { head.as_ref() }.next(),
            Anchor::Node(node) => unsafe { node.as_ref() }.next(),
            Anchor::End => return Err(ListError::PastEnd),
        };
        Ok(Self::from_next(next.map(NonNull::from)))
    }

    /// Get the position after this one, keeping write access to it.
    ///
    /// # Safety
    ///
    /// The anchored sentinel or node must be alive and not otherwise
    /// borrowed.
    unsafe fn successor_mut(self) -> ListResult<Self> {
        let next = match self {
            Anchor::BeforeBegin(mut head) => unsafe { head.as_mut() }.next_ptr(),
            Anchor::Node(mut node) => unsafe { node.as_mut() }.next_ptr(),
            Anchor::End => return Err(ListError::PastEnd),
        };
        Ok(Self::from_next(next))
    }
}

/// A forward cursor over a [`SingleLinkedList`], generic over the element
/// reference `R` it hands out.
///
/// Use the [`Cursor`] and [`CursorMut`] aliases rather than naming this type
/// directly.
pub struct BasicCursor<T, R: ElementRef<T>> {
    list: NonNull<SingleLinkedList<T>>,
    anchor: Anchor<T>,
    _marker: PhantomData<R>,
}

impl<T, R: ElementRef<T>> BasicCursor<T, R> {
    pub(crate) fn new(list: NonNull<SingleLinkedList<T>>, anchor: Anchor<T>) -> Self {
        Self {
            list,
            anchor,
            _marker: PhantomData,
        }
    }

    /// Check if the cursor is one past the last element
    pub fn is_end(&self) -> bool {
        matches!(self.anchor, Anchor::End)
    }

    /// Check if the cursor is at the sentinel, before the first element
    pub fn is_before_begin(&self) -> bool {
        matches!(self.anchor, Anchor::BeforeBegin(_))
    }

    /// Get the element at the cursor, or `None` at the sentinel or the end.
    pub fn current(&self) -> Option<&T> {
        unsafe { self.anchor.value() }.ok()
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Get the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics at the sentinel or the end.
    #[track_caller]
    pub fn get(&self) -> &'a T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("get: {err}"),
        }
    }

    /// Get the element at the cursor, or fail at the sentinel or the end.
    pub fn try_get(&self) -> ListResult<&'a T> {
        unsafe { self.anchor.value() }
    }

    /// Get the element after the cursor, if any
    pub fn peek_next(&self) -> Option<&'a T> {
        unsafe { self.anchor.peek() }
    }

    /// Move the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        if let Err(err) = self.try_move_next() {
            panic!("move_next: {err}");
        }
    }

    /// Move the cursor to the next position, or fail at the end.
    pub fn try_move_next(&mut self) -> ListResult<()> {
        self.anchor = unsafe { self.anchor.successor() }?;
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> CursorMut<'a, T> {
    /// Get the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics at the sentinel or the end.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("get: {err}"),
        }
    }

    /// Get the element at the cursor, or fail at the sentinel or the end.
    pub fn try_get(&self) -> ListResult<&T> {
        unsafe { self.anchor.value() }
    }

    /// Get a mutable reference to the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics at the sentinel or the end.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(value) => value,
            Err(err) => panic!("get_mut: {err}"),
        }
    }

    /// Get a mutable reference to the element at the cursor, or fail at the
    /// sentinel or the end.
    pub fn try_get_mut(&mut self) -> ListResult<&mut T> {
        unsafe { self.anchor.value_mut() }
    }

    /// Turn the cursor into a mutable reference to its element.
    ///
    /// # Panics
    ///
    /// Panics at the sentinel or the end.
    #[track_caller]
    pub fn into_mut(self) -> &'a mut T {
        match unsafe { self.anchor.value_mut() } {
            Ok(value) => value,
            Err(err) => panic!("into_mut: {err}"),
        }
    }

    /// Get the element after the cursor, if any
    pub fn peek_next(&self) -> Option<&T> {
        unsafe { self.anchor.peek() }
    }

    /// Borrow a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.anchor)
    }

    /// Move the cursor to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        if let Err(err) = self.try_move_next() {
            panic!("move_next: {err}");
        }
    }

    /// Move the cursor to the next position, or fail at the end.
    pub fn try_move_next(&mut self) -> ListResult<()> {
        self.anchor = unsafe { self.anchor.successor_mut() }?;
        Ok(())
    }

    /// Insert `value` directly after the cursor and return a cursor at the
    /// new element.
    ///
    /// At the sentinel this is the same as
    /// [`push_front`](SingleLinkedList::push_front).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    #[track_caller]
    pub fn insert_after(mut self, value: T) -> Self {
        if let Err((err, _)) = self.try_insert_after(value) {
            panic!("insert_after: {err}");
        }
        self
    }

    /// Insert `value` directly after the cursor and move onto it.
    ///
    /// Fails with [`ListError::PastEnd`] at the end. The rejected `value` is
    /// handed back next to the error and the list is unchanged.
    pub fn try_insert_after(&mut self, value: T) -> Result<(), (ListError, T)> {
        let inserted = match self.anchor {
            Anchor::BeforeBegin(mut head) => unsafe { head.as_mut() }.link_after(value),
            Anchor::Node(mut node) => unsafe { node.as_mut() }.link_after(value),
            Anchor::End => return Err((ListError::PastEnd, value)),
        };
        unsafe { (*self.list.as_ptr()).len += 1 };
        self.anchor = Anchor::Node(inserted);
        Ok(())
    }

    /// Erase the element after the cursor and return a cursor at the
    /// element that now follows it, which may be the end.
    ///
    /// At the sentinel this is the same as
    /// [`pop_front`](SingleLinkedList::pop_front).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end or has no successor.
    #[track_caller]
    pub fn erase_after(mut self) -> Self {
        if let Err(err) = self.try_erase_after() {
            panic!("erase_after: {err}");
        }
        self
    }

    /// Erase the element after the cursor and move onto its replacement.
    ///
    /// Fails without touching the list if there is nothing to erase.
    pub fn try_erase_after(&mut self) -> ListResult<()> {
        self.unlink_next()?;
        self.try_move_next()
    }

    /// Remove the element after the cursor and return it. The cursor stays
    /// where it is.
    ///
    /// Returns `None` whenever there is nothing to remove: at the end, at the
    /// last element, and at the sentinel of an empty list. Use
    /// [`try_erase_after`](Self::try_erase_after) to tell these apart.
    pub fn remove_after(&mut self) -> Option<T> {
        self.unlink_next().ok()
    }

    fn unlink_next(&mut self) -> ListResult<T> {
        let value = match self.anchor {
            Anchor::BeforeBegin(mut head) => unsafe { head.as_mut() }
                .unlink_after()
                .ok_or(ListError::Empty)?,
            Anchor::Node(mut node) => unsafe { node.as_mut() }
                .unlink_after()
                .ok_or(ListError::NoSuccessor)?,
            Anchor::End => return Err(ListError::PastEnd),
        };
        unsafe { (*self.list.as_ptr()).len -= 1 };
        Ok(value)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.list, cursor.anchor)
    }
}

impl<T, R, S> PartialEq<BasicCursor<T, S>> for BasicCursor<T, R>
where
    R: ElementRef<T>,
    S: ElementRef<T>,
{
    fn eq(&self, other: &BasicCursor<T, S>) -> bool {
        self.anchor == other.anchor
    }
}

impl<T, R: ElementRef<T>> Eq for BasicCursor<T, R> {}

impl<T: fmt::Debug, R: ElementRef<T>> fmt::Debug for BasicCursor<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple(R::NAME);
        match self.current() {
            Some(value) => tuple.field(value),
            None if self.is_end() => tuple.field(&format_args!("end")),
            None => tuple.field(&format_args!("before-begin")),
        };
        tuple.finish()
    }
}

unsafe impl<T, R: ElementRef<T> + Send> Send for BasicCursor<T, R> {}
unsafe impl<T, R: ElementRef<T> + Sync> Sync for BasicCursor<T, R> {}
