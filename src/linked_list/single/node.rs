use alloc::boxed::Box;
use core::ptr::NonNull;

/// The owning link from one slot to the next node in the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A heap allocated node of a singly linked list.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }

    /// Borrow the value and the outgoing link separately.
    pub(crate) fn split_mut(&mut self) -> (&mut T, &mut Link<T>) {
        (&mut self.value, &mut self.next)
    }
}

/// The value-less node that precedes the first element of a list.
///
/// A sentinel lives inline in the list and is never freed on its own, so
/// "after the sentinel" is the front of the list.
pub(crate) struct Sentinel<T> {
    next: Link<T>,
}

impl<T> Sentinel<T> {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}

/// A slot that owns the link to a successor node.
///
/// Both [`Node`] and [`Sentinel`] are slots, which lets insertion and
/// removal work the same way at the front of the list and anywhere else.
pub(crate) trait Slot<T> {
    /// Get the owning link to the successor
    fn link(&self) -> &Link<T>;

    /// Get a mutable reference to the owning link to the successor
    fn link_mut(&mut self) -> &mut Link<T>;

    /// Get the successor node, if any
    fn next(&self) -> Option<&Node<T>> {
        self.link().as_deref()
    }

    /// Get a non-owning pointer to the successor node, if any
    fn next_ptr(&mut self) -> Option<NonNull<Node<T>>> {
        self.link_mut().as_deref_mut().map(NonNull::from)
    }

    /// Splice a new node holding `value` directly after this slot.
    ///
    /// Returns a pointer to the inserted node.
    fn link_after(&mut self, value: T) -> NonNull<Node<T>> {
        let link = self.link_mut();
        let node = Box::new(Node::new(value, link.take()));
        NonNull::from(&mut **link.insert(node))
    }

    /// Unlink the successor of this slot and hand its value back.
    fn unlink_after(&mut self) -> Option<T> {
        let link = self.link_mut();
        let mut node = link.take()?;
        *link = node.next.take();
        let Node { value, .. } = *node;
        Some(value)
    }
}

impl<T> Slot<T> for Node<T> {
    fn link(&self) -> &Link<T> {
        &self.next
    }

    fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }
}

impl<T> Slot<T> for Sentinel<T> {
    fn link(&self) -> &Link<T> {
        &self.next
    }

    fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }
}
