//! The error type of list and cursor operations.

/// Result type for fallible list and cursor operations
pub type ListResult<T> = Result<T, ListError>;

/// A violated precondition of a list or cursor operation.
///
/// The panicking operations report these as their panic message; the
/// `try_` variants return them and leave the list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Removal from a list with no elements
    #[error("the list is empty")]
    Empty,

    /// Advance, dereference or insertion at the end position
    #[error("the cursor is at the end position")]
    PastEnd,

    /// Dereference of the before-begin position
    #[error("the cursor is at the before-begin position")]
    BeforeBegin,

    /// Erasure after the last element
    #[error("the cursor has no successor to erase")]
    NoSuccessor,
}
