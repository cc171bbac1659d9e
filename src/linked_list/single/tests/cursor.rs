extern crate std;

use std::format;
use std::vec;
use std::vec::Vec;

use expect_test::expect;

use crate::linked_list::single::{
    cursor::{Cursor, CursorMut},
    error::ListError,
    list::SingleLinkedList,
};

fn values<T: Clone>(list: &SingleLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Get a mutable cursor at the element with the given index.
fn cursor_at(list: &mut SingleLinkedList<i32>, index: usize) -> CursorMut<'_, i32> {
    let mut cursor = list.begin_mut();
    for _ in 0..index {
        cursor.move_next();
    }
    cursor
}

#[test]
fn test_begin_end_walk() {
    let list = SingleLinkedList::from([1, 2, 3]);
    let mut cursor = list.begin();
    let mut seen = vec![];
    while cursor != list.end() {
        seen.push(*cursor.get());
        cursor.move_next();
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(cursor.is_end());
    assert_eq!(cursor.try_move_next(), Err(ListError::PastEnd));
}

#[test]
fn test_empty_list_positions() {
    let list = SingleLinkedList::<i32>::new();
    assert_eq!(list.begin(), list.end());
    assert_ne!(list.before_begin(), list.begin());

    let mut before = list.before_begin();
    assert!(before.is_before_begin());
    assert_eq!(before.peek_next(), None);
    before.move_next();
    assert_eq!(before, list.end());
}

#[test]
fn test_insert_after_before_begin_is_push_front() {
    let mut inserted = SingleLinkedList::from([2, 3]);
    let mut pushed = inserted.clone();

    let cursor = inserted.before_begin_mut().insert_after(1);
    assert_eq!(cursor.get(), &1);
    pushed.push_front(1);

    assert_eq!(inserted, pushed);
    assert_eq!(inserted.len(), 3);
}

#[test]
fn test_erase_after_before_begin_is_pop_front() {
    let mut erased = SingleLinkedList::from([1, 2, 3]);
    let mut popped = erased.clone();

    let cursor = erased.before_begin_mut().erase_after();
    assert_eq!(cursor.get(), &2);
    assert_eq!(popped.pop_front(), 1);

    assert_eq!(erased, popped);
    assert_eq!(erased.len(), 2);
}

#[test]
fn test_insert_after_middle_and_tail() {
    let mut list = SingleLinkedList::from([1, 3]);

    let cursor = cursor_at(&mut list, 0).insert_after(2);
    assert_eq!(cursor.get(), &2);
    assert_eq!(cursor.peek_next(), Some(&3));

    let mut cursor = cursor_at(&mut list, 2).insert_after(4);
    cursor.move_next();
    assert!(cursor.is_end());

    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_chained_insertion_builds_in_order() {
    let mut list = SingleLinkedList::new();
    let mut cursor = list.before_begin_mut();
    for i in 1..=4 {
        cursor = cursor.insert_after(i);
    }
    assert_eq!(values(&list), vec![1, 2, 3, 4]);
}

#[test]
fn test_erase_after_returns_successor() {
    let mut list = SingleLinkedList::from([1, 2, 3, 4]);

    let cursor = cursor_at(&mut list, 0).erase_after();
    assert_eq!(cursor.get(), &3);
    assert_eq!(values(&list), vec![1, 3, 4]);

    let cursor = cursor_at(&mut list, 1).erase_after();
    assert!(cursor.is_end());
    assert_eq!(values(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_insert_then_erase_round_trip() {
    let original = SingleLinkedList::from([10, 20, 30]);
    for index in 0..=original.len() {
        let mut list = original.clone();
        if index == 0 {
            list.before_begin_mut().insert_after(99);
            list.before_begin_mut().erase_after();
        } else {
            cursor_at(&mut list, index - 1).insert_after(99);
            cursor_at(&mut list, index - 1).erase_after();
        }
        assert_eq!(list, original);
        assert_eq!(list.len(), original.len());
    }
}

#[test]
fn test_remove_after_keeps_position() {
    let mut list = SingleLinkedList::from([1, 2, 3]);
    let mut cursor = list.begin_mut();
    assert_eq!(cursor.remove_after(), Some(2));
    assert_eq!(cursor.remove_after(), Some(3));
    assert_eq!(cursor.remove_after(), None);
    assert_eq!(cursor.get(), &1);
    assert_eq!(values(&list), vec![1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_after_with_nothing_to_remove() {
    let mut empty = SingleLinkedList::<i32>::new();
    assert_eq!(empty.before_begin_mut().remove_after(), None);
    assert_eq!(empty.end_mut().remove_after(), None);

    let mut list = SingleLinkedList::from([1, 2]);
    assert_eq!(list.end_mut().remove_after(), None);
    assert_eq!(cursor_at(&mut list, 1).remove_after(), None);
    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);

    assert_eq!(list.before_begin_mut().remove_after(), Some(1));
    assert_eq!(values(&list), vec![2]);
}

#[test]
fn test_try_erase_after_errors_leave_list_unchanged() {
    let mut empty = SingleLinkedList::<i32>::new();
    assert_eq!(empty.before_begin_mut().try_erase_after(), Err(ListError::Empty));
    assert_eq!(empty.end_mut().try_erase_after(), Err(ListError::PastEnd));

    let mut list = SingleLinkedList::from([1, 2]);
    assert_eq!(cursor_at(&mut list, 1).try_erase_after(), Err(ListError::NoSuccessor));
    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_try_insert_after_end() {
    let mut list = SingleLinkedList::from([1]);
    assert_eq!(list.end_mut().try_insert_after(2), Err((ListError::PastEnd, 2)));
    assert_eq!(values(&list), vec![1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_try_insert_after_end_returns_value() {
    let mut list = SingleLinkedList::<Vec<i32>>::new();
    let mut cursor = list.end_mut();
    let (err, rejected) = cursor.try_insert_after(vec![1, 2, 3]).unwrap_err();
    assert_eq!(err, ListError::PastEnd);
    assert_eq!(rejected, vec![1, 2, 3]);

    let mut cursor = list.before_begin_mut();
    assert_eq!(cursor.try_insert_after(rejected), Ok(()));
    assert_eq!(cursor.get(), &vec![1, 2, 3]);
    assert_eq!(list.len(), 1);
}

#[test]
#[should_panic(expected = "the cursor is at the end position")]
fn test_insert_after_end_panics() {
    let mut list = SingleLinkedList::from([1]);
    list.end_mut().insert_after(2);
}

#[test]
#[should_panic(expected = "the cursor has no successor to erase")]
fn test_erase_after_last_panics() {
    let mut list = SingleLinkedList::from([1]);
    list.begin_mut().erase_after();
}

#[test]
#[should_panic(expected = "the list is empty")]
fn test_erase_after_before_begin_on_empty_panics() {
    let mut list = SingleLinkedList::<i32>::new();
    list.before_begin_mut().erase_after();
}

#[test]
#[should_panic(expected = "the cursor is at the end position")]
fn test_move_next_past_end_panics() {
    let list = SingleLinkedList::<i32>::new();
    list.end().move_next();
}

#[test]
#[should_panic(expected = "the cursor is at the end position")]
fn test_get_at_end_panics() {
    let list = SingleLinkedList::from([1]);
    list.end().get();
}

#[test]
fn test_dereference_errors() {
    let mut list = SingleLinkedList::from([1]);
    assert_eq!(list.before_begin().try_get(), Err(ListError::BeforeBegin));
    assert_eq!(list.end().try_get(), Err(ListError::PastEnd));
    assert_eq!(list.before_begin().current(), None);
    assert_eq!(list.begin().current(), Some(&1));
    assert_eq!(list.end_mut().try_get_mut(), Err(ListError::PastEnd));
}

#[test]
fn test_mutate_through_cursor() {
    let mut list = SingleLinkedList::from([1, 2, 3]);

    let mut cursor = list.begin_mut();
    *cursor.get_mut() = 10;
    cursor.move_next();
    let second = cursor.into_mut();
    *second += 10;

    assert_eq!(values(&list), vec![10, 12, 3]);
}

#[test]
fn test_cursor_equality_across_variants() {
    let mut list = SingleLinkedList::from([1, 2]);

    let mut cursor = list.begin_mut();
    cursor.move_next();
    let view = cursor.as_cursor();
    assert_eq!(cursor, view);
    assert_eq!(view, cursor);

    let shared: Cursor<'_, i32> = cursor.into();
    assert_eq!(shared.get(), &2);
    let copy = shared;
    assert_eq!(copy, shared);
}

#[test]
fn test_cursors_compare_by_node() {
    let list = SingleLinkedList::from([1, 1]);
    let mut first = list.begin();
    let mut second = list.begin();
    second.move_next();

    assert_eq!(first.get(), second.get());
    assert_ne!(first, second);
    first.move_next();
    assert_eq!(first, second);
}

#[test]
fn test_cursors_of_different_lists() {
    let a = SingleLinkedList::from([1]);
    let b = SingleLinkedList::from([1]);
    assert_ne!(a.before_begin(), b.before_begin());
    assert_ne!(a.begin(), b.begin());
    assert_eq!(a.end(), b.end());
}

#[test]
fn test_cursor_debug() {
    let mut list = SingleLinkedList::from([7, 8]);
    expect!["Cursor(before-begin)"].assert_eq(&format!("{:?}", list.before_begin()));
    expect!["Cursor(7)"].assert_eq(&format!("{:?}", list.begin()));
    expect!["Cursor(end)"].assert_eq(&format!("{:?}", list.end()));
    expect!["CursorMut(7)"].assert_eq(&format!("{:?}", list.begin_mut()));
}
