mod sort;

use natqueue::Queue;

use crate::util::c_str;
use crate::util::queue::*;

#[test]
fn test_queue() {
    let mut queue = Queue::new();
    assert_eq!(queue.is_empty(), true);

    queue.insert_tail("2").unwrap();
    queue.insert_tail("3").unwrap();
    queue.insert_head("1").unwrap();

    assert_eq!(queue.is_empty(), false);
    assert_eq!(queue.size(), 3);
    assert_eq!(queue.head(), Some("1"));
    assert_eq!(queue.tail(), Some("3"));

    assert_eq!(queue.pop_head(), Some("1".to_string()));
    assert_eq!(queue.pop_head(), Some("2".to_string()));
    assert_eq!(queue.head(), Some("3"));
    assert_eq!(queue.tail(), Some("3"));
    assert_eq!(queue.pop_head(), Some("3".to_string()));

    assert_eq!(queue.is_empty(), true);
    assert_eq!(queue.head(), None);
    assert_eq!(queue.tail(), None);
    assert_eq!(queue.pop_head(), None);
}

#[test]
fn test_queue_fifo() {
    test_simple_fifo(Queue::new());
}

#[test]
fn test_queue_lifo() {
    test_simple_lifo(Queue::new());
}

#[test]
fn test_deep_queue() {
    test_deep_sequential_queue(Queue::new());
}

#[test]
fn test_queue_random_ops() {
    test_random_ops(Queue::new());
}

#[test]
fn test_insert_copies_value() {
    let mut queue = Queue::new();
    let mut value = String::from("abc");

    queue.insert_tail(&value).unwrap();
    value.push('d');

    assert_eq!(queue.head(), Some("abc"));
}

#[test]
fn test_tail_after_reinsert() {
    let mut queue = Queue::new();

    queue.insert_head("a").unwrap();
    assert_eq!(queue.pop_head(), Some("a".to_string()));

    queue.insert_tail("b").unwrap();
    queue.insert_tail("c").unwrap();
    assert_eq!(queue.head(), Some("b"));
    assert_eq!(queue.tail(), Some("c"));
}

#[test]
fn test_remove_head_truncates() {
    let mut queue = Queue::new();
    queue.insert_tail("abcdef").unwrap();
    queue.insert_tail("xyz").unwrap();
    queue.insert_tail("discarded").unwrap();
    queue.insert_tail("also discarded").unwrap();

    let mut buf = [0xffu8; 4];
    assert!(queue.remove_head(Some(&mut buf[..])).is_ok());
    assert_eq!(&buf, b"abc\0");

    let mut buf = [0xffu8; 8];
    assert!(queue.remove_head(Some(&mut buf[..])).is_ok());
    assert_eq!(c_str(&buf), "xyz");

    assert!(queue.remove_head(None).is_ok());
    let mut empty = [0u8; 0];
    assert!(queue.remove_head(Some(&mut empty[..])).is_ok());
    assert_eq!(queue.size(), 0);
}

#[test]
fn test_iter() {
    let mut queue = Queue::new();
    for value in &["x", "y", "z"] {
        queue.insert_tail(value).unwrap();
    }

    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    assert_eq!((&queue).into_iter().count(), 3);
    assert_eq!(format!("{:?}", queue), r#"["x", "y", "z"]"#);
}
