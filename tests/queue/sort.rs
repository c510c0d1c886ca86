use natqueue::Queue;

use crate::util::queue::*;

fn queue_of(values: &[&str]) -> Queue {
    let mut queue = Queue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

#[test]
fn test_sort() {
    test_simple_sort(Queue::new());

    let mut queue = queue_of(&["file10.txt", "file1.txt", "file2.txt", "File3.txt", "file01.txt"]);
    queue.sort();

    assert_eq!(
        queue.iter().collect::<Vec<_>>(),
        vec!["File3.txt", "file01.txt", "file1.txt", "file2.txt", "file10.txt"]
    );
    assert_eq!(queue.tail(), Some("file10.txt"));

    queue.insert_tail("zzz").unwrap();
    assert_eq!(queue.tail(), Some("zzz"));
    assert_eq!(queue.size(), 6);
}

#[test]
fn test_sort_trivial() {
    let mut queue = Queue::new();
    queue.sort();
    assert_eq!(queue.size(), 0);

    queue.insert_tail("only").unwrap();
    queue.sort();
    assert_eq!(queue.head(), Some("only"));
    assert_eq!(queue.tail(), Some("only"));
}

#[test]
fn test_sort_stable() {
    // whitespace is ignored by the comparison, so these are all equal keys
    let mut queue = queue_of(&["b", "a 1", "a1", "a  1", "a"]);
    queue.sort();

    assert_eq!(
        queue.iter().collect::<Vec<_>>(),
        vec!["a", "a 1", "a1", "a  1", "b"]
    );
}

#[test]
fn test_sort_idempotent() {
    let mut queue = queue_of(&["x3", "x20", "x1", "y", "x100", "x2"]);

    queue.sort();
    let once: Vec<String> = queue.iter().map(String::from).collect();

    queue.sort();
    let twice: Vec<String> = queue.iter().map(String::from).collect();

    assert_eq!(once, twice);
}

#[test]
fn test_sort_reversed_input() {
    let mut queue = Queue::new();

    for n in 0..1_000 {
        queue.insert_head(&format!("n{}", n)).unwrap();
    }

    queue.sort();

    for n in 0..1_000 {
        assert_eq!(queue.pop_head(), Some(format!("n{}", n)));
    }
}

#[test]
fn test_deep_sort() {
    let mut queue = Queue::new();

    for n in (0..300_000).rev() {
        queue.insert_tail(&format!("x{}", n)).unwrap();
    }

    queue.sort();
    assert_eq!(queue.head(), Some("x0"));
    assert_eq!(queue.tail(), Some("x299999"));

    for n in 0..300_000 {
        assert_eq!(queue.pop_head(), Some(format!("x{}", n)));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_random_sort_queue() {
    test_random_sort(Queue::new());
}
