use std::{fmt, mem, ptr};

use tracing::{debug, trace};

use super::sort::merge_sort;
use crate::error::{QueueError, Result};
use crate::harness::check_alloc;
use crate::some_or;

pub(super) type Link = Option<Box<Node>>;

// singly linked queue of strings, insertable at both ends and removable at the head
pub struct Queue {
    head: Link,
    tail: *mut Node, // last node of `head`'s chain, null iff the queue is empty
    size: usize,
}

pub(super) struct Node {
    pub(super) value: Box<str>,
    pub(super) next: Link,
}

// nodes are reachable only through `head`, so the queue can move between threads
unsafe impl Send for Queue {}

impl Node {
    pub(super) fn new(value: Box<str>) -> Node {
        Node { value, next: None }
    }

    // node first, then a private copy of `value`; nothing is kept if either fails
    fn alloc(value: &str) -> Result<Box<Node>> {
        check_alloc(mem::size_of::<Node>())?;
        let value = copy_str(value)?;

        Ok(Box::new(Node::new(value)))
    }
}

fn copy_str(s: &str) -> Result<Box<str>> {
    check_alloc(s.len())?;

    let mut buf = String::new();
    buf.try_reserve_exact(s.len())
        .map_err(|_| QueueError::Alloc { len: s.len() })?;
    buf.push_str(s);

    Ok(buf.into_boxed_str())
}

// C-style bounded copy: at most `buf.len() - 1` bytes, then a NUL
fn copy_truncated(value: &str, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    let len = value.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&value.as_bytes()[..len]);
    buf[len] = 0;
}

impl Queue {
    pub fn new() -> Queue {
        Queue {
            head: None,
            tail: ptr::null_mut(),
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&str> {
        self.head.as_deref().map(|node| &*node.value)
    }

    pub fn tail(&self) -> Option<&str> {
        unsafe { self.tail.as_ref().map(|node| &*node.value) }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let mut node = Node::alloc(value).map_err(|e| {
            debug!(error = %e, "insert_head failed");
            e
        })?;

        node.next = self.head.take();
        let node: *mut Node = &mut **self.head.insert(node);

        if self.tail.is_null() {
            self.tail = node;
        }
        self.size += 1;

        Ok(())
    }

    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let node = Node::alloc(value).map_err(|e| {
            debug!(error = %e, "insert_tail failed");
            e
        })?;

        let slot = if self.tail.is_null() {
            &mut self.head
        } else {
            unsafe { &mut (*self.tail).next }
        };

        self.tail = &mut **slot.insert(node) as *mut Node;
        self.size += 1;

        Ok(())
    }

    /// Removes the head element and hands its value to the caller.
    pub fn pop_head(&mut self) -> Option<String> {
        let mut top = self.head.take()?;
        self.head = top.next.take();

        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.size -= 1;

        Some(top.value.into_string())
    }

    /// Removes the head element, copying as much of it as fits into `buf`.
    ///
    /// At most `buf.len() - 1` bytes are copied and followed by a NUL byte.
    /// Longer values are silently truncated; `None` or an empty buffer
    /// discards the value entirely.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        let value = some_or!(self.pop_head(), {
            debug!("remove_head on empty queue");
            return Err(QueueError::Empty);
        });

        if let Some(buf) = buf {
            copy_truncated(&value, buf);
        }

        Ok(())
    }

    /// Reverses the queue in place by relinking the existing nodes.
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }

        trace!(size = self.size, "reverse");

        unsafe {
            let head: *mut Node = some_or!(self.head.as_deref_mut(), return);
            let tail = self.tail;

            // node that ends up just before the old head
            let mut last = tail;

            // move every node between head and tail to right after tail, one at a time
            while !ptr::eq(next_of(head), tail) {
                let mut moved = some_or!((*head).next.take(), break);
                (*head).next = moved.next.take();
                moved.next = (*tail).next.take();

                let moved: *mut Node = &mut **(*tail).next.insert(moved);
                if last == tail {
                    last = moved;
                }
            }

            // head -> tail -> ... -> last remains; rotate the old head to the end
            let mut old_head = some_or!(self.head.take(), return);
            self.head = old_head.next.take();
            self.tail = &mut **(*last).next.insert(old_head) as *mut Node;
        }
    }

    /// Stable ascending sort in natural order.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }

        trace!(size = self.size, "sort");

        self.head = merge_sort(self.head.take());
        self.relocate_tail();
    }

    // merge sort leaves `tail` stale; walk to the new last node
    fn relocate_tail(&mut self) {
        let mut node: *mut Node = some_or!(self.head.as_deref_mut(), {
            self.tail = ptr::null_mut();
            return;
        });

        unsafe {
            while let Some(next) = (*node).next.as_deref_mut() {
                node = next as *mut Node;
            }
        }

        self.tail = node;
    }
}

unsafe fn next_of(node: *const Node) -> *const Node {
    (*node)
        .next
        .as_deref()
        .map_or(ptr::null(), |next| next as *const Node)
}

impl Default for Queue {
    fn default() -> Self {
        Queue::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        let mut node = self.head.take();

        while let Some(mut inside) = node {
            node = inside.next.take();
        }
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &*node.value
        })
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
