use std::{cmp::Ordering, ptr};

use super::queue::{Link, Node};
use crate::natcmp::natcmp;
use crate::some_or;

pub(super) fn merge_sort(head: Link) -> Link {
    let mut head = match head {
        Some(node) if node.next.is_some() => node,
        short => return short,
    };

    let right = split(&mut head);

    merge(merge_sort(Some(head)), merge_sort(right))
}

// Cut the list after its midpoint. `slow` advances one link for every two of `fast`,
// so it stops at the end of the left half.
fn split(head: &mut Node) -> Link {
    let mut slow: *mut Node = head;

    unsafe {
        let mut fast = as_ptr(&(*slow).next);

        while let Some(next) = fast.as_ref().and_then(|node| node.next.as_deref()) {
            let middle: *mut Node = some_or!((*slow).next.as_deref_mut(), break);
            slow = middle;
            fast = as_ptr(&next.next);
        }

        (*slow).next.take()
    }
}

fn as_ptr(link: &Link) -> *const Node {
    link.as_deref().map_or(ptr::null(), |node| node as *const Node)
}

// ties go to `left`
fn right_first(left: &Node, right: &Node) -> bool {
    natcmp(&right.value, &left.value) == Ordering::Less
}

fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged = None;
    let mut cursor = &mut merged;

    loop {
        let node = match (left.take(), right.take()) {
            (Some(mut l), Some(mut r)) => {
                if right_first(&l, &r) {
                    right = r.next.take();
                    left = Some(l);
                    r
                } else {
                    left = l.next.take();
                    right = Some(r);
                    l
                }
            }
            (rest, None) | (None, rest) => {
                *cursor = rest;
                return merged;
            }
        };

        cursor = &mut cursor.insert(node).next;
    }
}
