mod queue;
mod sort;

pub use queue::{Iter, Queue};

use tracing::debug;

use crate::error::{QueueError, Result};

pub trait StringQueue {
    fn insert_head(&mut self, value: &str) -> Result<()>;
    fn insert_tail(&mut self, value: &str) -> Result<()>;
    // copy at most `buf.len() - 1` bytes of the removed value into `buf`, followed by a NUL.
    // `None` or an empty buffer discards the value.
    fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()>;
    fn size(&self) -> usize;
    fn reverse(&mut self);
    fn sort(&mut self);
}

impl StringQueue for Queue {
    fn insert_head(&mut self, value: &str) -> Result<()> {
        Queue::insert_head(self, value)
    }

    fn insert_tail(&mut self, value: &str) -> Result<()> {
        Queue::insert_tail(self, value)
    }

    fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        Queue::remove_head(self, buf)
    }

    fn size(&self) -> usize {
        Queue::size(self)
    }

    fn reverse(&mut self) {
        Queue::reverse(self)
    }

    fn sort(&mut self) {
        Queue::sort(self)
    }
}

// `None` stands for a queue that was never created: every operation is a safe no-op.
impl StringQueue for Option<Queue> {
    fn insert_head(&mut self, value: &str) -> Result<()> {
        present(self)?.insert_head(value)
    }

    fn insert_tail(&mut self, value: &str) -> Result<()> {
        present(self)?.insert_tail(value)
    }

    fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        present(self)?.remove_head(buf)
    }

    fn size(&self) -> usize {
        self.as_ref().map_or(0, Queue::size)
    }

    fn reverse(&mut self) {
        if let Some(queue) = self {
            queue.reverse();
        }
    }

    fn sort(&mut self) {
        if let Some(queue) = self {
            queue.sort();
        }
    }
}

fn present(queue: &mut Option<Queue>) -> Result<&mut Queue> {
    queue.as_mut().ok_or_else(|| {
        debug!("operation on absent queue");
        QueueError::Absent
    })
}
