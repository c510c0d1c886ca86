use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is absent")]
    Absent,

    #[error("queue is empty")]
    Empty,

    #[error("failed to allocate {len} bytes")]
    Alloc { len: usize },
}

pub type Result<T> = std::result::Result<T, QueueError>;
