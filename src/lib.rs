pub mod error;
pub mod harness;
pub mod natcmp;
pub mod queue;
pub mod util;

pub use error::{QueueError, Result};
pub use queue::{Queue, StringQueue};
