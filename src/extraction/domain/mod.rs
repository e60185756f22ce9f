//! Domain model for text-to-task extraction.
//!
//! The domain holds the validated input, the intermediate candidate record,
//! and the final [`TaskDraft`], keeping the completion service and the
//! system clock outside the domain boundary.

mod candidate;
mod clock_time;
mod draft;
mod error;
mod input;

pub use candidate::TaskCandidate;
pub use clock_time::{ClockTime, Meridiem};
pub use draft::{DUE_DATE_FORMAT, TaskDraft, TaskPriority, TaskStatus};
pub use error::{InputError, ParsePriorityError, ParseStatusError};
pub use input::{InputLimits, TaskInput};
