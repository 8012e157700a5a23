//! Priority ordering for pending video generation requests.
//!
//! Requests wait in a [`RequestQueue`] until a pipeline worker picks them
//! up. Ordering is strict: higher priority first, then earlier submission,
//! then earlier enqueue sequence as the final tiebreak, so two requests
//! never compare equal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod queue;

pub use queue::{QueuedRequest, RequestQueue};
