//! AI model backends for MathCast.
//!
//! Implements the [`mathcast_interface::MathModel`] seam over any
//! OpenAI-compatible chat completion endpoint, with exponential-backoff
//! retry for transient failures and per-operation usage accounting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod prompts;
mod usage;

pub use client::{ChatClient, ChatConfig};
pub use prompts::extract_code_block;
pub use usage::UsageTracker;
