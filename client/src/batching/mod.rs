//! Data structures backing the notifier's queue.
//!
//! A [MessageBatch] holds records produced under a single [BatchContext]. The notifier never
//! pushes a record produced under another context into a non-empty batch: a context change
//! commits the batch first.

mod context;
mod message_batch;

pub(crate) use context::*;
pub(crate) use message_batch::*;
