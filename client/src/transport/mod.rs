//! Transports a [Notifier](crate::Notifier) can deliver through.
//!
//! Courier does not talk to the network itself. Applications either implement
//! [Transport](crate::std::traits::Transport) directly, or implement the lower level
//! [PublishClient](crate::std::traits::PublishClient) (one remote call per method) and wrap it
//! in an [ApiTransport], which decides how a batch maps onto publish calls.
//!
//! [MemoryTransport] keeps everything in memory, which makes it suitable for tests and dry
//! runs.

mod api;
mod memory;

pub use api::*;
pub use memory::*;
