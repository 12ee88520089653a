//! A client-side notification dispatcher for remote pub/sub topics.
//!
//! Publishing every notification as soon as it is produced costs one network call per message.
//! Courier instead queues messages in a [Notifier], and delivers ("commits") the queue as a
//! single batch whenever the context the messages were produced under changes, or when the
//! caller explicitly asks for it.
//!
//! The context of a batch is the recipient topic, the subject line and the message attributes.
//! Every message in the queue shares the same context, which lets a transport deliver the
//! whole batch in one call without mixing unrelated notifications.
//!
//! # Example
//!
//! ```
//! use courier::prelude::*;
//! use courier::transport::MemoryTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> courier::std::errors::Result<()> {
//! let transport = MemoryTransport::new();
//! let mut notifier = Notifier::builder(transport.clone())
//!     .recipient("arn:aws:sns:us-west-2:000000000000:orders")
//!     .subject("Order updates")
//!     .build()?;
//!
//! notifier.send("order 1 shipped").await?;
//! notifier.send("order 2 shipped").await?;
//!
//! // A new subject commits the two queued messages before queueing the next one.
//! notifier.send(Notification::new("order 3 cancelled").subject("Cancellations")).await?;
//! assert_eq!(transport.published().len(), 1);
//!
//! notifier.finish().await?;
//! assert_eq!(transport.published().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Transports
//!
//! Courier owns no network code. A [Transport](crate::std::traits::Transport) implementation is
//! injected when building the notifier; [ApiTransport](crate::transport::ApiTransport) adapts any
//! single-call [PublishClient](crate::std::traits::PublishClient), and
//! [MemoryTransport](crate::transport::MemoryTransport) records calls in memory.

mod batching;
mod builder;
mod config;
mod logging;
mod notification;
mod notifier;
mod provisioning;

pub mod prelude;
pub mod transport;

pub use builder::*;
pub use config::*;
pub use notification::*;
pub use notifier::*;

pub mod std {
    pub use courier_std::*;
}
