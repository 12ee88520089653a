//! Types shared between the notifier, its codecs and its transports.

mod attribute;
mod message;
mod subscription;
mod topic;

pub use attribute::*;
pub use message::*;
pub use subscription::*;
pub use topic::*;
