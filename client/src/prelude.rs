//! Re-exports commonly used types and traits.
//!
//! ```
//! use courier::prelude::*;
//! ```

pub use crate::std::traits::{PublishClient, Transport};
pub use crate::std::types::{attributes, AttributeValue, MessageAttributes, TopicArn};
pub use crate::{Notification, Notifier, NotifierBuilder, NotifierConfig};
