//! Codecs converting Courier's in-memory types into the wire format of the remote pub/sub
//! service.
//!
//! # Attributes
//!
//! The remote service accepts message attributes as a `{DataType, StringValue}` pair. The
//! [format_attribute] function is the single place deciding that representation:
//!
//! | Value                         | DataType       | StringValue                    |
//! |-------------------------------|----------------|--------------------------------|
//! | integer or float              | `Number`       | decimal form, e.g. `10.99`     |
//! | ordered sequence of strings   | `String.Array` | JSON array, order preserved    |
//! | anything else                 | `String`       | the value's string form        |
//!
//! [parse_attribute] performs the reverse conversion.
//!
//! # Publish requests
//!
//! A [PublishRequest] is the payload of a single publish call. A batch of queued records can be
//! delivered as one request via [PublishRequest::joined], which concatenates the message texts
//! with [MESSAGE_SEPARATOR], or as one request per record via [PublishRequest::single].

mod attribute_codec;
mod publish_request;

pub use attribute_codec::*;
pub use publish_request::*;
