//! A library containing the standard building blocks shared by the Courier notification client,
//! such as message and attribute types, the attribute codec, transport traits and errors.
//!
//! Courier Standard deliberately owns no I/O. Everything that talks to the remote pub/sub
//! service is expressed through the [Transport](crate::traits::Transport) and
//! [PublishClient](crate::traits::PublishClient) traits, which are implemented by the
//! embedding application (or by the adapters shipped in the `courier` crate).
//!
//! - [types]: topic ARNs, attribute values and queued message records.
//! - [codecs]: conversion of attribute values into the `{DataType, StringValue}` wire format,
//!   and construction of publish requests from a batch of records.
//! - [traits]: the transport collaborator contracts.
//! - [errors]: the error taxonomy used throughout Courier.

pub mod codecs;
pub mod errors;
pub mod traits;
pub mod types;
