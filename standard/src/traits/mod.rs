//! Exports the interfaces a remote pub/sub service must be adapted to for use with Courier.

pub mod transport;

pub use transport::*;
