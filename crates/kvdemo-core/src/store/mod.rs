//! Typed facade over the data store's command set.
//!
//! [`StoreClient`] owns the single connection and its [`ConnectionStatus`].
//! Connecting goes through the reconnect policy in [`crate::retry`]; each
//! command logs its result and hands failures back as [`StoreError`].

mod client;
mod error;
mod hashes;
mod lists;
mod status;
mod strings;
mod utility;

pub use client::StoreClient;
pub use error::StoreError;
pub use status::ConnectionStatus;
