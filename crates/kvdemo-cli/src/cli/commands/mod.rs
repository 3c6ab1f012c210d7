//! CLI command handlers, grouped by command family.

mod demo;
mod hashes;
mod lists;
mod policy;
mod strings;
mod utility;

pub use demo::run_demo;
pub use hashes::{run_hget, run_hgetall, run_hset};
pub use lists::{run_lrange, run_push, PushEnd};
pub use policy::{run_policy, LastError};
pub use strings::{run_del, run_get, run_set};
pub use utility::{run_keys, run_ping};
