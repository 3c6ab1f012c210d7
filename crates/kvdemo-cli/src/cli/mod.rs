//! CLI for the kvdemo store facade.

mod commands;
mod interrupt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kvdemo_core::config;
use kvdemo_core::control::CancelToken;
use kvdemo_core::demo::DEFAULT_PREFIX;
use kvdemo_core::store::StoreClient;

use commands::{
    run_del, run_demo, run_get, run_hget, run_hgetall, run_hset, run_keys, run_lrange, run_ping,
    run_policy, run_push, run_set, LastError, PushEnd,
};

/// Top-level CLI for kvdemo.
#[derive(Debug, Parser)]
#[command(name = "kvdemo")]
#[command(about = "kvdemo: typed Redis facade with a reconnect policy", long_about = None)]
pub struct Cli {
    /// Debug-level logs for every crate (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the scripted demo sequence (string, hash, list and utility commands).
    Demo {
        /// Key prefix for everything the demo creates; removed again at the end.
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check the server answers.
    Ping,

    /// Read a string value.
    Get { key: String },

    /// Write a string value.
    Set {
        key: String,
        value: String,
        /// Expire the key after this many seconds.
        #[arg(long, value_name = "SECONDS")]
        ttl: Option<u64>,
    },

    /// Delete one or more keys.
    Del {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Set a hash field.
    Hset {
        key: String,
        field: String,
        value: String,
    },

    /// Read a hash field.
    Hget { key: String, field: String },

    /// Print every field of a hash.
    Hgetall { key: String },

    /// Push values onto the head of a list.
    Lpush {
        key: String,
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Push values onto the tail of a list.
    Rpush {
        key: String,
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print a range of a list (negative indexes count from the tail).
    Lrange {
        key: String,
        #[arg(default_value = "0", allow_negative_numbers = true)]
        start: isize,
        #[arg(default_value = "-1", allow_negative_numbers = true)]
        stop: isize,
    },

    /// List keys matching a glob pattern.
    Keys {
        #[arg(default_value = "*")]
        pattern: String,
    },

    /// Evaluate the reconnect policy for a given history (no connection needed).
    Policy {
        /// Failed attempts so far.
        #[arg(long)]
        attempts: u32,
        /// Time spent retrying so far, in milliseconds.
        #[arg(long, default_value = "0", value_name = "MS")]
        elapsed_ms: u64,
        /// Kind of the last failure.
        #[arg(long, value_enum, default_value_t = LastError::Transport)]
        last_error: LastError,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let CliCommand::Policy {
            attempts,
            elapsed_ms,
            last_error,
        } = self.command
        {
            // Offline: read an existing config for [retry], never create one.
            let cfg = config::load_existing()?;
            run_policy(&cfg.reconnect_policy(), attempts, elapsed_ms, last_error);
            return Ok(());
        }

        let cfg = config::load()?;
        tracing::debug!(url = %cfg.redacted_url(), "loaded config");

        let cancel = CancelToken::new();
        let watcher = interrupt::spawn_interrupt_watcher(cancel.clone());
        let mut client = StoreClient::open(&cfg, &cancel).await?;

        let result = match self.command {
            CliCommand::Demo { prefix, json } => run_demo(&mut client, &prefix, json).await,
            CliCommand::Ping => run_ping(&mut client).await,
            CliCommand::Get { key } => run_get(&mut client, &key).await,
            CliCommand::Set { key, value, ttl } => run_set(&mut client, &key, &value, ttl).await,
            CliCommand::Del { keys } => run_del(&mut client, &keys).await,
            CliCommand::Hset { key, field, value } => {
                run_hset(&mut client, &key, &field, &value).await
            }
            CliCommand::Hget { key, field } => run_hget(&mut client, &key, &field).await,
            CliCommand::Hgetall { key } => run_hgetall(&mut client, &key).await,
            CliCommand::Lpush { key, values } => {
                run_push(&mut client, PushEnd::Head, &key, &values).await
            }
            CliCommand::Rpush { key, values } => {
                run_push(&mut client, PushEnd::Tail, &key, &values).await
            }
            CliCommand::Lrange { key, start, stop } => {
                run_lrange(&mut client, &key, start, stop).await
            }
            CliCommand::Keys { pattern } => run_keys(&mut client, &pattern).await,
            CliCommand::Policy { .. } => Ok(()),
        };

        client.disconnect();
        watcher.abort();
        result
    }
}

#[cfg(test)]
mod tests;
