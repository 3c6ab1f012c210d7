//! Scripted walk through the facade's command groups.
//!
//! The demo writes a fixed set of keys under a prefix and deletes exactly those
//! at the end, so other data under the same prefix is left alone.

use serde::Serialize;

use crate::store::{StoreClient, StoreError};

pub const DEFAULT_PREFIX: &str = "kvdemo:";

/// One executed step and what it observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoStep {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub prefix: String,
    pub steps: Vec<DemoStep>,
    /// Keys deleted during cleanup.
    pub cleaned_up: usize,
}

impl DemoReport {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, name: &str, detail: impl Into<String>) {
        let detail = detail.into();
        tracing::info!(step = name, %detail, "demo step");
        self.steps.push(DemoStep {
            name: name.to_string(),
            detail,
        });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Key under the demo prefix.
pub fn demo_key(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}

/// Escape `KEYS` glob metacharacters so `text` matches literally.
pub fn escape_glob(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// The keys the demo writes. Cleanup deletes exactly these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoKeys {
    pub greeting: String,
    pub session: String,
    pub counter: String,
    pub user: String,
    pub queue: String,
}

impl DemoKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            greeting: demo_key(prefix, "greeting"),
            session: demo_key(prefix, "session"),
            counter: demo_key(prefix, "visits"),
            user: demo_key(prefix, "user:1"),
            queue: demo_key(prefix, "queue"),
        }
    }

    pub fn all(&self) -> [&str; 5] {
        [
            &self.greeting,
            &self.session,
            &self.counter,
            &self.user,
            &self.queue,
        ]
    }
}

/// Run the scripted sequence. The client must be connected.
///
/// The demo's own keys are deleted afterwards, also when a step fails; nothing
/// else under the prefix is touched.
pub async fn run_demo(client: &mut StoreClient, prefix: &str) -> Result<DemoReport, StoreError> {
    let keys = DemoKeys::new(prefix);
    let mut report = DemoReport::new(prefix);

    let steps = run_steps(client, prefix, &keys, &mut report).await;
    let cleanup = client.del(&keys.all()).await;

    if let Err(e) = steps {
        if let Err(cleanup_err) = &cleanup {
            tracing::warn!(error = %cleanup_err, "demo cleanup failed after step error");
        }
        return Err(e);
    }
    report.cleaned_up = cleanup?;
    report.record(
        "cleanup",
        format!("deleted {} demo key(s)", report.cleaned_up),
    );
    Ok(report)
}

async fn run_steps(
    client: &mut StoreClient,
    prefix: &str,
    keys: &DemoKeys,
    report: &mut DemoReport,
) -> Result<(), StoreError> {
    let DemoKeys {
        greeting,
        session,
        counter,
        user,
        queue,
    } = keys;

    let pong = client.ping().await?;
    report.record("ping", pong);

    client.set(greeting, "hello").await?;
    let len = client.append(greeting, ", world").await?;
    let value = client.get(greeting).await?;
    report.record(
        "string",
        format!("{greeting} = {:?} (len {len})", value.unwrap_or_default()),
    );

    client.set_ex(session, "token-abc", 60).await?;
    let ttl = client.ttl(session).await?;
    report.record("expiry", format!("{session} ttl {ttl}s"));

    client.incr_by(counter, 1).await?;
    let visits = client.incr_by(counter, 5).await?;
    report.record("counter", format!("{counter} = {visits}"));

    client
        .hset_multiple(user, &[("name", "Ada"), ("lang", "rust")])
        .await?;
    let added = client.hset(user, "role", "admin").await?;
    let lang = client.hget(user, "lang").await?;
    let removed = client.hdel(user, "role").await?;
    let fields = client.hgetall(user).await?;
    report.record(
        "hash",
        format!(
            "{user}: role added={added} removed={removed} lang={:?} fields={:?}",
            lang.unwrap_or_default(),
            fields
        ),
    );

    client.rpush(queue, &["job-1", "job-2"]).await?;
    client.lpush(queue, &["job-0"]).await?;
    let items = client.lrange(queue, 0, -1).await?;
    let head = client.lpop(queue).await?;
    let tail = client.rpop(queue).await?;
    let left = client.llen(queue).await?;
    report.record(
        "list",
        format!(
            "{queue}: {items:?} popped {:?}/{:?}, {left} left",
            head.unwrap_or_default(),
            tail.unwrap_or_default()
        ),
    );

    let matching = client.keys(&format!("{}*", escape_glob(prefix))).await?;
    let size = client.dbsize().await?;
    report.record(
        "keys",
        format!("{} key(s) under {prefix:?}, {size} in database", matching.len()),
    );

    let present = client.exists(greeting).await?;
    report.record("exists", format!("{greeting} present: {present}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_key_prepends_prefix() {
        assert_eq!(demo_key("kvdemo:", "queue"), "kvdemo:queue");
        assert_eq!(demo_key("", "queue"), "queue");
    }

    #[test]
    fn escape_glob_quotes_metacharacters() {
        assert_eq!(escape_glob("kvdemo:"), "kvdemo:");
        assert_eq!(escape_glob("a*b?"), "a\\*b\\?");
        assert_eq!(escape_glob("[x]\\"), "\\[x\\]\\\\");
        assert_eq!(escape_glob(""), "");
    }

    #[test]
    fn demo_keys_stay_under_prefix() {
        let keys = DemoKeys::new("t:");
        assert_eq!(keys.greeting, "t:greeting");
        assert_eq!(keys.user, "t:user:1");
        assert!(keys.all().iter().all(|k| k.starts_with("t:")));
        assert_eq!(keys.all().len(), 5);
    }

    #[test]
    fn report_serializes_steps_in_order() {
        let mut report = DemoReport::new("p:");
        report.record("ping", "PONG");
        report.record("string", "p:greeting = \"hello\"");
        report.cleaned_up = 1;
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["prefix"], "p:");
        assert_eq!(json["steps"][0]["name"], "ping");
        assert_eq!(json["steps"][1]["detail"], "p:greeting = \"hello\"");
        assert_eq!(json["cleaned_up"], 1);
    }
}
