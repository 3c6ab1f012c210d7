//! `kvdemo lpush|rpush|lrange`.

use anyhow::Result;
use kvdemo_core::store::StoreClient;

/// Which end of the list a push goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushEnd {
    Head,
    Tail,
}

pub async fn run_push(
    client: &mut StoreClient,
    end: PushEnd,
    key: &str,
    values: &[String],
) -> Result<()> {
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let len = match end {
        PushEnd::Head => client.lpush(key, &refs).await?,
        PushEnd::Tail => client.rpush(key, &refs).await?,
    };
    println!("(integer) {len}");
    Ok(())
}

pub async fn run_lrange(client: &mut StoreClient, key: &str, start: isize, stop: isize) -> Result<()> {
    let items = client.lrange(key, start, stop).await?;
    if items.is_empty() {
        println!("(empty list)");
    }
    for (i, item) in items.iter().enumerate() {
        println!("{}) {}", i + 1, item);
    }
    Ok(())
}
