//! `kvdemo get|set|del`.

use anyhow::Result;
use kvdemo_core::store::StoreClient;

pub async fn run_get(client: &mut StoreClient, key: &str) -> Result<()> {
    match client.get(key).await? {
        Some(value) => println!("{value}"),
        None => println!("(nil)"),
    }
    Ok(())
}

pub async fn run_set(
    client: &mut StoreClient,
    key: &str,
    value: &str,
    ttl: Option<u64>,
) -> Result<()> {
    match ttl {
        Some(seconds) => client.set_ex(key, value, seconds).await?,
        None => client.set(key, value).await?,
    }
    println!("OK");
    Ok(())
}

pub async fn run_del(client: &mut StoreClient, keys: &[String]) -> Result<()> {
    let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let removed = client.del(&refs).await?;
    println!("(integer) {removed}");
    Ok(())
}
