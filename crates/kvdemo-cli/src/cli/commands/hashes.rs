//! `kvdemo hset|hget|hgetall`.

use anyhow::Result;
use kvdemo_core::store::StoreClient;

pub async fn run_hset(client: &mut StoreClient, key: &str, field: &str, value: &str) -> Result<()> {
    let added = client.hset(key, field, value).await?;
    println!("(integer) {}", u8::from(added));
    Ok(())
}

pub async fn run_hget(client: &mut StoreClient, key: &str, field: &str) -> Result<()> {
    match client.hget(key, field).await? {
        Some(value) => println!("{value}"),
        None => println!("(nil)"),
    }
    Ok(())
}

pub async fn run_hgetall(client: &mut StoreClient, key: &str) -> Result<()> {
    let fields = client.hgetall(key).await?;
    if fields.is_empty() {
        println!("(empty hash)");
    }
    for (field, value) in fields {
        println!("{field:<16} {value}");
    }
    Ok(())
}
