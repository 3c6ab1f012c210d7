//! `kvdemo ping|keys`.

use anyhow::Result;
use kvdemo_core::store::StoreClient;

pub async fn run_ping(client: &mut StoreClient) -> Result<()> {
    let reply = client.ping().await?;
    println!("{reply}");
    Ok(())
}

pub async fn run_keys(client: &mut StoreClient, pattern: &str) -> Result<()> {
    let keys = client.keys(pattern).await?;
    if keys.is_empty() {
        println!("(no keys)");
    }
    for key in keys {
        println!("{key}");
    }
    Ok(())
}
