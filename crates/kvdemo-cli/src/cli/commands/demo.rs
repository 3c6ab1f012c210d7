//! `kvdemo demo` – run the scripted demo sequence.

use anyhow::Result;
use kvdemo_core::demo;
use kvdemo_core::store::StoreClient;

pub async fn run_demo(client: &mut StoreClient, prefix: &str, json: bool) -> Result<()> {
    let report = demo::run_demo(client, prefix).await?;
    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }
    println!("Demo against {} (prefix {:?})", client.url(), report.prefix);
    for (i, step) in report.steps.iter().enumerate() {
        println!("{:>2}. {:<8} {}", i + 1, step.name, step.detail);
    }
    Ok(())
}
