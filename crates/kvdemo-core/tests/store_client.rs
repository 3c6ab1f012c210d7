use kvdemo_core::config::StoreConfig;
use kvdemo_core::control::CancelToken;
use kvdemo_core::demo;
use kvdemo_core::retry::FatalReason;
use kvdemo_core::store::{ConnectionStatus, StoreClient, StoreError};

// ---------------------------------------------------------------------------
// Integration tests — require a running Redis instance (REDIS_HOST/REDIS_PORT
// override the default 127.0.0.1:6379).
// Run with: cargo test -p kvdemo-core -- --ignored
// ---------------------------------------------------------------------------

fn live_config() -> StoreConfig {
    let mut cfg = StoreConfig::default();
    cfg.apply_env_overrides().unwrap();
    cfg
}

async fn connect() -> StoreClient {
    StoreClient::open(&live_config(), &CancelToken::new())
        .await
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn connect_and_ping() {
    let mut client = connect().await;
    assert_eq!(client.status(), ConnectionStatus::Connected);
    assert_eq!(client.ping().await.unwrap(), "PONG");
    client.disconnect();
    assert_eq!(client.status(), ConnectionStatus::Disconnected);
}

#[tokio::test]
#[ignore]
async fn string_commands() {
    let mut client = connect().await;
    let key = "kvdemo:it:string";
    client.del(&[key]).await.unwrap();

    assert_eq!(client.get(key).await.unwrap(), None);
    client.set(key, "a").await.unwrap();
    assert_eq!(client.append(key, "bc").await.unwrap(), 3);
    assert_eq!(client.get(key).await.unwrap().as_deref(), Some("abc"));
    assert!(client.exists(key).await.unwrap());
    assert_eq!(client.ttl(key).await.unwrap(), -1);
    assert!(client.expire(key, 30).await.unwrap());
    assert!(client.ttl(key).await.unwrap() > 0);
    assert_eq!(client.del(&[key]).await.unwrap(), 1);
    assert_eq!(client.ttl(key).await.unwrap(), -2);

    let counter = "kvdemo:it:counter";
    client.del(&[counter]).await.unwrap();
    assert_eq!(client.incr_by(counter, 2).await.unwrap(), 2);
    assert_eq!(client.incr_by(counter, -5).await.unwrap(), -3);
    client.del(&[counter]).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn hash_commands() {
    let mut client = connect().await;
    let key = "kvdemo:it:hash";
    client.del(&[key]).await.unwrap();

    assert!(client.hset(key, "a", "1").await.unwrap());
    assert!(!client.hset(key, "a", "2").await.unwrap());
    client.hset_multiple(key, &[("b", "3"), ("c", "4")]).await.unwrap();
    assert_eq!(client.hget(key, "a").await.unwrap().as_deref(), Some("2"));
    assert!(client.hexists(key, "c").await.unwrap());
    assert!(client.hdel(key, "c").await.unwrap());
    let all = client.hgetall(key).await.unwrap();
    assert_eq!(all.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    client.del(&[key]).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn list_commands() {
    let mut client = connect().await;
    let key = "kvdemo:it:list";
    client.del(&[key]).await.unwrap();

    assert_eq!(client.rpush(key, &["b", "c"]).await.unwrap(), 2);
    assert_eq!(client.lpush(key, &["a"]).await.unwrap(), 3);
    assert_eq!(client.lrange(key, 0, -1).await.unwrap(), vec!["a", "b", "c"]);
    assert_eq!(client.lpop(key).await.unwrap().as_deref(), Some("a"));
    assert_eq!(client.rpop(key).await.unwrap().as_deref(), Some("c"));
    assert_eq!(client.llen(key).await.unwrap(), 1);
    client.del(&[key]).await.unwrap();
    assert_eq!(client.lpop(key).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn demo_cleans_up_after_itself() {
    let mut client = connect().await;
    let prefix = "kvdemo:it:demo:";
    let report = demo::run_demo(&mut client, prefix).await.unwrap();
    assert_eq!(report.steps.first().map(|s| s.name.as_str()), Some("ping"));
    assert_eq!(report.cleaned_up, 5);
    assert!(client.keys(&format!("{prefix}*")).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn refused_port_is_fatal_without_retry() {
    let cfg = StoreConfig {
        port: 1,
        ..live_config()
    };
    let err = StoreClient::open(&cfg, &CancelToken::new())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, StoreError::Connect { .. }));
    assert_eq!(err.fatal_reason(), Some(FatalReason::ConnectionRefused));
}
