//! Integration tests for the Redis refresh token store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p account_infra --test redis_token_store_integration -- --ignored

use std::time::Duration;

use account_core::repositories::TokenRepository;
use account_infra::cache::{CacheConfig, RedisTokenRepository};
use uuid::Uuid;

fn config() -> CacheConfig {
    let mut config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    config.key_prefix = "test:refresh_token".to_string();
    config
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_health_check() {
    let store = RedisTokenRepository::connect(&config()).await.unwrap();

    assert!(store.client().health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_set_and_delete_refresh_token() {
    let store = RedisTokenRepository::connect(&config()).await.unwrap();
    let user_id = Uuid::new_v4().to_string();
    let token_id = Uuid::new_v4().simple().to_string();

    store
        .set_refresh_token(&user_id, &token_id, Duration::from_secs(60))
        .await
        .unwrap();
    assert!(store.is_active(&user_id, &token_id).await.unwrap());
    assert!(store.is_refresh_token_active(&user_id, &token_id).await.unwrap());

    let ttl = store
        .client()
        .ttl(&store.token_key(&user_id, &token_id))
        .await
        .unwrap()
        .unwrap();
    assert!(ttl > 0 && ttl <= 60);

    store.delete_refresh_token(&user_id, &token_id).await.unwrap();
    assert!(!store.is_active(&user_id, &token_id).await.unwrap());

    // Deleting again is not an error
    store.delete_refresh_token(&user_id, &token_id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_refresh_token_expires() {
    let store = RedisTokenRepository::connect(&config()).await.unwrap();
    let user_id = Uuid::new_v4().to_string();
    let token_id = Uuid::new_v4().simple().to_string();

    store
        .set_refresh_token(&user_id, &token_id, Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert!(!store.is_active(&user_id, &token_id).await.unwrap());
}
