//! Shared fixtures for token service tests

use std::sync::Arc;

use crate::repositories::MockTokenRepository;
use crate::services::token::{KeyManager, TokenService, TokenServiceConfig};


pub(super) const TEST_PRIVATE_KEY: &str = include_str!("../../../../keys/rsa_private_test.pem");
pub(super) const TEST_PUBLIC_KEY: &str = include_str!("../../../../keys/rsa_public_test.pem");
pub(super) const OTHER_PRIVATE_KEY: &str =
    include_str!("../../../../keys/rsa_private_other_test.pem");
pub(super) const OTHER_PUBLIC_KEY: &str =
    include_str!("../../../../keys/rsa_public_other_test.pem");
pub(super) const TEST_REFRESH_SECRET: &str = "anotsorandomtestsecret";

pub(super) const ID_EXPIRY_SECS: i64 = 15 * 60;
pub(super) const REFRESH_EXPIRY_SECS: i64 = 3 * 24 * 3600;

pub(super) fn test_keys() -> KeyManager {
    KeyManager::from_pem_strings(TEST_PRIVATE_KEY, TEST_PUBLIC_KEY, TEST_REFRESH_SECRET)
        .expect("Failed to create key manager")
}

pub(super) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        id_token_expiry_secs: ID_EXPIRY_SECS,
        refresh_token_expiry_secs: REFRESH_EXPIRY_SECS,
        leeway_secs: 0,
    }
}

pub(super) fn create_test_service(
    repository: Arc<MockTokenRepository>,
) -> TokenService<Arc<MockTokenRepository>> {
    TokenService::new(repository, test_keys(), test_config())
        .expect("Failed to create token service")
}
