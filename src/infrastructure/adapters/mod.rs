//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod credential_cache;
mod credential_store;
mod prediction_endpoint;
mod reporter;

pub use config_repository::EnvFileConfigRepository;
pub use credential_cache::{CLOUDSDK_CONFIG_ENV, GcloudCredentialCache};
pub use credential_store::GcloudCredentialStore;
pub use prediction_endpoint::HttpPredictionEndpoint;
pub use reporter::ConsoleReporter;
