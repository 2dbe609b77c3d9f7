//! HTTP 호출 공용 유틸리티.

use std::time::Duration;

use reqwest::Client;

/// 프로브 요청 1건에 허용하는 최대 시간.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 기본 HTTP 클라이언트를 생성한다.
pub fn build_http_client() -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("adcguard/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
