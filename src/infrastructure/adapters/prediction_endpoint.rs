//! 예측 엔드포인트 포트 구현 어댑터(HTTP).

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::application::ports::PredictionEndpoint;
use crate::domain::probe::{EndpointReply, PredictRequest};
use crate::infrastructure::http::build_http_client;

/// reqwest로 `:predict`를 1회 호출하는 어댑터.
pub struct HttpPredictionEndpoint {
    client: Client,
}

impl Default for HttpPredictionEndpoint {
    fn default() -> Self {
        Self {
            client: build_http_client(),
        }
    }
}

#[async_trait]
impl PredictionEndpoint for HttpPredictionEndpoint {
    async fn predict(
        &self,
        url: &str,
        token: &str,
        payload: &PredictRequest,
    ) -> Result<EndpointReply> {
        let url = Url::parse(url).with_context(|| format!("invalid endpoint URL: {url}"))?;
        tracing::debug!(%url, "sending probe request");

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .context("failed to send probe request")?;

        // 판정은 상태 코드만으로 내린다. 본문을 읽지 못해도 응답은 유효하다.
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|err| {
            tracing::debug!(status, error = %err, "failed to read probe response body");
            format!("(failed to read response body: {err})")
        });
        tracing::debug!(status, "probe response received");

        Ok(EndpointReply { status, body })
    }
}
