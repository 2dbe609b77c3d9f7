//! 캐시된 자격 증명으로 예측 엔드포인트를 1회 호출해 유효성을 판정하는 유스케이스.

use crate::application::ports::{ConfigRepository, CredentialStore, PredictionEndpoint, Reporter};
use crate::domain::probe::{PredictRequest, ProbeOutcome};

const SCOPE: &str = "probe";

/// 자격 증명 프로브 유스케이스.
pub struct ProbeCredentialUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub credential_store: &'a dyn CredentialStore,
    pub endpoint: &'a dyn PredictionEndpoint,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ProbeCredentialUseCase<'a> {
    /// 현재 상태를 그대로 보고한다. 재시도하지 않는다.
    /// - `quiet`이면 안내/진단 출력 없이 판정만 반환한다.
    pub async fn execute(&self, quiet: bool) -> ProbeOutcome {
        let config = self.config_repo.load();
        let url = config.predict_url();

        if !quiet {
            // 운영자 확인용 정보일 뿐 판정에는 사용하지 않는다.
            self.reporter.section("Credential probe");
            self.reporter
                .kv("account", &display_or_unset(self.credential_store.active_account()));
            self.reporter
                .kv("project", &display_or_unset(self.credential_store.active_project()));
            self.reporter.kv("target", &config.project_id);
            self.reporter.kv("model", &config.model);
            self.reporter.kv("endpoint", &url);
        }

        let token = match self.credential_store.access_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                if !quiet {
                    self.reporter.error(
                        SCOPE,
                        "no application-default access token available (run `adcguard reset`)",
                    );
                    self.report_result(&ProbeOutcome::NoCredential);
                }
                return ProbeOutcome::NoCredential;
            }
            Err(err) => {
                tracing::debug!(error = %format!("{err:#}"), "access token lookup failed");
                if !quiet {
                    self.reporter
                        .error(SCOPE, &format!("failed to obtain access token: {err:#}"));
                    self.report_result(&ProbeOutcome::NoCredential);
                }
                return ProbeOutcome::NoCredential;
            }
        };

        let outcome = match self
            .endpoint
            .predict(&url, &token, &PredictRequest::probe())
            .await
        {
            Ok(reply) => ProbeOutcome::from_reply(reply),
            Err(err) => ProbeOutcome::EndpointRejected {
                status: None,
                detail: format!("{err:#}"),
            },
        };

        if !quiet {
            self.report_outcome(&outcome);
            self.report_result(&outcome);
        }
        outcome
    }

    fn report_result(&self, outcome: &ProbeOutcome) {
        self.reporter.raw(&format!(
            "result: {} (exit {})",
            outcome.label(),
            outcome.exit_code()
        ));
    }

    fn report_outcome(&self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Valid => {
                self.reporter
                    .status(SCOPE, "endpoint accepted the credential (HTTP 200)");
            }
            ProbeOutcome::EndpointRejected {
                status: Some(status),
                detail,
            } => {
                self.reporter
                    .error(SCOPE, &format!("endpoint rejected the probe (HTTP {status})"));
                self.reporter.error(SCOPE, detail_or_placeholder(detail));
            }
            ProbeOutcome::EndpointRejected {
                status: None,
                detail,
            } => {
                self.reporter.error(SCOPE, "request to endpoint failed");
                self.reporter.error(SCOPE, detail_or_placeholder(detail));
            }
            ProbeOutcome::NoCredential => {}
        }
    }
}

fn display_or_unset(value: anyhow::Result<Option<String>>) -> String {
    match value {
        Ok(Some(v)) => v,
        Ok(None) => "(unset)".to_string(),
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), "identity lookup failed");
            "(unset)".to_string()
        }
    }
}

fn detail_or_placeholder(detail: &str) -> &str {
    let trimmed = detail.trim();
    if trimmed.is_empty() {
        "(empty response body)"
    } else {
        trimmed
    }
}
