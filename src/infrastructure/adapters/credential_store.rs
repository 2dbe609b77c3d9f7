//! 자격 증명 저장소 포트 구현(gcloud CLI).

use anyhow::{Context, Result};

use crate::application::ports::CredentialStore;
use crate::infrastructure::gcloud::{GcloudCli, normalize_value};

/// gcloud의 application-default identity를 자격 증명 저장소로 사용한다.
#[derive(Default)]
pub struct GcloudCredentialStore {
    cli: GcloudCli,
}

impl GcloudCredentialStore {
    pub fn new(cli: GcloudCli) -> Self {
        Self { cli }
    }
}

impl CredentialStore for GcloudCredentialStore {
    fn active_account(&self) -> Result<Option<String>> {
        let out = self.cli.capture(&["config", "get-value", "account"])?;
        Ok(normalize_value(&out))
    }

    fn active_project(&self) -> Result<Option<String>> {
        let out = self.cli.capture(&["config", "get-value", "project"])?;
        Ok(normalize_value(&out))
    }

    fn access_token(&self) -> Result<Option<String>> {
        let out = self
            .cli
            .capture(&["auth", "application-default", "print-access-token"])
            .context("failed to print application-default access token")?;
        Ok(normalize_value(&out))
    }

    fn revoke(&self) -> Result<()> {
        self.cli
            .capture(&["auth", "application-default", "revoke", "--quiet"])
            .map(|_| ())
    }

    fn login(&self, scope: &str) -> Result<()> {
        let scopes = format!("--scopes={scope}");
        // 브라우저를 띄우지 않고 인증 코드를 붙여넣는 방식으로 진행한다.
        self.cli.interactive(&[
            "auth",
            "application-default",
            "login",
            &scopes,
            "--no-launch-browser",
        ])
    }

    fn set_project(&self, project_id: &str) -> Result<()> {
        self.cli
            .capture(&["config", "set", "project", project_id])
            .with_context(|| format!("failed to set active project to {project_id}"))
            .map(|_| ())
    }

    fn set_quota_project(&self, project_id: &str) -> Result<()> {
        self.cli
            .capture(&[
                "auth",
                "application-default",
                "set-quota-project",
                project_id,
            ])
            .with_context(|| format!("failed to set quota project to {project_id}"))
            .map(|_| ())
    }
}
