//! 자격 증명 폐기 -> 재발급 -> 프로젝트 바인딩 -> 검증 유스케이스.
//!
//! 각 단계는 "이미 없음" 상태를 허용하므로 반복 실행해도 같은 결과가 된다.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::application::ports::{ConfigRepository, CredentialCache, CredentialStore, Reporter};
use crate::domain::reset::{CLOUD_PLATFORM_SCOPE, ResetPhase, ResetReport};

/// 5단계 자격 증명 재설정 유스케이스.
pub struct ResetCredentialUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub credential_store: &'a dyn CredentialStore,
    pub credential_cache: &'a dyn CredentialCache,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ResetCredentialUseCase<'a> {
    /// 대상 프로젝트(미지정 시 설정값)로 재설정을 수행한다.
    /// - 1/2단계 실패는 이미 정리된 상태로 보고 계속 진행한다.
    /// - 3단계 이후 실패는 즉시 오류로 반환한다.
    pub fn execute(&self, target_project: Option<&str>) -> Result<ResetReport> {
        let project_id = match target_project.map(str::trim).filter(|v| !v.is_empty()) {
            Some(project) => project.to_string(),
            None => self.config_repo.load().project_id,
        };

        self.reporter
            .section(&format!("Credential reset (project: {project_id})"));

        let revoked = self.revoke();
        let purged_files = self.purge();
        self.reacquire()?;
        self.bind(&project_id)?;
        self.verify()?;

        Ok(ResetReport {
            project_id,
            revoked,
            purged_files,
        })
    }

    fn revoke(&self) -> bool {
        let phase = ResetPhase::Revoke;
        self.announce(phase, "revoking cached application-default credential");
        match self.credential_store.revoke() {
            Ok(()) => {
                self.announce(phase, "revoked");
                true
            }
            Err(err) => {
                self.tolerate(phase, &format!("nothing to revoke ({err:#})"));
                false
            }
        }
    }

    fn purge(&self) -> Vec<PathBuf> {
        let phase = ResetPhase::Purge;
        self.announce(phase, "removing cached credential files");
        let report = match self.credential_cache.purge() {
            Ok(report) => report,
            Err(err) => {
                self.tolerate(phase, &format!("credential cache not accessible ({err:#})"));
                return Vec::new();
            }
        };

        if report.removed.is_empty() && report.failed.is_empty() {
            self.announce(phase, "no cached credential files found");
        }
        for path in &report.removed {
            self.announce(phase, &format!("removed {}", path.display()));
        }
        for (path, reason) in &report.failed {
            self.tolerate(phase, &format!("could not remove {}: {reason}", path.display()));
        }
        report.removed
    }

    fn reacquire(&self) -> Result<()> {
        let phase = ResetPhase::Reacquire;
        self.announce(
            phase,
            "starting interactive login; open the printed URL and paste the authorization code",
        );
        // 운영자가 코드를 붙여넣을 때까지 타임아웃 없이 대기한다.
        self.credential_store
            .login(CLOUD_PLATFORM_SCOPE)
            .map_err(|err| self.fatal(phase, err))?;
        self.announce(phase, "login completed");
        Ok(())
    }

    fn bind(&self, project_id: &str) -> Result<()> {
        let phase = ResetPhase::Bind;
        self.announce(phase, &format!("binding project {project_id}"));
        self.credential_store
            .set_project(project_id)
            .map_err(|err| self.fatal(phase, err))?;
        self.announce(phase, &format!("active project set to {project_id}"));

        self.credential_store
            .set_quota_project(project_id)
            .map_err(|err| self.fatal(phase, err))?;
        self.announce(phase, &format!("quota project set to {project_id}"));
        Ok(())
    }

    fn verify(&self) -> Result<()> {
        let phase = ResetPhase::Verify;
        self.announce(phase, "requesting a fresh access token");
        match self.credential_store.access_token() {
            Ok(Some(_)) => {
                self.announce(phase, "access token acquired; credential reset complete");
                Ok(())
            }
            Ok(None) => Err(self.fatal(
                phase,
                anyhow!("no access token was returned after login"),
            )),
            Err(err) => Err(self.fatal(phase, err)),
        }
    }

    fn announce(&self, phase: ResetPhase, message: &str) {
        self.reporter.status(&phase.to_string(), message);
    }

    fn tolerate(&self, phase: ResetPhase, message: &str) {
        debug_assert!(phase.tolerates_failure());
        tracing::debug!(phase = phase.name(), "{message}");
        self.reporter.status(&phase.to_string(), message);
    }

    fn fatal(&self, phase: ResetPhase, err: anyhow::Error) -> anyhow::Error {
        self.reporter.error(&phase.to_string(), &format!("{err:#}"));
        err.context(format!(
            "credential reset failed at phase {phase}; re-run `adcguard reset` to start over"
        ))
    }
}
