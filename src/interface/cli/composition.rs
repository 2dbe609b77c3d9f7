//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::probe_credential::ProbeCredentialUseCase;
use crate::application::usecases::reset_credential::ResetCredentialUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, EnvFileConfigRepository, GcloudCredentialCache, GcloudCredentialStore,
    HttpPredictionEndpoint,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: EnvFileConfigRepository,
    credential_store: GcloudCredentialStore,
    credential_cache: GcloudCredentialCache,
    endpoint: HttpPredictionEndpoint,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppComposition {
    /// settings 파일 경로(선택)를 받아 실행 조합을 생성한다.
    pub fn new(env_file: Option<PathBuf>) -> Self {
        Self {
            config_repo: EnvFileConfigRepository::new(env_file),
            credential_store: GcloudCredentialStore::default(),
            credential_cache: GcloudCredentialCache::default(),
            endpoint: HttpPredictionEndpoint::default(),
            reporter: ConsoleReporter::new(),
        }
    }

    /// 자격 증명 프로브 유스케이스를 생성한다.
    pub fn probe_usecase(&self) -> ProbeCredentialUseCase<'_> {
        ProbeCredentialUseCase {
            config_repo: &self.config_repo,
            credential_store: &self.credential_store,
            endpoint: &self.endpoint,
            reporter: &self.reporter,
        }
    }

    /// 자격 증명 재설정 유스케이스를 생성한다.
    pub fn reset_usecase(&self) -> ResetCredentialUseCase<'_> {
        ResetCredentialUseCase {
            config_repo: &self.config_repo,
            credential_store: &self.credential_store,
            credential_cache: &self.credential_cache,
            reporter: &self.reporter,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
