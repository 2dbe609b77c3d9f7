//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::EmbeddingConfig;
use crate::domain::probe::{EndpointReply, PredictRequest};

/// settings 파일 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    /// 항상 성공한다. 파일이 없거나 읽을 수 없으면 기본값으로 해석된다.
    fn load(&self) -> EmbeddingConfig;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 자격 증명 저장소(gcloud 등) 포트.
///
/// 활성 계정/프로젝트 같은 프로세스 전역 상태는 이 포트를 통해서만 읽고 쓴다.
/// 값을 내부에 캐시하지 않는다.
pub trait CredentialStore: Send + Sync {
    /// 현재 활성 계정. 없으면 `None`.
    fn active_account(&self) -> Result<Option<String>>;
    /// 현재 활성 프로젝트. 없으면 `None`.
    fn active_project(&self) -> Result<Option<String>>;
    /// application-default identity의 새 bearer access token. 없으면 `None`.
    fn access_token(&self) -> Result<Option<String>>;
    /// 캐시된 application-default 자격 증명을 폐기한다.
    fn revoke(&self) -> Result<()>;
    /// 대화형 로그인 플로우를 실행한다.
    ///
    /// 운영자 입력(인증 코드 붙여넣기)이 끝날 때까지 **타임아웃 없이** 블로킹한다.
    /// 중단은 프로세스 외부 인터럽트로만 가능하다.
    fn login(&self, scope: &str) -> Result<()>;
    fn set_project(&self, project_id: &str) -> Result<()>;
    /// application-default 자격 증명의 quota(과금) 프로젝트를 지정한다.
    fn set_quota_project(&self, project_id: &str) -> Result<()>;
}

/// 디스크 자격 증명 캐시 정리 결과.
#[derive(Debug, Clone, Default)]
pub struct PurgeReport {
    pub removed: Vec<PathBuf>,
    /// 삭제에 실패한 파일과 사유
    pub failed: Vec<(PathBuf, String)>,
}

/// 디스크에 캐시된 자격 증명 파일을 정리하는 포트.
pub trait CredentialCache: Send + Sync {
    /// 현재/레거시 ADC 파일을 삭제한다. 파일이 없으면 빈 보고서를 반환한다.
    fn purge(&self) -> Result<PurgeReport>;
}

/// 원격 예측 엔드포인트 호출 포트.
#[async_trait]
pub trait PredictionEndpoint: Send + Sync {
    /// 요청 1회만 보낸다(재시도 없음). 전송 실패만 `Err`이며 HTTP 상태는 그대로 돌려준다.
    async fn predict(
        &self,
        url: &str,
        token: &str,
        payload: &PredictRequest,
    ) -> Result<EndpointReply>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    /// 진단 메시지(stderr).
    fn error(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
