//! 유스케이스 테스트용 포트 가짜 구현.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use crate::application::config::EmbeddingConfig;
use crate::application::ports::{
    ConfigRepository, CredentialCache, CredentialStore, PredictionEndpoint, PurgeReport, Reporter,
};
use crate::domain::probe::{EndpointReply, PredictRequest};

#[derive(Default)]
pub struct FixedConfigRepository {
    pub config: EmbeddingConfig,
}

impl FixedConfigRepository {
    pub fn with_project(project_id: &str) -> Self {
        Self {
            config: EmbeddingConfig {
                project_id: project_id.to_string(),
                ..EmbeddingConfig::default()
            },
        }
    }
}

impl ConfigRepository for FixedConfigRepository {
    fn load(&self) -> EmbeddingConfig {
        self.config.clone()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

#[derive(Default)]
struct StoreState {
    cached: bool,
    active_project: Option<String>,
    quota_project: Option<String>,
    login_scopes: Vec<String>,
}

/// gcloud 동작을 흉내 내는 메모리 저장소.
/// 캐시된 자격 증명이 없으면 revoke가 실패하고 토큰도 비어 있다.
pub struct FakeCredentialStore {
    state: Mutex<StoreState>,
    identity_lookups: AtomicUsize,
    login_grants_token: bool,
    login_fails: bool,
    quota_fails: bool,
}

impl FakeCredentialStore {
    pub const TOKEN: &'static str = "ya29.fake-access-token";

    fn with_cached(cached: bool) -> Self {
        Self {
            state: Mutex::new(StoreState {
                cached,
                ..StoreState::default()
            }),
            identity_lookups: AtomicUsize::new(0),
            login_grants_token: true,
            login_fails: false,
            quota_fails: false,
        }
    }

    pub fn logged_in() -> Self {
        Self::with_cached(true)
    }

    pub fn logged_out() -> Self {
        Self::with_cached(false)
    }

    pub fn with_login_yielding_no_token(mut self) -> Self {
        self.login_grants_token = false;
        self
    }

    pub fn with_login_failure(mut self) -> Self {
        self.login_fails = true;
        self
    }

    pub fn with_quota_failure(mut self) -> Self {
        self.quota_fails = true;
        self
    }

    pub fn forget_credential(&self) {
        self.state.lock().unwrap().cached = false;
    }

    pub fn active_project_value(&self) -> Option<String> {
        self.state.lock().unwrap().active_project.clone()
    }

    pub fn quota_project_value(&self) -> Option<String> {
        self.state.lock().unwrap().quota_project.clone()
    }

    pub fn login_scopes(&self) -> Vec<String> {
        self.state.lock().unwrap().login_scopes.clone()
    }

    pub fn identity_lookups(&self) -> usize {
        self.identity_lookups.load(Ordering::SeqCst)
    }
}

impl CredentialStore for FakeCredentialStore {
    fn active_account(&self) -> Result<Option<String>> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(Some("operator@example.com".to_string()))
    }

    fn active_project(&self) -> Result<Option<String>> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.active_project_value())
    }

    fn access_token(&self) -> Result<Option<String>> {
        let cached = self.state.lock().unwrap().cached;
        Ok(cached.then(|| Self::TOKEN.to_string()))
    }

    fn revoke(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.cached {
            bail!("no credential to revoke");
        }
        state.cached = false;
        Ok(())
    }

    fn login(&self, scope: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.login_scopes.push(scope.to_string());
        if self.login_fails {
            bail!("login aborted by operator");
        }
        if self.login_grants_token {
            state.cached = true;
        }
        Ok(())
    }

    fn set_project(&self, project_id: &str) -> Result<()> {
        self.state.lock().unwrap().active_project = Some(project_id.to_string());
        Ok(())
    }

    fn set_quota_project(&self, project_id: &str) -> Result<()> {
        if self.quota_fails {
            bail!("permission denied on project {project_id}");
        }
        self.state.lock().unwrap().quota_project = Some(project_id.to_string());
        Ok(())
    }
}

/// 첫 purge에서만 파일을 "삭제"하는 디스크 캐시.
#[derive(Default)]
pub struct FakeCredentialCache {
    files: Mutex<Vec<PathBuf>>,
    broken: bool,
}

impl FakeCredentialCache {
    pub fn with_files(paths: &[&str]) -> Self {
        Self {
            files: Mutex::new(paths.iter().map(PathBuf::from).collect()),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
            broken: true,
        }
    }
}

impl CredentialCache for FakeCredentialCache {
    fn purge(&self) -> Result<PurgeReport> {
        if self.broken {
            bail!("permission denied");
        }
        let removed = std::mem::take(&mut *self.files.lock().unwrap());
        Ok(PurgeReport {
            removed,
            failed: Vec::new(),
        })
    }
}

enum EndpointBehavior {
    Reply(u16, String),
    Fail(String),
}

pub struct FakeEndpoint {
    behavior: EndpointBehavior,
    calls: AtomicUsize,
    last: Mutex<Option<(String, String, PredictRequest)>>,
}

impl FakeEndpoint {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(EndpointBehavior::Reply(status, body.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(EndpointBehavior::Fail(message.to_string()))
    }

    fn new(behavior: EndpointBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, String, PredictRequest)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionEndpoint for FakeEndpoint {
    async fn predict(
        &self,
        url: &str,
        token: &str,
        payload: &PredictRequest,
    ) -> Result<EndpointReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((url.to_string(), token.to_string(), payload.clone()));
        match &self.behavior {
            EndpointBehavior::Reply(status, body) => Ok(EndpointReply {
                status: *status,
                body: body.clone(),
            }),
            EndpointBehavior::Fail(message) => Err(anyhow!(message.clone())),
        }
    }
}

/// 출력 내용을 기록하는 리포터. 각 줄은 `"{scope} {message}"` 형식이다.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    scopes: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// status/error 호출 순서대로의 scope 목록.
    pub fn scopes(&self) -> Vec<String> {
        self.scopes.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn section(&self, name: &str) {
        self.lines.lock().unwrap().push(format!("== {name}"));
    }

    fn kv(&self, key: &str, value: &str) {
        self.lines.lock().unwrap().push(format!("{key} {value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.scopes.lock().unwrap().push(scope.to_string());
        self.lines.lock().unwrap().push(format!("{scope} {message}"));
    }

    fn error(&self, scope: &str, message: &str) {
        self.scopes.lock().unwrap().push(scope.to_string());
        self.errors.lock().unwrap().push(format!("{scope} {message}"));
    }

    fn raw(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
