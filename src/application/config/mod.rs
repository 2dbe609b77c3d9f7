//! 애플리케이션이 사용하는 설정 스키마와 해석 규칙(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.
//! 여기서는 이미 읽은 settings 텍스트를 해석만 한다.

use serde::Serialize;

pub const KEY_PROJECT_ID: &str = "GCP_PROJECT_ID";
pub const KEY_LOCATION: &str = "GCP_EMBEDDING_LOCATION";
pub const KEY_MODEL: &str = "GCP_EMBEDDING_MODEL";
pub const KEY_API_ENDPOINT: &str = "GCP_EMBEDDING_API_ENDPOINT";

pub const DEFAULT_PROJECT_ID: &str = "vertex-embeddings-prod";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "text-embedding-004";

/// 해석이 끝난 임베딩 엔드포인트 설정. 실행마다 새로 계산한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddingConfig {
    pub project_id: String,
    /// 리전 코드(예: us-central1)
    pub location: String,
    /// 대상 임베딩 모델 식별자
    pub model: String,
    /// `https://{location}-aiplatform.googleapis.com` 대신 사용할 base URL(선택)
    pub api_endpoint: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self::resolve(&SettingsFile::default())
    }
}

impl EmbeddingConfig {
    /// settings 값을 우선하고, 없거나 비어 있으면 기본값을 사용한다.
    pub fn resolve(settings: &SettingsFile) -> Self {
        Self::resolve_with_sources(settings).into_config()
    }

    /// 값과 출처를 함께 해석한다(설정 점검용).
    pub fn resolve_with_sources(settings: &SettingsFile) -> ResolvedSettings {
        ResolvedSettings {
            project_id: ResolvedValue::pick(settings.get(KEY_PROJECT_ID), DEFAULT_PROJECT_ID),
            location: ResolvedValue::pick(settings.get(KEY_LOCATION), DEFAULT_LOCATION),
            model: ResolvedValue::pick(settings.get(KEY_MODEL), DEFAULT_MODEL),
            api_endpoint: settings
                .get(KEY_API_ENDPOINT)
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    /// 리전별 Vertex AI base URL 또는 override 값.
    pub fn api_base(&self) -> String {
        match &self.api_endpoint {
            Some(base) => base.clone(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    /// 퍼블리셔 모델 `:predict` 엔드포인트 URL.
    pub fn predict_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            self.api_base(),
            self.project_id,
            self.location,
            self.model
        )
    }
}

/// 설정 값의 출처.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Settings,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

impl ResolvedValue {
    fn pick(explicit: Option<&str>, default: &str) -> Self {
        match explicit {
            Some(value) if !value.is_empty() => Self {
                value: value.to_string(),
                source: ValueSource::Settings,
            },
            _ => Self {
                value: default.to_string(),
                source: ValueSource::Default,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    pub project_id: ResolvedValue,
    pub location: ResolvedValue,
    pub model: ResolvedValue,
    pub api_endpoint: Option<String>,
}

impl ResolvedSettings {
    pub fn into_config(self) -> EmbeddingConfig {
        EmbeddingConfig {
            project_id: self.project_id.value,
            location: self.location.value,
            model: self.model.value,
            api_endpoint: self.api_endpoint,
        }
    }
}

/// `KEY=value` 형식 settings 파일의 할당 목록(파일 순서 유지).
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    assignments: Vec<(String, String)>,
}

impl SettingsFile {
    /// settings 텍스트를 해석한다. 형식이 맞지 않는 줄은 조용히 건너뛴다.
    pub fn parse(raw: &str) -> Self {
        let assignments = raw.lines().filter_map(parse_assignment).collect();
        Self { assignments }
    }

    /// 같은 키가 여러 번 나오면 마지막 할당이 이긴다.
    /// 마지막 할당이 빈 값이면 "미지정"과 같이 취급된다.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.assignments
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

fn parse_assignment(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_string(), unquote(value)))
}

fn unquote(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
