//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::config::EmbeddingConfig;
use crate::application::ports::ConfigRepository;

/// KEY=value settings 파일 기반 설정 저장소 어댑터.
#[derive(Default)]
pub struct EnvFileConfigRepository {
    /// `--env-file`로 지정된 경로(없으면 환경변수/기본 경로)
    explicit_path: Option<PathBuf>,
}

impl EnvFileConfigRepository {
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }
}

impl ConfigRepository for EnvFileConfigRepository {
    fn load(&self) -> EmbeddingConfig {
        EmbeddingConfig::load(self.explicit_path.as_deref())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        EmbeddingConfig::inspect_pretty_json(self.explicit_path.as_deref())
    }
}
