//! 디스크 자격 증명 캐시 포트 구현(gcloud 설정 디렉터리).

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{CredentialCache, PurgeReport};

/// gcloud 설정 디렉터리를 바꾸는 환경변수(gcloud와 동일).
pub const CLOUDSDK_CONFIG_ENV: &str = "CLOUDSDK_CONFIG";
const ADC_FILE: &str = "application_default_credentials.json";
const LEGACY_DIR: &str = "legacy_credentials";
const LEGACY_ADC_FILE: &str = "adc.json";

/// gcloud 설정 디렉터리 아래의 ADC 파일을 관리한다.
pub struct GcloudCredentialCache {
    config_dir: Option<PathBuf>,
}

impl Default for GcloudCredentialCache {
    fn default() -> Self {
        Self::from_env()
    }
}

impl GcloudCredentialCache {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// `CLOUDSDK_CONFIG`가 있으면 사용하고, 없으면 gcloud 기본 설정 디렉터리.
    pub fn from_env() -> Self {
        let config_dir = env::var_os(CLOUDSDK_CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(default_gcloud_config_dir);
        Self { config_dir }
    }

    /// 삭제 대상 파일 목록(현재 ADC + 레거시 계정별 `adc.json`).
    pub fn candidate_files(&self) -> Result<Vec<PathBuf>> {
        let config_dir = self
            .config_dir
            .as_deref()
            .context("cannot determine gcloud config directory")?;

        let mut files = vec![config_dir.join(ADC_FILE)];
        files.extend(legacy_adc_files(&config_dir.join(LEGACY_DIR))?);
        Ok(files)
    }
}

impl CredentialCache for GcloudCredentialCache {
    fn purge(&self) -> Result<PurgeReport> {
        let mut report = PurgeReport::default();

        for path in self.candidate_files()? {
            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "removed cached credential");
                    report.removed.push(path);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => report.failed.push((path, err.to_string())),
            }
        }

        Ok(report)
    }
}

/// gcloud는 Windows에서만 `%APPDATA%\gcloud`를 쓰고, 그 외(macOS 포함)는 `~/.config/gcloud`.
fn default_gcloud_config_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        dirs::config_dir().map(|base| base.join("gcloud"))
    } else {
        dirs::home_dir().map(|home| home.join(".config").join("gcloud"))
    }
}

fn legacy_adc_files(legacy_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(legacy_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to list {}", legacy_dir.display()));
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", legacy_dir.display()))?;
        let candidate = entry.path().join(LEGACY_ADC_FILE);
        if candidate.is_file() {
            files.push(candidate);
        }
    }
    files.sort();
    Ok(files)
}
