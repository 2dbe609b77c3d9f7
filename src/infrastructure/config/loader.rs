//! settings 파일 경로 결정 및 읽기.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::application::config::SettingsFile;

/// settings 파일 경로를 지정하는 환경변수.
pub const SETTINGS_PATH_ENV: &str = "ADCGUARD_ENV_FILE";
/// 경로 지정이 없을 때 작업 디렉터리에서 찾는 파일.
pub const DEFAULT_SETTINGS_FILE: &str = ".env";

#[derive(Debug, Clone)]
pub(crate) struct LoadedSettings {
    pub path: PathBuf,
    pub loaded: bool,
    pub settings: SettingsFile,
}

/// 명시 경로 > 환경변수 > `./.env` 순으로 settings 경로를 결정한다.
pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path) = env::var(SETTINGS_PATH_ENV)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path.trim());
    }

    PathBuf::from(DEFAULT_SETTINGS_FILE)
}

/// settings 파일을 읽는다.
/// 파일이 없거나 읽을 수 없으면 빈 파일과 동일하게 취급한다.
pub(crate) fn load_settings(explicit: Option<&Path>) -> LoadedSettings {
    let path = settings_path(explicit);

    match fs::read_to_string(&path) {
        Ok(raw) => LoadedSettings {
            settings: SettingsFile::parse(&raw),
            loaded: true,
            path,
        },
        Err(err) => {
            if err.kind() == io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), "settings file not found; using defaults");
            } else {
                tracing::debug!(path = %path.display(), error = %err, "settings file unreadable; using defaults");
            }
            LoadedSettings {
                settings: SettingsFile::default(),
                loaded: false,
                path,
            }
        }
    }
}
