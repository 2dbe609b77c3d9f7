//! settings 파일(KEY=value) 로딩/진단 모듈.
//! 파일 경로를 결정해 읽고, 해석 결과와 출처 정보를 함께 제공한다.

mod inspection;
mod loader;
mod utils;

use std::path::Path;

use anyhow::Result;

use crate::application::config::EmbeddingConfig;

pub use inspection::ConfigInspection;
pub use loader::{DEFAULT_SETTINGS_FILE, SETTINGS_PATH_ENV, settings_path};
pub use utils::command_exists;

impl EmbeddingConfig {
    /// settings 파일을 읽어 최종 설정을 해석한다. 실패하지 않는다.
    pub fn load(explicit_path: Option<&Path>) -> Self {
        Self::resolve(&loader::load_settings(explicit_path).settings)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect(explicit_path: Option<&Path>) -> ConfigInspection {
        ConfigInspection::from_loaded(loader::load_settings(explicit_path))
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json(explicit_path: Option<&Path>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::inspect(explicit_path))?)
    }
}
