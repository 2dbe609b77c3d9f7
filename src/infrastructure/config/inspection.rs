//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedSettings;
use crate::application::config::{EmbeddingConfig, ResolvedValue};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub settings_path: String,
    pub settings_loaded: bool,
    pub project_id: ResolvedValue,
    pub location: ResolvedValue,
    pub model: ResolvedValue,
    pub api_endpoint: Option<String>,
    pub predict_url: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedSettings) -> Self {
        let resolved = EmbeddingConfig::resolve_with_sources(&loaded.settings);
        let predict_url = resolved.clone().into_config().predict_url();

        Self {
            settings_path: loaded.path.display().to_string(),
            settings_loaded: loaded.loaded,
            project_id: resolved.project_id,
            location: resolved.location,
            model: resolved.model,
            api_endpoint: resolved.api_endpoint,
            predict_url,
        }
    }
}
