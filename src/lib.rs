//! adcguard library root.
//! Application-Default Credential 프로브/재설정을 Clean Architecture 계층으로 노출한다.

use std::path::PathBuf;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::probe::ProbeOutcome;
use domain::reset::ResetReport;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 프로브 함수.
pub async fn probe(env_file: Option<PathBuf>, quiet: bool) -> ProbeOutcome {
    let composition = AppComposition::new(env_file);
    composition.probe_usecase().execute(quiet).await
}

/// 라이브러리 직접 호출용 재설정 함수(대화형 로그인 포함).
pub fn reset(env_file: Option<PathBuf>, target_project: Option<&str>) -> Result<ResetReport> {
    let composition = AppComposition::new(env_file);
    composition.reset_usecase().execute(target_project)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(env_file: Option<PathBuf>) -> Result<String> {
    let composition = AppComposition::new(env_file);
    composition.inspect_config_usecase().execute()
}
