//! gcloud CLI 실행 공통 모듈.
//! 출력 캡처 실행과 대화형(터미널 상속) 실행을 구분해 제공한다.

mod command;

pub use command::{GcloudCli, normalize_value};

/// gcloud 실행 파일 이름을 바꾸는 환경변수.
pub const GCLOUD_PROGRAM_ENV: &str = "ADCGUARD_GCLOUD";
pub const DEFAULT_GCLOUD_PROGRAM: &str = "gcloud";
