//! 자격 증명 프로브 도메인: 예측 요청 페이로드와 판정 결과.

use serde::Serialize;

/// 프로브 요청에 사용하는 고정 문장.
pub const PROBE_TEXT: &str = "adcguard credential probe";
/// 문서 검색용 임베딩 태스크 유형.
pub const PROBE_TASK_TYPE: &str = "RETRIEVAL_DOCUMENT";
/// 요청하는 임베딩 차원 수.
pub const PROBE_OUTPUT_DIMENSIONALITY: u32 = 768;

/// `:predict` 엔드포인트로 전송하는 JSON 본문.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictInstance {
    pub content: String,
    pub task_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictParameters {
    #[serde(rename = "outputDimensionality")]
    pub output_dimensionality: u32,
}

impl PredictRequest {
    /// 임베딩 1건만 요청하는 최소 프로브 본문.
    pub fn probe() -> Self {
        Self {
            instances: vec![PredictInstance {
                content: PROBE_TEXT.to_string(),
                task_type: PROBE_TASK_TYPE.to_string(),
            }],
            parameters: PredictParameters {
                output_dimensionality: PROBE_OUTPUT_DIMENSIONALITY,
            },
        }
    }
}

/// 원격 엔드포인트의 응답(상태 코드 + 본문).
#[derive(Debug, Clone)]
pub struct EndpointReply {
    pub status: u16,
    pub body: String,
}

pub const EXIT_VALID: i32 = 0;
pub const EXIT_NO_CREDENTIAL: i32 = 2;
pub const EXIT_ENDPOINT_REJECTED: i32 = 3;

/// 프로브 판정 결과. 각 상태는 서로 다른 종료 코드에 대응한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 엔드포인트가 200으로 응답했다.
    Valid,
    /// 자격 증명 저장소에서 토큰을 얻지 못했다.
    NoCredential,
    /// 토큰은 있었지만 원격 호출이 실패했다.
    /// `status`가 없으면 전송 단계(네트워크)에서 실패한 것이다.
    EndpointRejected { status: Option<u16>, detail: String },
}

impl ProbeOutcome {
    /// HTTP 상태 코드만으로 판정한다. 200 이외는 모두 거부로 본다.
    pub fn from_reply(reply: EndpointReply) -> Self {
        if reply.status == 200 {
            Self::Valid
        } else {
            Self::EndpointRejected {
                status: Some(reply.status),
                detail: reply.body,
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Valid => EXIT_VALID,
            Self::NoCredential => EXIT_NO_CREDENTIAL,
            Self::EndpointRejected { .. } => EXIT_ENDPOINT_REJECTED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::NoCredential => "no-credential",
            Self::EndpointRejected { .. } => "endpoint-rejected",
        }
    }
}
