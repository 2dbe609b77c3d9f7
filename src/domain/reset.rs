//! 자격 증명 재설정 단계와 결과 보고서.

use std::fmt;
use std::path::PathBuf;

/// 플랫폼 접근에 필요한 최소 OAuth scope.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// 재설정 시퀀스의 다섯 단계(실행 순서대로).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPhase {
    Revoke,
    Purge,
    Reacquire,
    Bind,
    Verify,
}

impl ResetPhase {
    pub const ALL: [ResetPhase; 5] = [
        ResetPhase::Revoke,
        ResetPhase::Purge,
        ResetPhase::Reacquire,
        ResetPhase::Bind,
        ResetPhase::Verify,
    ];

    /// 1부터 시작하는 단계 번호.
    pub fn number(self) -> usize {
        match self {
            ResetPhase::Revoke => 1,
            ResetPhase::Purge => 2,
            ResetPhase::Reacquire => 3,
            ResetPhase::Bind => 4,
            ResetPhase::Verify => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResetPhase::Revoke => "revoke",
            ResetPhase::Purge => "purge",
            ResetPhase::Reacquire => "reacquire",
            ResetPhase::Bind => "bind",
            ResetPhase::Verify => "verify",
        }
    }

    /// 이 단계의 실패를 "이미 정리된 상태"로 보고 넘어갈 수 있는지 여부.
    pub fn tolerates_failure(self) -> bool {
        matches!(self, ResetPhase::Revoke | ResetPhase::Purge)
    }
}

impl fmt::Display for ResetPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.number(), Self::ALL.len(), self.name())
    }
}

/// 성공한 재설정의 요약.
#[derive(Debug, Clone)]
pub struct ResetReport {
    pub project_id: String,
    /// 기존 자격 증명 폐기가 실제로 수행됐는지 여부
    pub revoked: bool,
    /// 디스크에서 삭제된 자격 증명 파일 목록
    pub purged_files: Vec<PathBuf>,
}
