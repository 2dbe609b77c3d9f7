//! gcloud 명령 실행기.

use std::env;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::infrastructure::config::command_exists;

use super::{DEFAULT_GCLOUD_PROGRAM, GCLOUD_PROGRAM_ENV};

/// gcloud 프로그램 경로를 보관하고 하위 명령을 실행한다.
#[derive(Debug, Clone)]
pub struct GcloudCli {
    program: String,
    leading_args: Vec<String>,
}

impl Default for GcloudCli {
    fn default() -> Self {
        Self::from_env()
    }
}

impl GcloudCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// `/bin/sh <script>` 형태로 실행하는 테스트용 생성자.
    #[cfg(all(test, unix))]
    pub(crate) fn shell_script(script: &std::path::Path) -> Self {
        Self {
            program: "/bin/sh".to_string(),
            leading_args: vec![script.display().to_string()],
        }
    }

    /// `ADCGUARD_GCLOUD`가 있으면 그 값을, 없으면 PATH의 `gcloud`를 사용한다.
    pub fn from_env() -> Self {
        let program = env::var(GCLOUD_PROGRAM_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GCLOUD_PROGRAM.to_string());
        Self::new(program)
    }

    fn ensure_installed(&self) -> Result<()> {
        if !command_exists(&self.program) {
            bail!(
                "gcloud CLI not found: '{}'.\n\
Install the Google Cloud SDK or set {GCLOUD_PROGRAM_ENV} to the gcloud executable.",
                self.program
            );
        }
        Ok(())
    }

    /// stdout을 캡처해 반환한다. 0이 아닌 종료 코드는 stderr와 함께 오류가 된다.
    pub fn capture(&self, args: &[&str]) -> Result<String> {
        self.ensure_installed()?;
        tracing::debug!(program = %self.program, args = ?args, "running gcloud");

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to run `{} {}`", self.program, args.join(" ")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            bail!(
                "`{} {}` exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            );
        }

        Ok(stdout)
    }

    /// 표준 입출력을 그대로 넘겨 실행하고 종료를 기다린다(타임아웃 없음).
    pub fn interactive(&self, args: &[&str]) -> Result<()> {
        self.ensure_installed()?;
        tracing::debug!(program = %self.program, args = ?args, "running interactive gcloud");

        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to run `{} {}`", self.program, args.join(" ")))?;

        if !status.success() {
            bail!("`{} {}` exited with {status}", self.program, args.join(" "));
        }
        Ok(())
    }
}

/// gcloud 출력 값을 정규화한다. 빈 출력과 `(unset)`은 값 없음으로 본다.
pub fn normalize_value(raw: &str) -> Option<String> {
    let value = raw.lines().map(str::trim).rfind(|line| !line.is_empty())?;
    if value == "(unset)" {
        return None;
    }
    Some(value.to_string())
}
