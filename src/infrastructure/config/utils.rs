//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// 로컬 명령(gcloud 등)이 실행 가능한 위치에 있는지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    // 경로가 포함되어 있으면 해당 파일만 검사한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    let candidates = candidate_names(command);
    env::split_paths(&path_var).any(|dir| candidates.iter().any(|name| dir.join(name).is_file()))
}

/// Windows는 `gcloud.cmd`처럼 확장자를 생략할 수 있으므로 PATHEXT 조합을 포함한다.
#[cfg(windows)]
fn candidate_names(command: &str) -> Vec<String> {
    let mut names = vec![command.to_string()];
    if Path::new(command).extension().is_some() {
        return names;
    }

    let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
    names.extend(
        pathext
            .to_string_lossy()
            .split(';')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!("{command}{ext}")),
    );
    names
}

#[cfg(not(windows))]
fn candidate_names(command: &str) -> Vec<String> {
    vec![command.to_string()]
}
