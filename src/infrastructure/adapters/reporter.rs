//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 진행 상황은 stdout, 진단은 stderr로 출력하는 리포터.
pub struct ConsoleReporter {
    color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 진단 메시지에 색을 입힌다.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<12}] {}", scope, message);
    }

    fn error(&self, scope: &str, message: &str) {
        let scope = format!("{:<12}", scope);
        if self.color {
            eprintln!("[\x1b[31m{scope}\x1b[0m] {message}");
        } else {
            eprintln!("[{scope}] {message}");
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
