//! Shared test utilities and fixtures
//!
//! Fake credential store and capturing reporter for probe integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Mutex;

use adcguard::application::ports::{CredentialStore, Reporter};
use anyhow::Result;
use tempfile::NamedTempFile;

/// Credential store that hands out a fixed token (or none).
pub struct StaticTokenStore {
    token: Option<String>,
}

impl StaticTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self { token: None }
    }
}

impl CredentialStore for StaticTokenStore {
    fn active_account(&self) -> Result<Option<String>> {
        Ok(Some("operator@example.com".to_string()))
    }

    fn active_project(&self) -> Result<Option<String>> {
        Ok(Some("probe-project".to_string()))
    }

    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn revoke(&self) -> Result<()> {
        Ok(())
    }

    fn login(&self, _scope: &str) -> Result<()> {
        Ok(())
    }

    fn set_project(&self, _project_id: &str) -> Result<()> {
        Ok(())
    }

    fn set_quota_project(&self, _project_id: &str) -> Result<()> {
        Ok(())
    }
}

/// Reporter that keeps every line in memory.
#[derive(Default)]
pub struct CapturingReporter {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl CapturingReporter {
    pub fn stdout(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    pub fn stderr(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Reporter for CapturingReporter {
    fn section(&self, name: &str) {
        self.out.lock().unwrap().push(name.to_string());
    }

    fn kv(&self, key: &str, value: &str) {
        self.out.lock().unwrap().push(format!("{key}: {value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.out.lock().unwrap().push(format!("[{scope}] {message}"));
    }

    fn error(&self, scope: &str, message: &str) {
        self.err.lock().unwrap().push(format!("[{scope}] {message}"));
    }

    fn raw(&self, line: &str) {
        self.out.lock().unwrap().push(line.to_string());
    }
}

/// Write a settings file pointing the probe at `api_endpoint`.
pub fn settings_for(api_endpoint: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# probe fixture").unwrap();
    writeln!(file, "GCP_PROJECT_ID=p1").unwrap();
    writeln!(file, "GCP_EMBEDDING_LOCATION=\"europe-west4\"").unwrap();
    writeln!(file, "GCP_EMBEDDING_API_ENDPOINT={api_endpoint}").unwrap();
    file
}

pub const PREDICT_PATH: &str =
    "/v1/projects/p1/locations/europe-west4/publishers/google/models/text-embedding-004:predict";
