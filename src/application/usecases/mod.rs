//! 애플리케이션 유스케이스 모음.

pub mod inspect_config;
pub mod probe_credential;
pub mod reset_credential;

#[cfg(test)]
pub(crate) mod test_support;
