//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "adcguard", version)]
#[command(about = "Probe and reset Google Cloud application-default credentials")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file with GCP_* keys (default: $ADCGUARD_ENV_FILE or ./.env)
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the cached credential against the embedding endpoint (exit 0/2/3)
    Probe {
        /// Print nothing; report only through the exit code
        #[arg(long, short)]
        quiet: bool,
    },
    /// Revoke, purge, re-login and bind the application-default credential
    Reset {
        /// Project to bind (default: GCP_PROJECT_ID from settings)
        project_id: Option<String>,

        /// Run a probe after a successful reset and exit with its code
        #[arg(long)]
        probe: bool,
    },
    /// Show resolved settings and where each value came from
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Probe { quiet: bool },
    Reset { project_id: Option<String>, probe: bool },
    InspectConfig,
}

/// 파싱 결과: 실행할 동작 + 공용 옵션.
#[derive(Debug, Clone)]
pub struct CliInvocation {
    pub action: CliAction,
    pub env_file: Option<PathBuf>,
}

impl CliInvocation {
    /// 진단 출력을 모두 끄는 실행인지 여부(로그 기본 레벨 결정용).
    pub fn is_quiet(&self) -> bool {
        matches!(self.action, CliAction::Probe { quiet: true })
    }
}

impl Cli {
    pub fn parse_action() -> CliInvocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> CliInvocation {
        let action = match self.command {
            Commands::Probe { quiet } => CliAction::Probe { quiet },
            Commands::Reset { project_id, probe } => CliAction::Reset { project_id, probe },
            Commands::Config => CliAction::InspectConfig,
        };

        CliInvocation {
            action,
            env_file: self.env_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> CliInvocation {
        Cli::try_parse_from(args).unwrap().into_invocation()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn probe_accepts_quiet_flag() {
        let inv = parse(&["adcguard", "probe", "--quiet"]);
        assert_eq!(inv.action, CliAction::Probe { quiet: true });
        assert!(inv.is_quiet());

        let loud = parse(&["adcguard", "probe"]);
        assert!(!loud.is_quiet());
    }

    #[test]
    fn reset_takes_optional_project() {
        let inv = parse(&["adcguard", "reset"]);
        assert_eq!(
            inv.action,
            CliAction::Reset {
                project_id: None,
                probe: false
            }
        );

        let inv = parse(&["adcguard", "reset", "acme-prod", "--probe"]);
        assert_eq!(
            inv.action,
            CliAction::Reset {
                project_id: Some("acme-prod".to_string()),
                probe: true
            }
        );
    }

    #[test]
    fn env_file_is_global() {
        let inv = parse(&["adcguard", "config", "--env-file", "/tmp/custom.env"]);
        assert_eq!(inv.action, CliAction::InspectConfig);
        assert_eq!(inv.env_file, Some(PathBuf::from("/tmp/custom.env")));
    }
}
