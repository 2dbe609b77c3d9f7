//! `adcguard` 바이너리 진입점.

use adcguard::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    let invocation = Cli::parse_action();

    // --quiet 프로브는 종료 코드만 남겨야 하므로 로그 기본값도 끈다.
    let default_filter = if invocation.is_quiet() { "off" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let composition = AppComposition::new(invocation.env_file);

    match invocation.action {
        CliAction::Probe { quiet } => {
            let outcome = composition.probe_usecase().execute(quiet).await;
            std::process::exit(outcome.exit_code());
        }
        CliAction::Reset { project_id, probe } => {
            if let Err(err) = composition.reset_usecase().execute(project_id.as_deref()) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
            if probe {
                let outcome = composition.probe_usecase().execute(false).await;
                std::process::exit(outcome.exit_code());
            }
        }
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
    }
}
