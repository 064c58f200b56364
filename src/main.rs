//! `quizpilot` 바이너리 진입점.

use quizpilot::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    // REPL 출력(stdout)과 섞이지 않도록 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let result = match action {
        CliAction::InspectConfig(store) => {
            quizpilot::inspect_config_pretty_json(&store).map(|json| println!("{json}"))
        }
        CliAction::Interactive(store) => quizpilot::run_interactive(store).await,
        CliAction::Serve { store, bind } => quizpilot::run_server(store, bind).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
