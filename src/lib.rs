//! quizpilot library root.
//! Clean Architecture 계층을 외부에 노출한다.

use std::sync::Arc;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::StoreOptions;
use application::ports::ConfigRepository;
use application::usecases::inspect_config::InspectConfigUseCase;
use infrastructure::adapters::{JsonConfigRepository, TerminalSession};
use interface::cli::{AppComposition, run_repl};

/// 로컬 터미널에서 REPL을 실행한다.
pub async fn run_interactive(store: StoreOptions) -> Result<()> {
    let config = JsonConfigRepository.load()?;
    let composition = AppComposition::bootstrap(&config, &store)?;
    let mut session = TerminalSession::new();
    run_repl(&composition, &mut session).await;
    Ok(())
}

/// TCP 서버 모드로 실행한다. `bind`가 없으면 설정값을 쓴다.
pub async fn run_server(store: StoreOptions, bind: Option<String>) -> Result<()> {
    let config = JsonConfigRepository.load()?;
    let composition = AppComposition::bootstrap(&config, &store)?;
    let bind = bind.unwrap_or_else(|| config.bind());
    interface::server::serve(Arc::new(composition), &bind).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(store: &StoreOptions) -> Result<String> {
    InspectConfigUseCase {
        config_repo: &JsonConfigRepository,
    }
    .execute(store)
}
