//! 퀴즈 대화형 쉘(REPL).
//! 터미널과 TCP 클라이언트가 같은 분배 로직을 `Session`만 바꿔 사용한다.

use tracing::debug;

use crate::application::ports::{Session, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::interface::cli::composition::AppComposition;

pub const REPL_PROMPT: &str = "quiz > ";
const WELCOME_BANNER: &str = "CORE Quiz";
const HELP_HINT: &str = "hint: type `help` to list the commands";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

enum ReplFlow {
    Continue,
    Quit,
}

/// 입력이 끝나거나 `quit`이 들어올 때까지 명령을 하나씩 끝까지 실행한다.
/// 명령 단위 오류는 출력만 하고 세션은 유지한다.
pub async fn run_repl(composition: &AppComposition, session: &mut dyn Session) {
    session.emit_banner(WELCOME_BANNER, Tone::Success).await;
    session.emit_line(HELP_HINT, None).await;

    loop {
        let line = match session.prompt(REPL_PROMPT, None).await {
            Ok(line) => line,
            Err(QuizError::InputClosed) => break,
            Err(err) => {
                report_error(session, &err).await;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_repl_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                session.emit_error(&msg).await;
                session.emit_line(HELP_HINT, None).await;
                continue;
            }
        };

        debug!(?command, "dispatching command");
        match execute_command(composition, session, command).await {
            Ok(ReplFlow::Continue) => {}
            Ok(ReplFlow::Quit) | Err(QuizError::InputClosed) => break,
            Err(err) => {
                debug!(error = %err, "command failed");
                report_error(session, &err).await;
            }
        }
    }
}

async fn execute_command(
    composition: &AppComposition,
    session: &mut dyn Session,
    command: ReplCommand,
) -> QuizResult<ReplFlow> {
    match command {
        ReplCommand::Help => composition.help_usecase().execute(session).await,
        ReplCommand::List => composition.list_usecase().execute(session).await?,
        ReplCommand::Show(id) => {
            composition
                .show_usecase()
                .execute(session, id.as_deref())
                .await?
        }
        ReplCommand::Add => {
            composition.add_usecase().execute(session).await?;
        }
        ReplCommand::Delete(id) => {
            composition
                .delete_usecase()
                .execute(session, id.as_deref())
                .await?;
        }
        ReplCommand::Edit(id) => {
            composition
                .edit_usecase()
                .execute(session, id.as_deref())
                .await?;
        }
        ReplCommand::Test(id) => {
            composition
                .test_usecase()
                .execute(session, id.as_deref())
                .await?;
        }
        ReplCommand::Play => {
            composition.play_usecase().execute(session).await?;
        }
        ReplCommand::Credits => composition.credits_usecase().execute(session).await,
        ReplCommand::Quit => {
            session.close().await;
            return Ok(ReplFlow::Quit);
        }
    }
    Ok(ReplFlow::Continue)
}

async fn report_error(session: &mut dyn Session, err: &QuizError) {
    for line in err.report_lines() {
        session.emit_error(&line).await;
    }
}

/// 첫 단어(대소문자 무시)로 명령을 고르고, 두 번째 단어를 `<id>` 인자로 넘긴다.
pub fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next().map(ToString::to_string);

    match head.to_lowercase().as_str() {
        "h" | "help" => Ok(ReplCommand::Help),
        "list" => Ok(ReplCommand::List),
        "show" => Ok(ReplCommand::Show(arg)),
        "add" => Ok(ReplCommand::Add),
        "delete" => Ok(ReplCommand::Delete(arg)),
        "edit" => Ok(ReplCommand::Edit(arg)),
        "test" => Ok(ReplCommand::Test(arg)),
        "p" | "play" => Ok(ReplCommand::Play),
        "credits" => Ok(ReplCommand::Credits),
        "q" | "quit" => Ok(ReplCommand::Quit),
        _ => Err(format!("unknown command: {head}")),
    }
}
