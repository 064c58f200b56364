//! 명령 목록을 출력하는 유스케이스.

use crate::application::ports::Session;

pub const COMMANDS: [(&str, &str); 10] = [
    ("h|help", "Show this help."),
    ("list", "List the existing quizzes."),
    ("show <id>", "Show the question and answer of the given quiz."),
    ("add", "Add a new quiz interactively."),
    ("delete <id>", "Delete the given quiz."),
    ("edit <id>", "Edit the given quiz."),
    ("test <id>", "Try to answer the given quiz."),
    ("p|play", "Play: answer every quiz in random order."),
    ("credits", "Credits."),
    ("q|quit", "Quit the program."),
];

pub struct HelpUseCase;

impl HelpUseCase {
    pub async fn execute(&self, session: &mut dyn Session) {
        session.emit_line("Commands:", None).await;
        for (usage, description) in COMMANDS {
            session
                .emit_line(&format!("   {usage} - {description}"), None)
                .await;
        }
    }
}
