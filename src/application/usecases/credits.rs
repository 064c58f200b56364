//! 제작자 정보를 출력하는 유스케이스.

use crate::application::ports::{Session, Tone};

const AUTHOR: &str = "ALVARO";

pub struct CreditsUseCase;

impl CreditsUseCase {
    pub async fn execute(&self, session: &mut dyn Session) {
        session.emit_line("Author of the exercise:", None).await;
        session.emit_line(AUTHOR, Some(Tone::Success)).await;
    }
}
