//! 퀴즈 레코드의 한 줄 표현.

use crate::application::ports::{Session, Tone};
use crate::domain::quiz::Quiz;

/// ` [id]:  question`
pub(crate) fn quiz_heading(session: &dyn Session, quiz: &Quiz) -> String {
    format!(
        " [{}]:  {}",
        session.paint(&quiz.id.to_string(), Tone::Accent),
        quiz.question
    )
}

/// `question => answer`
pub(crate) fn question_and_answer(session: &dyn Session, quiz: &Quiz) -> String {
    format!(
        "{} {} {}",
        quiz.question,
        session.paint("=>", Tone::Accent),
        quiz.answer
    )
}

/// ` [id]:  question => answer`
pub(crate) fn quiz_detail(session: &dyn Session, quiz: &Quiz) -> String {
    format!(
        " [{}]:  {}",
        session.paint(&quiz.id.to_string(), Tone::Accent),
        question_and_answer(session, quiz)
    )
}
