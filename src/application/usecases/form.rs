//! add/edit가 공유하는 질문·답 입력 단계.

use crate::application::ports::Session;
use crate::domain::error::QuizResult;
use crate::domain::quiz::{Quiz, QuizDraft};

const QUESTION_PROMPT: &str = " Enter a question: ";
const ANSWER_PROMPT: &str = " Enter the answer: ";

/// 질문을 먼저 받고 답을 이어서 받는다.
/// `current`가 있으면 기존 값을 편집 가능한 초기값으로 채운다.
pub(crate) async fn prompt_draft(
    session: &mut dyn Session,
    current: Option<&Quiz>,
) -> QuizResult<QuizDraft> {
    let question = session
        .prompt(QUESTION_PROMPT, current.map(|q| q.question.as_str()))
        .await?;
    let answer = session
        .prompt(ANSWER_PROMPT, current.map(|q| q.answer.as_str()))
        .await?;
    Ok(QuizDraft::new(question, answer))
}
