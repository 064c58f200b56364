//! 퀴즈를 삭제하는 유스케이스.

use crate::application::ports::{QuizStore, Session, Tone};
use crate::domain::error::QuizResult;
use crate::domain::quiz::validate_id;

pub struct DeleteQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> DeleteQuizUseCase<'a> {
    /// 없는 id 삭제는 오류가 아니며 아무것도 출력하지 않는다.
    pub async fn execute(&self, session: &mut dyn Session, raw_id: Option<&str>) -> QuizResult<u64> {
        let id = validate_id(raw_id)?;
        let affected = self.store.destroy(id).await?;

        if affected > 0 {
            let line = format!(
                " Quiz [{}] deleted.",
                session.paint(&id.to_string(), Tone::Accent)
            );
            session.emit_line(&line, None).await;
        }
        Ok(affected)
    }
}
