//! 모든 퀴즈를 무작위 순서로 출제하는 게임 유스케이스.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::application::ports::{QuizStore, Session, Tone};
use crate::domain::error::QuizResult;
use crate::domain::play::PlaySession;

pub struct PlayUseCase<'a> {
    pub store: &'a dyn QuizStore,
    /// 지정 시 출제 순서를 재현 가능하게 고정한다.
    pub seed: Option<u64>,
}

impl<'a> PlayUseCase<'a> {
    /// 게임을 끝까지 진행하고 최종 점수를 반환한다.
    pub async fn execute(&self, session: &mut dyn Session) -> QuizResult<u32> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.execute_with_rng(session, &mut rng).await
    }

    /// 주어진 RNG로 게임을 진행한다.
    /// 풀이 비거나 첫 오답이 나오면 종료한다.
    pub async fn execute_with_rng<R: Rng + Send + ?Sized>(
        &self,
        session: &mut dyn Session,
        rng: &mut R,
    ) -> QuizResult<u32> {
        let count = self.store.count().await?;
        let quizzes = self.store.find_all().await?;
        if count != quizzes.len() as u64 {
            debug!(count, fetched = quizzes.len(), "quiz count changed while loading");
        }

        let mut game = PlaySession::new(quizzes);

        while let Some(quiz) = game.draw(rng) {
            let response = session.prompt(&format!("{} ", quiz.question), None).await?;

            if !quiz.is_answered_by(&response) {
                let line = format!(" {}", session.paint("INCORRECT", Tone::Failure));
                session.emit_line(&line, None).await;
                announce_final_score(session, game.score()).await;
                return Ok(game.score());
            }

            let score = game.record_correct();
            let line = format!(" {}", session.paint("CORRECT", Tone::Success));
            session.emit_line(&line, None).await;
            session
                .emit_line(&format!(" {score} correct so far."), None)
                .await;
        }

        session.emit_line(" No more questions left.", None).await;
        announce_final_score(session, game.score()).await;
        Ok(game.score())
    }
}

async fn announce_final_score(session: &mut dyn Session, score: u32) {
    session.emit_line(" Game over, your score is:", None).await;
    session
        .emit_banner(&score.to_string(), Tone::Highlight)
        .await;
}
