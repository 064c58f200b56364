//! 무작위 출제 게임의 세션 상태.

use std::collections::BTreeMap;

use rand::Rng;

use crate::domain::quiz::Quiz;

/// 한 번의 `play` 동안만 살아있는 게임 상태.
/// 아직 출제되지 않은 퀴즈 풀과 누적 점수를 보관한다.
#[derive(Debug, Clone)]
pub struct PlaySession {
    pool: Vec<Quiz>,
    score: u32,
}

impl PlaySession {
    /// 레코드 id 기준으로 풀을 구성한다. 같은 id는 한 번만 들어간다.
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let by_id: BTreeMap<i64, Quiz> = quizzes.into_iter().map(|q| (q.id, q)).collect();
        Self {
            pool: by_id.into_values().collect(),
            score: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 남은 풀에서 균등 확률로 하나를 꺼낸다(비복원 추출).
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Quiz> {
        if self.pool.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.pool.len());
        Some(self.pool.swap_remove(idx))
    }

    /// 정답 1회를 기록하고 갱신된 점수를 반환한다.
    pub fn record_correct(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn quiz(id: i64) -> Quiz {
        Quiz {
            id,
            question: format!("q{id}"),
            answer: format!("a{id}"),
        }
    }

    #[test]
    fn draws_every_record_exactly_once() {
        // 비연속 id도 누락 없이 출제되어야 한다.
        let ids = [3, 7, 42, 1000, 5];
        let mut session = PlaySession::new(ids.iter().map(|&id| quiz(id)).collect());
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = HashSet::new();
        while let Some(q) = session.draw(&mut rng) {
            assert!(seen.insert(q.id), "id {} drawn twice", q.id);
        }

        assert_eq!(seen, ids.iter().copied().collect());
        assert_eq!(session.remaining(), 0);
        assert!(session.draw(&mut rng).is_none());
    }

    #[test]
    fn duplicate_ids_enter_the_pool_once() {
        let session = PlaySession::new(vec![quiz(1), quiz(1), quiz(2)]);
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut session = PlaySession::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert!(session.draw(&mut rng).is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut session = PlaySession::new(vec![quiz(1), quiz(2), quiz(3)]);
        assert_eq!(session.record_correct(), 1);
        assert_eq!(session.record_correct(), 2);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn every_position_can_be_drawn_first() {
        let mut first_ids = HashSet::new();
        for seed in 0..64 {
            let mut session = PlaySession::new((1..=4).map(quiz).collect());
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(q) = session.draw(&mut rng) {
                first_ids.insert(q.id);
            }
        }
        assert_eq!(first_ids.len(), 4);
    }
}
