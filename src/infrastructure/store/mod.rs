//! 퀴즈 저장소 구현 계층.
//! SQLite 파일 저장소와 메모리 저장소를 `QuizStore` 포트로 묶는다.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::QuizStore;
use crate::infrastructure::config::StoreLocation;

pub use memory::InMemoryQuizStore;
pub use sqlite::SqliteQuizStore;

/// 빈 저장소를 처음 만들 때 넣는 예제 퀴즈.
pub const SAMPLE_QUIZZES: [(&str, &str); 4] = [
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// 위치에 맞는 저장소를 열고 필요하면 예제 데이터를 채운다.
pub fn open_store(location: &StoreLocation, seed_samples: bool) -> Result<Arc<dyn QuizStore>> {
    match location {
        StoreLocation::Memory => {
            let store = if seed_samples {
                InMemoryQuizStore::with_quizzes(SAMPLE_QUIZZES)
            } else {
                InMemoryQuizStore::new()
            };
            Ok(Arc::new(store))
        }
        StoreLocation::File(path) => {
            let store = SqliteQuizStore::open_at(path)?;
            store.migrate(seed_samples)?;
            Ok(Arc::new(store))
        }
    }
}
