//! SQLite 기반 퀴즈 저장소.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

use super::SAMPLE_QUIZZES;
use crate::application::ports::QuizStore;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, QuizDraft};

const CREATE_QUIZZES: &str = "
CREATE TABLE IF NOT EXISTS quizzes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    created_at INTEGER NOT NULL DEFAULT (unixepoch()),
    updated_at INTEGER NOT NULL DEFAULT (unixepoch())
);";

/// 단일 커넥션을 뮤텍스로 직렬화해 쓰는 저장소.
/// 락은 문장 하나를 실행하는 동안만 잡는다.
pub struct SqliteQuizStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteQuizStore {
    /// 지정 경로의 데이터베이스를 연다. 상위 디렉터리가 없으면 만든다.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("failed to open quiz database at {}", path.display()))?;
        info!(path = %path.display(), "opened quiz database");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// 테스트용 메모리 데이터베이스.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(Connection::open_in_memory()?),
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 스키마를 만들고, 테이블을 새로 만든 경우에만 예제 퀴즈를 넣는다.
    pub fn migrate(&self, seed_samples: bool) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("quiz database lock poisoned"))?;

        let existed: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'quizzes')",
            [],
            |row| row.get(0),
        )?;
        conn.execute_batch(CREATE_QUIZZES)
            .context("failed to create quizzes table")?;

        if !existed && seed_samples {
            for (question, answer) in SAMPLE_QUIZZES {
                conn.execute(
                    "INSERT INTO quizzes (question, answer) VALUES (?1, ?2)",
                    params![question, answer],
                )?;
            }
            info!(count = SAMPLE_QUIZZES.len(), "seeded sample quizzes");
        }
        Ok(())
    }

    fn conn(&self) -> QuizResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| QuizError::store("quiz database lock poisoned"))
    }
}

fn row_to_quiz(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quiz> {
    Ok(Quiz {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
    })
}

#[async_trait]
impl QuizStore for SqliteQuizStore {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, question, answer FROM quizzes ORDER BY id")
            .map_err(QuizError::store)?;
        let rows = stmt.query_map([], row_to_quiz).map_err(QuizError::store)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(QuizError::store)
    }

    async fn find_by_id(&self, id: i64) -> QuizResult<Option<Quiz>> {
        self.conn()?
            .query_row(
                "SELECT id, question, answer FROM quizzes WHERE id = ?1",
                [id],
                row_to_quiz,
            )
            .optional()
            .map_err(QuizError::store)
    }

    async fn count(&self) -> QuizResult<u64> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))
            .map_err(QuizError::store)?;
        Ok(count.max(0) as u64)
    }

    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz> {
        draft.validate()?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO quizzes (question, answer) VALUES (?1, ?2)",
            params![draft.question, draft.answer],
        )
        .map_err(QuizError::store)?;

        Ok(Quiz {
            id: conn.last_insert_rowid(),
            question: draft.question,
            answer: draft.answer,
        })
    }

    async fn destroy(&self, id: i64) -> QuizResult<u64> {
        let affected = self
            .conn()?
            .execute("DELETE FROM quizzes WHERE id = ?1", [id])
            .map_err(QuizError::store)?;
        Ok(affected as u64)
    }

    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz> {
        QuizDraft::new(quiz.question.clone(), quiz.answer.clone()).validate()?;
        let affected = self
            .conn()?
            .execute(
                "UPDATE quizzes SET question = ?1, answer = ?2, updated_at = unixepoch()
                 WHERE id = ?3",
                params![quiz.question, quiz.answer, quiz.id],
            )
            .map_err(QuizError::store)?;

        if affected == 0 {
            return Err(QuizError::NotFound { id: quiz.id });
        }
        Ok(quiz.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn fresh_database_is_seeded_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("quizzes.db");

        let store = SqliteQuizStore::open_at(&path).unwrap();
        store.migrate(true).unwrap();
        assert_eq!(store.count().await.unwrap(), SAMPLE_QUIZZES.len() as u64);
        drop(store);

        // 재오픈 시에는 다시 채우지 않는다(사용자가 모두 지운 경우 포함).
        let store = SqliteQuizStore::open_at(&path).unwrap();
        for quiz in store.find_all().await.unwrap() {
            store.destroy(quiz.id).await.unwrap();
        }
        drop(store);

        let store = SqliteQuizStore::open_at(&path).unwrap();
        store.migrate(true).unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let store = SqliteQuizStore::open_in_memory().unwrap();
        store.migrate(false).unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        let created = store.create(QuizDraft::new("2+2?", "4")).await.unwrap();
        let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let mut edited = fetched.clone();
        edited.apply(QuizDraft::new("3+3?", "6"));
        store.save(&edited).await.unwrap();
        assert_eq!(
            store.find_by_id(created.id).await.unwrap().unwrap().question,
            "3+3?"
        );

        assert_eq!(store.destroy(created.id).await.unwrap(), 1);
        assert_eq!(store.destroy(created.id).await.unwrap(), 0);
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_before_insert() {
        let store = SqliteQuizStore::open_in_memory().unwrap();
        store.migrate(false).unwrap();

        let err = store.create(QuizDraft::new(" ", "")).await.unwrap_err();
        match err {
            QuizError::RecordInvalid { messages } => assert_eq!(messages.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_of_deleted_record_is_not_found() {
        let store = SqliteQuizStore::open_in_memory().unwrap();
        store.migrate(false).unwrap();
        let quiz = store.create(QuizDraft::new("q", "a")).await.unwrap();
        store.destroy(quiz.id).await.unwrap();

        assert_eq!(
            store.save(&quiz).await.unwrap_err(),
            QuizError::NotFound { id: quiz.id }
        );
    }
}
