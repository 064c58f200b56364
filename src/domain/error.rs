//! 명령 처리 중 발생하는 오류 분류.

use std::fmt::Display;

use thiserror::Error;

/// 퀴즈 명령 실패 사유.
/// REPL 경계에서 한 줄(`RecordInvalid`는 필드별 여러 줄) 오류 출력으로 변환된다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("missing parameter <id>")]
    MissingParameter,

    #[error("the value of parameter <id> is not a number")]
    NotANumber,

    #[error("there is no quiz with id={id}")]
    NotFound { id: i64 },

    #[error("the quiz is invalid")]
    RecordInvalid { messages: Vec<String> },

    #[error("{0}")]
    StoreFailure(String),

    /// 프롬프트 대기 중 입력 스트림이 닫혔다. 사용자에게 표시하지 않는다.
    #[error("input closed")]
    InputClosed,
}

pub type QuizResult<T> = Result<T, QuizError>;

impl QuizError {
    /// 저장소 계층 오류를 불투명한 메시지로 감싼다.
    pub fn store(err: impl Display) -> Self {
        Self::StoreFailure(err.to_string())
    }

    /// 사용자에게 출력할 오류 줄 목록.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::RecordInvalid { messages } => {
                let mut lines = vec![format!("{self}:")];
                lines.extend(messages.iter().cloned());
                lines
            }
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_invalid_reports_one_line_per_field() {
        let err = QuizError::RecordInvalid {
            messages: vec![
                "question must not be empty".to_string(),
                "answer must not be empty".to_string(),
            ],
        };

        assert_eq!(
            err.report_lines(),
            vec![
                "the quiz is invalid:",
                "question must not be empty",
                "answer must not be empty",
            ]
        );
    }

    #[test]
    fn other_errors_report_a_single_line() {
        assert_eq!(
            QuizError::NotFound { id: 7 }.report_lines(),
            vec!["there is no quiz with id=7"]
        );
        assert_eq!(
            QuizError::store("disk I/O error").report_lines(),
            vec!["disk I/O error"]
        );
    }
}
