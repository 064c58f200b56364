//! 퀴즈 엔티티와 입력 검증 규칙.

use crate::domain::error::{QuizError, QuizResult};

/// 저장소가 id를 부여한 퀴즈 레코드.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// 아직 저장되지 않은 질문/답 쌍(add/edit 입력값).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// 빈 필드마다 메시지 하나씩 담아 `RecordInvalid`로 거부한다.
    pub fn validate(&self) -> QuizResult<()> {
        let mut messages = Vec::new();
        if self.question.trim().is_empty() {
            messages.push("question must not be empty".to_string());
        }
        if self.answer.trim().is_empty() {
            messages.push("answer must not be empty".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(QuizError::RecordInvalid { messages })
        }
    }
}

impl Quiz {
    /// 질문/답만 교체한다. id는 불변이다.
    pub fn apply(&mut self, draft: QuizDraft) {
        self.question = draft.question;
        self.answer = draft.answer;
    }

    /// 응답이 저장된 답과 일치하는지 판정한다.
    pub fn is_answered_by(&self, response: &str) -> bool {
        answers_match(&self.answer, response)
    }
}

/// 공백 제거 + 대소문자 무시 비교.
pub fn answers_match(expected: &str, response: &str) -> bool {
    expected.trim().to_lowercase() == response.trim().to_lowercase()
}

/// `<id>` 인자를 정수 id로 변환한다.
/// 앞쪽의 부호와 숫자열만 읽고 나머지는 버린다(`"12abc"` → 12, `"1.5"` → 1).
pub fn validate_id(raw: Option<&str>) -> QuizResult<i64> {
    let Some(raw) = raw else {
        return Err(QuizError::MissingParameter);
    };

    leading_integer(raw.trim()).ok_or(QuizError::NotANumber)
}

fn leading_integer(text: &str) -> Option<i64> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // i64 범위를 넘는 숫자열은 NotANumber.
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Quiz {
        Quiz {
            id: 2,
            question: "Capital of France".to_string(),
            answer: "Paris".to_string(),
        }
    }

    #[test]
    fn answer_comparison_ignores_case_and_surrounding_whitespace() {
        let quiz = paris();
        assert!(quiz.is_answered_by("Paris"));
        assert!(quiz.is_answered_by(" paris "));
        assert!(quiz.is_answered_by("PARIS"));
        assert!(!quiz.is_answered_by("pariss"));
        assert!(!quiz.is_answered_by(""));
    }

    #[test]
    fn validate_id_rejects_missing_and_non_numeric_input() {
        assert_eq!(validate_id(None), Err(QuizError::MissingParameter));
        assert_eq!(validate_id(Some("abc")), Err(QuizError::NotANumber));
        assert_eq!(validate_id(Some("")), Err(QuizError::NotANumber));
        assert_eq!(validate_id(Some("x12")), Err(QuizError::NotANumber));
        assert_eq!(validate_id(Some("-")), Err(QuizError::NotANumber));
        assert_eq!(validate_id(Some(".5")), Err(QuizError::NotANumber));
    }

    #[test]
    fn validate_id_reads_only_the_leading_integer() {
        assert_eq!(validate_id(Some("12abc")), Ok(12));
        assert_eq!(validate_id(Some("1.5")), Ok(1));
        assert_eq!(validate_id(Some("+7 ")), Ok(7));
        assert_eq!(validate_id(Some("-3x")), Ok(-3));
        assert_eq!(
            validate_id(Some("99999999999999999999")),
            Err(QuizError::NotANumber)
        );
    }

    #[test]
    fn validate_id_accepts_integers() {
        assert_eq!(validate_id(Some("12")), Ok(12));
        assert_eq!(validate_id(Some(" 3 ")), Ok(3));
        assert_eq!(validate_id(Some("-4")), Ok(-4));
    }

    #[test]
    fn draft_validation_reports_every_empty_field() {
        assert!(QuizDraft::new("2+2?", "4").validate().is_ok());

        let err = QuizDraft::new("", "  ").validate().unwrap_err();
        assert_eq!(
            err,
            QuizError::RecordInvalid {
                messages: vec![
                    "question must not be empty".to_string(),
                    "answer must not be empty".to_string(),
                ],
            }
        );

        let err = QuizDraft::new("2+2?", "").validate().unwrap_err();
        assert_eq!(
            err,
            QuizError::RecordInvalid {
                messages: vec!["answer must not be empty".to_string()],
            }
        );
    }

    #[test]
    fn apply_keeps_identity() {
        let mut quiz = paris();
        quiz.apply(QuizDraft::new("Capital of Italy", "Rome"));
        assert_eq!(quiz.id, 2);
        assert_eq!(quiz.question, "Capital of Italy");
        assert_eq!(quiz.answer, "Rome");
    }
}
