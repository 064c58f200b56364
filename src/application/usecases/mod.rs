//! REPL 명령별 유스케이스.
//! 각 유스케이스는 검증 → 저장소 접근 → 프롬프트 → 출력 순서로 진행하고,
//! 첫 실패에서 `QuizError`로 중단한다. 오류 출력은 REPL 경계가 담당한다.

pub mod add_quiz;
pub mod credits;
pub mod delete_quiz;
pub mod edit_quiz;
pub mod help;
pub mod inspect_config;
pub mod list_quizzes;
pub mod play;
pub mod show_quiz;
pub mod test_quiz;

mod form;
mod view;
