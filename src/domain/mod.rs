//! Domain layer
//! 퀴즈 엔티티, 입력 검증, 게임 상태를 외부 의존성 없이 표현한다.

pub mod error;
pub mod play;
pub mod quiz;
