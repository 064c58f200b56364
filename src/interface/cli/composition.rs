//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::Result;

use crate::application::config::{Config, StoreOptions};
use crate::application::ports::QuizStore;
use crate::application::usecases::add_quiz::AddQuizUseCase;
use crate::application::usecases::credits::CreditsUseCase;
use crate::application::usecases::delete_quiz::DeleteQuizUseCase;
use crate::application::usecases::edit_quiz::EditQuizUseCase;
use crate::application::usecases::help::HelpUseCase;
use crate::application::usecases::list_quizzes::ListQuizzesUseCase;
use crate::application::usecases::play::PlayUseCase;
use crate::application::usecases::show_quiz::ShowQuizUseCase;
use crate::application::usecases::test_quiz::TestQuizUseCase;
use crate::infrastructure::store::open_store;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 세션 상태는 갖지 않으므로 여러 TCP 클라이언트가 공유해도 된다.
pub struct AppComposition {
    store: Arc<dyn QuizStore>,
    play_seed: Option<u64>,
}

impl AppComposition {
    /// 저장소를 외부에서 주입한다.
    pub fn new(store: Arc<dyn QuizStore>, play_seed: Option<u64>) -> Self {
        Self { store, play_seed }
    }

    /// 설정과 CLI 옵션으로 저장소를 열어 조합을 생성한다.
    pub fn bootstrap(config: &Config, options: &StoreOptions) -> Result<Self> {
        let location = config.store_location(options)?;
        let store = open_store(&location, config.seed_samples())?;
        Ok(Self::new(store, config.play_seed()))
    }

    pub fn help_usecase(&self) -> HelpUseCase {
        HelpUseCase
    }

    pub fn credits_usecase(&self) -> CreditsUseCase {
        CreditsUseCase
    }

    pub fn list_usecase(&self) -> ListQuizzesUseCase<'_> {
        ListQuizzesUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn show_usecase(&self) -> ShowQuizUseCase<'_> {
        ShowQuizUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn add_usecase(&self) -> AddQuizUseCase<'_> {
        AddQuizUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn delete_usecase(&self) -> DeleteQuizUseCase<'_> {
        DeleteQuizUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn edit_usecase(&self) -> EditQuizUseCase<'_> {
        EditQuizUseCase {
            store: self.store.as_ref(),
        }
    }

    pub fn test_usecase(&self) -> TestQuizUseCase<'_> {
        TestQuizUseCase {
            store: self.store.as_ref(),
        }
    }

    /// 무작위 출제 게임 유스케이스를 생성한다.
    pub fn play_usecase(&self) -> PlayUseCase<'_> {
        PlayUseCase {
            store: self.store.as_ref(),
            seed: self.play_seed,
        }
    }
}
