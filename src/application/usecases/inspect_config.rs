//! 적용 중인 설정과 저장소 선택 결과를 보여주는 유스케이스.

use anyhow::Result;

use crate::application::config::StoreOptions;
use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// CLI 저장소 옵션까지 반영한 진단 JSON을 반환한다.
    pub fn execute(&self, store: &StoreOptions) -> Result<String> {
        self.config_repo.inspect_pretty_json(store)
    }
}
