//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::{Config, StoreOptions};
use crate::application::ports::ConfigRepository;

/// JSON 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        Config::load()
    }

    fn inspect_pretty_json(&self, store: &StoreOptions) -> Result<String> {
        Config::inspect_pretty_json(store)
    }
}
