//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 저장소 위치를 해석한다.

mod inspection;
mod loader;

use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

pub use inspection::ConfigInspection;
pub use loader::config_paths;

use crate::application::config::{Config, StoreOptions};

/// 실제로 열 퀴즈 저장소 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::Memory => write!(f, "memory"),
            StoreLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Config {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load() -> Result<Self> {
        Ok(loader::load_merged_config()?.config)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect(store: &StoreOptions) -> Result<ConfigInspection> {
        let loaded = loader::load_merged_config()?;
        ConfigInspection::from_loaded(loaded, store)
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json(store: &StoreOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::inspect(store)?)?)
    }

    /// CLI 옵션 > 설정 파일 > 기본 데이터 디렉터리 순으로 저장소 위치를 정한다.
    pub fn store_location(&self, options: &StoreOptions) -> Result<StoreLocation> {
        if options.in_memory {
            return Ok(StoreLocation::Memory);
        }
        if let Some(path) = &options.db_path {
            return Ok(StoreLocation::File(path.clone()));
        }
        if let Some(path) = &self.defaults.database_path {
            return Ok(StoreLocation::File(PathBuf::from(path)));
        }

        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
            .ok_or_else(|| anyhow!("could not determine data directory"))?;
        Ok(StoreLocation::File(
            data_dir.join("quizpilot").join("quizzes.db"),
        ))
    }
}
