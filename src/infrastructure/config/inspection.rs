//! 적용 설정 진단(inspection) 뷰 모델.

use anyhow::Result;
use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::{DefaultsConfig, ServerConfig, StoreOptions};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub server: ServerConfig,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub store: String,
    pub seed_samples: bool,
    pub play_seed: Option<u64>,
    pub bind: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig, store: &StoreOptions) -> Result<Self> {
        let location = loaded.config.store_location(store)?;

        Ok(Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                store: location.to_string(),
                seed_samples: loaded.config.seed_samples(),
                play_seed: loaded.config.play_seed(),
                bind: loaded.config.bind(),
            },
            defaults: loaded.config.defaults,
            server: loaded.config.server,
        })
    }
}
