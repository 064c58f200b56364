//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// TCP 서버 모드 설정
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// SQLite 데이터베이스 파일 경로
    pub database_path: Option<String>,
    /// 새로 만든 빈 데이터베이스에 예제 퀴즈를 넣을지 여부(기본 true)
    pub seed_samples: Option<bool>,
    /// play 출제 순서를 고정할 RNG 시드(미지정 시 엔트로피)
    pub play_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// 리슨 주소
    pub bind: Option<String>,
}

/// CLI에서 지정한 저장소 선택값.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub db_path: Option<PathBuf>,
    pub in_memory: bool,
}

impl Config {
    /// 상위 우선순위 설정의 지정값으로 덮어쓴다.
    pub fn merge_from(&mut self, other: Config) {
        let Config { defaults, server } = other;

        if defaults.database_path.is_some() {
            self.defaults.database_path = defaults.database_path;
        }
        if defaults.seed_samples.is_some() {
            self.defaults.seed_samples = defaults.seed_samples;
        }
        if defaults.play_seed.is_some() {
            self.defaults.play_seed = defaults.play_seed;
        }
        if server.bind.is_some() {
            self.server.bind = server.bind;
        }
    }

    pub fn seed_samples(&self) -> bool {
        self.defaults.seed_samples.unwrap_or(true)
    }

    pub fn play_seed(&self) -> Option<u64> {
        self.defaults.play_seed
    }

    pub fn bind(&self) -> String {
        self.server
            .bind
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_lower_priority_values_when_unset() {
        let mut base: Config = serde_json::from_str(
            r#"{"defaults":{"database_path":"/var/quiz.db","play_seed":7},"server":{"bind":"0.0.0.0:9000"}}"#,
        )
        .unwrap();
        let overlay: Config =
            serde_json::from_str(r#"{"defaults":{"seed_samples":false}}"#).unwrap();

        base.merge_from(overlay);

        assert_eq!(base.defaults.database_path.as_deref(), Some("/var/quiz.db"));
        assert_eq!(base.play_seed(), Some(7));
        assert!(!base.seed_samples());
        assert_eq!(base.bind(), "0.0.0.0:9000");
    }

    #[test]
    fn defaults_apply_to_empty_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.seed_samples());
        assert_eq!(config.play_seed(), None);
        assert_eq!(config.bind(), DEFAULT_BIND);
    }
}
