use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::calculators::torque::FrictionFactor;
use crate::calculators::wire::SystemType;
use crate::category::Category;
use crate::tables::materials::UnitSystem;

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a professional engineering assistant. \
Provide accurate, concise technical information about mechanical, electrical, and civil engineering. \
Use standard SI and Imperial units where appropriate. Keep answers professional and minimalist.";

/// 단위 변환 범주별 기본 단위 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreset {
    pub category: Category,
    pub from: String,
    pub to: String,
}

/// 질의응답 제공자 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub temperature: f32,
    /// API 키를 읽을 환경 변수 이름
    pub api_key_env: String,
    pub system_instruction: String,
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: 0.2,
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_owned(),
            timeout_secs: 30,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_category: Category,
    /// 증기표 압력 표시 단위 id
    pub steam_pressure_unit: String,
    pub material_unit_system: UnitSystem,
    pub friction_factor: FrictionFactor,
    pub system_type: SystemType,
    pub unit_presets: Vec<UnitPreset>,
    pub assistant: AssistantConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Pressure,
            steam_pressure_unit: "psi".to_owned(),
            material_unit_system: UnitSystem::Si,
            friction_factor: FrictionFactor::Coated,
            system_type: SystemType::Dc,
            unit_presets: Vec::new(),
            assistant: AssistantConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 범주에 등록된 단위 쌍. 없으면 `None`.
    pub fn preset_for(&self, category: Category) -> Option<&UnitPreset> {
        self.unit_presets.iter().find(|p| p.category == category)
    }

    /// 범주의 단위 쌍을 등록하거나 갱신한다.
    pub fn set_preset(&mut self, category: Category, from: &str, to: &str) {
        let preset = UnitPreset {
            category,
            from: from.to_owned(),
            to: to.to_owned(),
        };
        match self.unit_presets.iter_mut().find(|p| p.category == category) {
            Some(existing) => *existing = preset,
            None => self.unit_presets.push(preset),
        }
    }
}
