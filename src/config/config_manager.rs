// ==========================================
// AI 智能体投资回报分析 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验、快照
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::app_config::AppConfig;
use chrono::Duration;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "AI_AGENTS_ROI_CONFIG";
    /// 仿真随机种子
    pub const SEED: &str = "AI_AGENTS_ROI_SEED";
    /// 仿真天数
    pub const DAYS: &str = "AI_AGENTS_ROI_DAYS";
    /// 每日患者数
    pub const PATIENTS_PER_DAY: &str = "AI_AGENTS_ROI_PATIENTS_PER_DAY";
    /// 报表语言
    pub const LOCALE: &str = "AI_AGENTS_ROI_LOCALE";
    /// 患者明细 CSV 导出路径（仅主程序读取）
    pub const EXPORT_CSV: &str = "AI_AGENTS_ROI_EXPORT_CSV";
}

/// 支持的报表语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置校验失败 ({field}): {message}")]
    ValidationError { field: String, message: String },
}

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File(PathBuf),
    Json,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 以给定配置创建（会先校验）
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        Self::validate(&config)?;
        Ok(Self {
            config,
            source: ConfigSource::Default,
        })
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manager = Self::from_json_str(&raw)?;
        manager.source = ConfigSource::File(path.to_path_buf());
        info!(path = %path.display(), "已加载配置文件");
        Ok(manager)
    }

    /// 从 JSON 字符串加载（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        Self::validate(&config)?;
        Ok(Self {
            config,
            source: ConfigSource::Json,
        })
    }

    /// 从进程环境加载
    ///
    /// 1. AI_AGENTS_ROI_CONFIG 指定文件时读取文件，否则使用默认配置
    /// 2. 应用环境变量覆写
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut manager = match std::env::var(config_keys::CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::new(AppConfig::default())?,
        };
        manager.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(manager)
    }

    /// 应用覆写（lookup 按配置键返回覆写值）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.config.clone();

        if let Some(raw) = lookup(config_keys::SEED) {
            config.simulation.seed = Some(parse_value(config_keys::SEED, &raw)?);
        }
        if let Some(raw) = lookup(config_keys::DAYS) {
            config.simulation.days = parse_value(config_keys::DAYS, &raw)?;
        }
        if let Some(raw) = lookup(config_keys::PATIENTS_PER_DAY) {
            config.simulation.patients_per_day = parse_value(config_keys::PATIENTS_PER_DAY, &raw)?;
        }
        if let Some(raw) = lookup(config_keys::LOCALE) {
            config.locale = raw.trim().to_string();
        }

        Self::validate(&config)?;
        debug!(?config, "配置覆写完成");
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 生效配置快照（JSON）
    ///
    /// 用于在报表中记录本次运行的参数，保证可复现
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.config)?)
    }

    // ==========================================
    // 校验
    // ==========================================

    fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        if !SUPPORTED_LOCALES.contains(&config.locale.as_str()) {
            return Err(invalid("locale", format!("不支持的语言: {}", config.locale)));
        }

        let roi = &config.roi;
        if !(roi.company_size.is_finite() && roi.company_size > 0.0) {
            return Err(invalid("roi.company_size", "必须为正数"));
        }
        if !(roi.annual_revenue.is_finite() && roi.annual_revenue > 0.0) {
            return Err(invalid("roi.annual_revenue", "必须为正数"));
        }
        if roi.horizon_years == 0 {
            return Err(invalid("roi.horizon_years", "必须大于 0"));
        }

        let sim = &config.simulation;
        if sim.days == 0 {
            return Err(invalid("simulation.days", "必须大于 0"));
        }
        if sim.patients_per_day == 0 {
            return Err(invalid("simulation.patients_per_day", "必须大于 0"));
        }
        // 仿真末日的次日仍需可表示（诊疗可跨越午夜）
        if sim
            .start_date
            .checked_add_signed(Duration::days(i64::from(sim.days)))
            .is_none()
        {
            return Err(invalid("simulation.start_date", "起始日期加仿真天数超出可表示范围"));
        }

        let savings = &config.savings;
        if !(savings.implementation_cost.is_finite() && savings.implementation_cost >= 0.0) {
            return Err(invalid("savings.implementation_cost", "不能为负"));
        }
        if savings.projection_years == 0 {
            return Err(invalid("savings.projection_years", "必须大于 0"));
        }
        if !(savings.growth_factor.is_finite() && savings.growth_factor > 0.0) {
            return Err(invalid("savings.growth_factor", "必须为正数"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::ConfigValueError {
            key: key.to_string(),
            value: raw.to_string(),
            message: e.to_string(),
        })
}
