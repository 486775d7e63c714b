// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件加载、缺省值、环境覆写与校验
// 覆盖范围: 文件/JSON/覆写/快照/错误分类
// ==========================================

use ai_agents_roi::config::{config_keys, AppConfig, ConfigError, ConfigManager, ConfigSource};
use ai_agents_roi::domain::Industry;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ==========================================
// 测试用例 1: 缺省值
// ==========================================

#[test]
fn test_defaults_match_reference_scenario() {
    let config = AppConfig::default();

    assert_eq!(config.locale, "zh-CN");
    assert_eq!(config.roi.industry, Industry::Healthcare);
    assert_eq!(config.roi.company_size, 5_000.0);
    assert_eq!(config.roi.annual_revenue, 100_000_000.0);
    assert_eq!(config.roi.horizon_years, 5);
    assert_eq!(config.simulation.days, 30);
    assert_eq!(config.simulation.patients_per_day, 200);
    assert_eq!(config.simulation.seed, None);
    assert!(config.simulation.apply_noise);
    assert_eq!(config.savings.implementation_cost, 250_000_000.0);
    assert_eq!(config.savings.projection_years, 5);
    assert_eq!(config.savings.growth_factor, 1.1);
}

// ==========================================
// 测试用例 2: 文件加载
// ==========================================

#[test]
fn test_load_partial_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "locale": "en",
            "roi": {{ "industry": "FINANCE", "company_size": 800 }},
            "simulation": {{ "days": 7, "seed": 99 }}
        }}"#
    )
    .unwrap();

    let manager = ConfigManager::from_file(file.path()).unwrap();
    let config = manager.config();

    assert_eq!(manager.source(), &ConfigSource::File(file.path().to_path_buf()));
    assert_eq!(config.locale, "en");
    assert_eq!(config.roi.industry, Industry::Finance);
    assert_eq!(config.roi.company_size, 800.0);
    // 未给出的字段取默认值
    assert_eq!(config.roi.annual_revenue, 100_000_000.0);
    assert_eq!(config.simulation.days, 7);
    assert_eq!(config.simulation.seed, Some(99));
    assert_eq!(config.simulation.patients_per_day, 200);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigManager::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileReadError { .. }));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = ConfigManager::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_invalid_values_fail_validation() {
    let err = ConfigManager::from_json_str(r#"{ "simulation": { "days": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "simulation.days"));

    let err = ConfigManager::from_json_str(r#"{ "locale": "fr" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "locale"));

    let err = ConfigManager::from_json_str(r#"{ "roi": { "annual_revenue": -1 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_start_date_near_calendar_end_fails_validation() {
    let err = ConfigManager::from_json_str(
        r#"{ "simulation": { "days": 2, "start_date": "+262142-12-31" } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "simulation.start_date"));

    // 末日次日仍可表示即通过
    assert!(ConfigManager::from_json_str(
        r#"{ "simulation": { "days": 2, "start_date": "2025-12-30" } }"#,
    )
    .is_ok());
}

// ==========================================
// 测试用例 3: 环境覆写
// ==========================================

#[test]
fn test_overrides_take_precedence() {
    let mut manager = ConfigManager::from_json_str(r#"{ "simulation": { "days": 7 } }"#).unwrap();
    let env = overrides(&[
        (config_keys::SEED, "1234"),
        (config_keys::DAYS, " 14 "),
        (config_keys::PATIENTS_PER_DAY, "50"),
        (config_keys::LOCALE, "en"),
    ]);

    manager.apply_overrides(|key| env.get(key).cloned()).unwrap();

    let config = manager.config();
    assert_eq!(config.simulation.seed, Some(1234));
    assert_eq!(config.simulation.days, 14);
    assert_eq!(config.simulation.patients_per_day, 50);
    assert_eq!(config.locale, "en");
}

#[test]
fn test_bad_override_leaves_config_unchanged() {
    let mut manager = ConfigManager::new(AppConfig::default()).unwrap();
    let before = manager.config().clone();

    let env = overrides(&[(config_keys::DAYS, "10"), (config_keys::SEED, "abc")]);
    let err = manager.apply_overrides(|key| env.get(key).cloned()).unwrap_err();

    assert!(matches!(err, ConfigError::ConfigValueError { ref key, .. } if key == config_keys::SEED));
    assert_eq!(manager.config(), &before);

    let env = overrides(&[(config_keys::PATIENTS_PER_DAY, "0")]);
    assert!(manager.apply_overrides(|key| env.get(key).cloned()).is_err());
    assert_eq!(manager.config(), &before);
}

// ==========================================
// 测试用例 4: 快照
// ==========================================

#[test]
fn test_snapshot_round_trips() {
    let manager = ConfigManager::from_json_str(r#"{ "simulation": { "seed": 5 } }"#).unwrap();
    let snapshot = manager.get_config_snapshot().unwrap();

    let restored = ConfigManager::from_json_str(&snapshot).unwrap();
    assert_eq!(restored.config(), manager.config());
}
