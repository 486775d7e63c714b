// ==========================================
// AI 智能体投资回报分析 - 应用配置结构
// ==========================================
// 职责: ROI / 仿真 / 节省额推算三段配置及其默认值
// 缺省字段经 serde(default) 回落为标准测算场景
// ==========================================

use crate::domain::types::Industry;
use crate::engine::flow_analyzer::{DEFAULT_GROWTH_FACTOR, DEFAULT_PROJECTION_YEARS};
use crate::engine::flow_simulator::{default_start_date, DEFAULT_PATIENTS_PER_DAY};
use crate::engine::roi_projector::DEFAULT_HORIZON_YEARS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 应用配置（JSON 文件 + 环境变量覆写）
///
/// 缺省字段取默认值，默认值即标准测算场景：
/// Healthcare / 5000 人 / 年营收 1 亿 / 5 年；30 天 × 每日 200 名患者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 报表语言（zh-CN / en）
    pub locale: String,
    pub roi: RoiSettings,
    pub simulation: SimulationSettings,
    pub savings: SavingsSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            roi: RoiSettings::default(),
            simulation: SimulationSettings::default(),
            savings: SavingsSettings::default(),
        }
    }
}

/// ROI 测算参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiSettings {
    pub industry: Industry,
    /// 员工人数
    pub company_size: f64,
    /// 年营收
    pub annual_revenue: f64,
    /// 测算年数
    pub horizon_years: u32,
}

impl Default for RoiSettings {
    fn default() -> Self {
        Self {
            industry: Industry::Healthcare,
            company_size: 5000.0,
            annual_revenue: 100_000_000.0,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// 诊疗流程仿真参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// 仿真天数
    pub days: u32,
    /// 每日患者数
    pub patients_per_day: usize,
    /// 随机种子；未设置时每次运行随机取种并写入日志
    pub seed: Option<u64>,
    /// 是否施加高斯噪声
    pub apply_noise: bool,
    /// 起始日期
    pub start_date: NaiveDate,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            days: 30,
            patients_per_day: DEFAULT_PATIENTS_PER_DAY,
            seed: None,
            apply_noise: true,
            start_date: default_start_date(),
        }
    }
}

/// 仿真节省额推算参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsSettings {
    /// AI 系统实施成本
    pub implementation_cost: f64,
    /// 推算年数
    pub projection_years: u32,
    /// 多年增长系数
    pub growth_factor: f64,
}

impl Default for SavingsSettings {
    fn default() -> Self {
        Self {
            implementation_cost: 250_000_000.0,
            projection_years: DEFAULT_PROJECTION_YEARS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
