// ==========================================
// AI 智能体投资回报分析 - 仿真统计指标
// ==========================================
// 红线: 分母为零的比率必须显式标记为"无定义"，不得崩溃或静默归零
// ==========================================

use crate::domain::types::Condition;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// MetricValue - 可能无定义的指标
// ==========================================
// 序列化: 数值 → number；无定义 → null
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Value(f64),
    Undefined,
}

impl MetricValue {
    /// numerator / denominator；分母为零或结果非有限值时无定义
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return MetricValue::Undefined;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            MetricValue::Value(value)
        } else {
            MetricValue::Undefined
        }
    }

    /// 均值；空集合无定义
    pub fn mean(sum: f64, count: usize) -> Self {
        if count == 0 {
            MetricValue::Undefined
        } else {
            MetricValue::ratio(sum, count as f64)
        }
    }

    /// 相对基线的降幅百分比: (baseline - current) / baseline × 100
    pub fn reduction_pct(baseline: MetricValue, current: MetricValue) -> Self {
        match (baseline, current) {
            (MetricValue::Value(b), MetricValue::Value(c)) => {
                MetricValue::ratio(b - c, b).map(|r| r * 100.0)
            }
            _ => MetricValue::Undefined,
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            MetricValue::Value(v) => MetricValue::Value(f(v)),
            MetricValue::Undefined => MetricValue::Undefined,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(*v),
            MetricValue::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, MetricValue::Undefined)
    }

    /// 需要确定数值的调用方使用；无定义时返回 DegenerateMetric
    pub fn require(&self, metric: &str) -> EngineResult<f64> {
        self.value().ok_or_else(|| EngineError::DegenerateMetric {
            metric: metric.to_string(),
        })
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            MetricValue::Undefined => write!(f, "N/A"),
        }
    }
}

// ==========================================
// 群体统计
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationMetrics {
    pub avg_wait_time: MetricValue,
    pub avg_treatment_time: MetricValue,
    pub avg_total_time: MetricValue,
    pub avg_cost_per_patient: MetricValue,
    pub total_cost: f64,
    pub total_patients: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvements {
    pub wait_time_reduction: MetricValue,
    pub treatment_time_reduction: MetricValue,
    pub cost_reduction: MetricValue,
    /// 传统总费用 - AI 总费用
    pub total_cost_savings: f64,
}

/// 病种维度统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionStats {
    pub count: usize,
    pub avg_treatment_time: MetricValue,
    pub avg_cost: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionBreakdown {
    pub condition: Condition,
    pub traditional: ConditionStats,
    pub ai_enabled: ConditionStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationAnalysis {
    pub simulation_days: u32,
    pub traditional: PopulationMetrics,
    pub ai_enabled: PopulationMetrics,
    pub improvements: Improvements,
    pub condition_breakdown: Vec<ConditionBreakdown>,
}

/// 基于仿真节省额的多年回报推算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub simulation_days: u32,
    pub total_cost_savings: f64,
    /// 年化节省 = 总节省 × 365 / 仿真天数
    pub annualized_savings: f64,
    pub implementation_cost: f64,
    pub projection_years: u32,
    /// 多年节省 = 年化节省 × 年数 × 增长系数
    pub projected_savings: f64,
    pub roi_percentage: MetricValue,
}
