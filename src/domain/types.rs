// ==========================================
// AI 智能体投资回报分析 - 领域类型定义
// ==========================================
// 行业/病种/严重程度等枚举键
// 静态基准表均以这些枚举为索引
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 行业 (Industry)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    Healthcare,    // 医疗
    Finance,       // 金融
    Logistics,     // 物流
    Manufacturing, // 制造
}

impl Industry {
    /// 全部受支持行业（与基准表顺序一致）
    pub const ALL: [Industry; 4] = [
        Industry::Healthcare,
        Industry::Finance,
        Industry::Logistics,
        Industry::Manufacturing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Logistics => "Logistics",
            Industry::Manufacturing => "Manufacturing",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Industry {
    type Err = EngineError;

    /// 大小写不敏感，接受 "Healthcare" / "HEALTHCARE" / "healthcare"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| EngineError::InvalidIndustry(key.to_string()))
    }
}

// ==========================================
// 病种 (Condition)
// ==========================================
// 顺序即年龄分层概率向量的下标顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    RoutineCheckup, // 常规体检
    Hypertension,   // 高血压
    Diabetes,       // 糖尿病
    HeartDisease,   // 心脏病
    Emergency,      // 急诊
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::RoutineCheckup,
        Condition::Hypertension,
        Condition::Diabetes,
        Condition::HeartDisease,
        Condition::Emergency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Condition::RoutineCheckup => "Routine Checkup",
            Condition::Hypertension => "Hypertension",
            Condition::Diabetes => "Diabetes",
            Condition::HeartDisease => "Heart Disease",
            Condition::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Condition {
    type Err = EngineError;

    /// 接受展示名 ("Heart Disease") 或下划线形式 ("HEART_DISEASE")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let normalized = key.replace('_', " ");
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| EngineError::InvalidCondition(key.to_string()))
    }
}

// ==========================================
// 严重程度 (Severity)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// 严重程度乘数（作用于基础时长与基础费用）
    pub fn multiplier(&self) -> f64 {
        match self {
            Severity::Low => 0.8,
            Severity::Medium => 1.0,
            Severity::High => 1.3,
            Severity::Critical => 1.8,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

// ==========================================
// 仿真场景 (Scenario)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    Traditional, // 传统流程
    AiEnabled,   // AI 辅助
}

impl Scenario {
    pub fn from_ai_flag(ai_enabled: bool) -> Self {
        if ai_enabled {
            Scenario::AiEnabled
        } else {
            Scenario::Traditional
        }
    }

    pub fn is_ai_enabled(&self) -> bool {
        matches!(self, Scenario::AiEnabled)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Traditional => write!(f, "Traditional"),
            Scenario::AiEnabled => write!(f, "AI-Enabled"),
        }
    }
}

// ==========================================
// 行业基准指标 (Benchmark)
// ==========================================
// 百分比类指标，收益驱动项通过该键引用基准值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Benchmark {
    ProductivityIncrease,
    CostReduction,
    ErrorReduction,
    FraudDetectionImprovement,
    AutomationRate,
    FuelCostSavings,
    DeliveryEfficiency,
    RouteOptimization,
    InventoryCostReduction,
    DowntimeReduction,
    QualityImprovement,
    MaintenanceCostSavings,
}

impl Benchmark {
    pub fn key(&self) -> &'static str {
        match self {
            Benchmark::ProductivityIncrease => "productivity_increase",
            Benchmark::CostReduction => "cost_reduction",
            Benchmark::ErrorReduction => "error_reduction",
            Benchmark::FraudDetectionImprovement => "fraud_detection_improvement",
            Benchmark::AutomationRate => "automation_rate",
            Benchmark::FuelCostSavings => "fuel_cost_savings",
            Benchmark::DeliveryEfficiency => "delivery_efficiency",
            Benchmark::RouteOptimization => "route_optimization",
            Benchmark::InventoryCostReduction => "inventory_cost_reduction",
            Benchmark::DowntimeReduction => "downtime_reduction",
            Benchmark::QualityImprovement => "quality_improvement",
            Benchmark::MaintenanceCostSavings => "maintenance_cost_savings",
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// 岗位 (Work Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkRole {
    CustomerService,
    BusinessProfessionals,
    Programmers,
    Consultants,
    GeneralWorkers,
}

impl WorkRole {
    pub const ALL: [WorkRole; 5] = [
        WorkRole::CustomerService,
        WorkRole::BusinessProfessionals,
        WorkRole::Programmers,
        WorkRole::Consultants,
        WorkRole::GeneralWorkers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorkRole::CustomerService => "Customer Service",
            WorkRole::BusinessProfessionals => "Business Professionals",
            WorkRole::Programmers => "Programmers",
            WorkRole::Consultants => "Consultants",
            WorkRole::GeneralWorkers => "General Workers",
        }
    }
}

impl fmt::Display for WorkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
