// ==========================================
// AI 智能体投资回报分析 - 领域模型层
// ==========================================
// 职责: 定义领域实体、枚举键、静态基准表
// 红线: 不含引擎逻辑；基准表只读
// ==========================================

pub mod benchmark;
pub mod metrics;
pub mod patient;
pub mod roi;
pub mod types;

// 重导出核心类型
pub use benchmark::{
    ai_improvement, condition_profile, industry_profile, role_productivity, AiImprovement,
    BenefitDriver, ConditionProfile, IndustryProfile, MarketData, MarketOutlook,
    RoleProductivity, MARKET_OUTLOOK,
};
pub use metrics::{
    ConditionBreakdown, ConditionStats, Improvements, MetricValue, PopulationMetrics,
    SavingsProjection, SimulationAnalysis,
};
pub use patient::{ComparativeResult, Patient, SimulationDay};
pub use roi::{
    BenefitLine, CashFlowSchedule, ComprehensiveAnalysis, RoiProjection, RoiSummary,
    WorkforceProductivity, YearProjection,
};
pub use types::{Benchmark, Condition, Industry, Scenario, Severity, WorkRole};
