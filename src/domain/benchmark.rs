// ==========================================
// AI 智能体投资回报分析 - 静态基准表
// ==========================================
// 行业基准 / 病种基准 / AI 改进系数 / 岗位生产力 / 市场数据
// 红线: 所有基准值为只读静态常量，同一行业/病种的每次运行共用同一组常量
// ==========================================
// 收益权重 (0.3 / 0.05 / 0.2 ...) 为领域常量，原样保留，不做推导
// ==========================================

use crate::domain::types::{Benchmark, Condition, Industry, WorkRole};

// ==========================================
// 行业基准 (IndustryProfile)
// ==========================================

/// 年度收益驱动项: annual_revenue × revenue_weight × (benchmark_pct / 100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitDriver {
    /// 收益类别（用于报表拆分）
    pub category: &'static str,
    /// 引用的基准指标
    pub benchmark: Benchmark,
    /// 占营收的权重
    pub revenue_weight: f64,
}

/// 行业市场数据（仅用于展示）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketData {
    pub market_size_2024_musd: Option<f64>,
    pub market_size_2030_musd: Option<f64>,
    pub cagr_pct: Option<f64>,
    pub cost_savings_potential_musd: Option<f64>,
    pub roi_multiple: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryProfile {
    pub industry: Industry,
    /// 基准百分比 (指标, 百分比值)
    pub benchmarks: &'static [(Benchmark, f64)],
    /// 年度收益驱动项
    pub benefit_drivers: &'static [BenefitDriver],
    /// 每千名员工实施成本（货币单位）
    pub implementation_cost_per_thousand: f64,
    /// 静态回收期（月），不由复利模型推导
    pub payback_period_months: u32,
    pub market: MarketData,
}

impl IndustryProfile {
    /// 查询基准百分比
    pub fn benchmark(&self, key: Benchmark) -> Option<f64> {
        self.benchmarks
            .iter()
            .find(|(b, _)| *b == key)
            .map(|(_, v)| *v)
    }
}

const MILLION: f64 = 1_000_000.0;

static HEALTHCARE: IndustryProfile = IndustryProfile {
    industry: Industry::Healthcare,
    benchmarks: &[
        (Benchmark::ProductivityIncrease, 40.0),
        (Benchmark::ErrorReduction, 25.0),
        (Benchmark::AutomationRate, 95.0),
    ],
    benefit_drivers: &[
        BenefitDriver {
            category: "productivity_savings",
            benchmark: Benchmark::ProductivityIncrease,
            revenue_weight: 0.3,
        },
        BenefitDriver {
            category: "error_reduction_savings",
            benchmark: Benchmark::ErrorReduction,
            revenue_weight: 0.05,
        },
    ],
    implementation_cost_per_thousand: 2.5 * MILLION,
    payback_period_months: 18,
    market: MarketData {
        market_size_2024_musd: Some(917.3),
        market_size_2030_musd: Some(10890.9),
        cagr_pct: Some(42.4),
        cost_savings_potential_musd: Some(150000.0),
        roi_multiple: None,
    },
};

static FINANCE: IndustryProfile = IndustryProfile {
    industry: Industry::Finance,
    benchmarks: &[
        (Benchmark::FraudDetectionImprovement, 40.0),
        (Benchmark::ProductivityIncrease, 38.0),
        (Benchmark::CostReduction, 25.0),
        (Benchmark::AutomationRate, 70.0),
    ],
    benefit_drivers: &[
        BenefitDriver {
            category: "cost_reduction",
            benchmark: Benchmark::CostReduction,
            revenue_weight: 0.2,
        },
        BenefitDriver {
            category: "productivity_gains",
            benchmark: Benchmark::ProductivityIncrease,
            revenue_weight: 0.15,
        },
        BenefitDriver {
            category: "fraud_prevention",
            benchmark: Benchmark::FraudDetectionImprovement,
            revenue_weight: 0.02,
        },
    ],
    implementation_cost_per_thousand: 3.0 * MILLION,
    payback_period_months: 12,
    market: MarketData {
        market_size_2024_musd: None,
        market_size_2030_musd: None,
        cagr_pct: None,
        cost_savings_potential_musd: None,
        roi_multiple: Some(4.2),
    },
};

static LOGISTICS: IndustryProfile = IndustryProfile {
    industry: Industry::Logistics,
    benchmarks: &[
        (Benchmark::FuelCostSavings, 10.0),
        (Benchmark::DeliveryEfficiency, 25.0),
        (Benchmark::RouteOptimization, 30.0),
        (Benchmark::InventoryCostReduction, 15.0),
        (Benchmark::ProductivityIncrease, 25.0),
    ],
    benefit_drivers: &[
        BenefitDriver {
            category: "fuel_savings",
            benchmark: Benchmark::FuelCostSavings,
            revenue_weight: 0.1,
        },
        BenefitDriver {
            category: "efficiency_gains",
            benchmark: Benchmark::DeliveryEfficiency,
            revenue_weight: 0.15,
        },
        BenefitDriver {
            category: "inventory_savings",
            benchmark: Benchmark::InventoryCostReduction,
            revenue_weight: 0.08,
        },
    ],
    implementation_cost_per_thousand: 1.8 * MILLION,
    payback_period_months: 15,
    market: MarketData {
        market_size_2024_musd: None,
        market_size_2030_musd: None,
        cagr_pct: None,
        cost_savings_potential_musd: None,
        roi_multiple: None,
    },
};

static MANUFACTURING: IndustryProfile = IndustryProfile {
    industry: Industry::Manufacturing,
    benchmarks: &[
        (Benchmark::ProductivityIncrease, 25.0),
        (Benchmark::DowntimeReduction, 40.0),
        (Benchmark::QualityImprovement, 20.0),
        (Benchmark::MaintenanceCostSavings, 30.0),
    ],
    benefit_drivers: &[
        BenefitDriver {
            category: "productivity_gains",
            benchmark: Benchmark::ProductivityIncrease,
            revenue_weight: 0.2,
        },
        BenefitDriver {
            category: "downtime_savings",
            benchmark: Benchmark::DowntimeReduction,
            revenue_weight: 0.05,
        },
        BenefitDriver {
            category: "quality_improvements",
            benchmark: Benchmark::QualityImprovement,
            revenue_weight: 0.03,
        },
        BenefitDriver {
            category: "maintenance_savings",
            benchmark: Benchmark::MaintenanceCostSavings,
            revenue_weight: 0.04,
        },
    ],
    implementation_cost_per_thousand: 2.2 * MILLION,
    payback_period_months: 14,
    market: MarketData {
        market_size_2024_musd: None,
        market_size_2030_musd: None,
        cagr_pct: None,
        cost_savings_potential_musd: None,
        roi_multiple: Some(3.4),
    },
};

/// 查询行业基准
pub fn industry_profile(industry: Industry) -> &'static IndustryProfile {
    match industry {
        Industry::Healthcare => &HEALTHCARE,
        Industry::Finance => &FINANCE,
        Industry::Logistics => &LOGISTICS,
        Industry::Manufacturing => &MANUFACTURING,
    }
}

// ==========================================
// 市场展望 (全球 / 日本)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketOutlook {
    pub global_market_2022_musd: f64,
    pub global_market_2025_musd: f64,
    pub japan_market_2024_musd: f64,
    pub japan_market_2030_musd: f64,
    pub japan_cagr_pct: f64,
}

pub static MARKET_OUTLOOK: MarketOutlook = MarketOutlook {
    global_market_2022_musd: 5400.0,
    global_market_2025_musd: 7630.0,
    japan_market_2024_musd: 253.3,
    japan_market_2030_musd: 2425.3,
    japan_cagr_pct: 46.3,
};

// ==========================================
// 岗位生产力 (Role Productivity)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleProductivity {
    pub role: WorkRole,
    /// 每日节省工时（小时）
    pub time_saved_hours_per_day: f64,
    /// 效率提升（%）
    pub efficiency_increase_pct: f64,
}

static ROLE_PRODUCTIVITY: [RoleProductivity; 5] = [
    RoleProductivity {
        role: WorkRole::CustomerService,
        time_saved_hours_per_day: 1.0,
        efficiency_increase_pct: 13.8,
    },
    RoleProductivity {
        role: WorkRole::BusinessProfessionals,
        time_saved_hours_per_day: 1.2,
        efficiency_increase_pct: 59.0,
    },
    RoleProductivity {
        role: WorkRole::Programmers,
        time_saved_hours_per_day: 2.0,
        efficiency_increase_pct: 126.0,
    },
    RoleProductivity {
        role: WorkRole::Consultants,
        time_saved_hours_per_day: 1.5,
        efficiency_increase_pct: 25.1,
    },
    RoleProductivity {
        role: WorkRole::GeneralWorkers,
        time_saved_hours_per_day: 1.0,
        efficiency_increase_pct: 30.0,
    },
];

pub fn role_productivity(role: WorkRole) -> &'static RoleProductivity {
    // ROLE_PRODUCTIVITY 与 WorkRole::ALL 同序
    &ROLE_PRODUCTIVITY[role as usize]
}

/// 默认岗位构成（百分比）
pub const DEFAULT_ROLE_MIX: [(WorkRole, f64); 5] = [
    (WorkRole::CustomerService, 20.0),
    (WorkRole::BusinessProfessionals, 30.0),
    (WorkRole::Programmers, 15.0),
    (WorkRole::Consultants, 10.0),
    (WorkRole::GeneralWorkers, 25.0),
];

// ==========================================
// 病种基准 (ConditionProfile)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionProfile {
    pub condition: Condition,
    /// 基础诊疗时长（分钟）
    pub base_duration_min: f64,
    /// 基础费用
    pub base_cost: f64,
    /// 复杂度等级 1-5
    pub complexity_tier: u8,
}

static CONDITION_PROFILES: [ConditionProfile; 5] = [
    ConditionProfile {
        condition: Condition::RoutineCheckup,
        base_duration_min: 30.0,
        base_cost: 15000.0,
        complexity_tier: 1,
    },
    ConditionProfile {
        condition: Condition::Hypertension,
        base_duration_min: 45.0,
        base_cost: 25000.0,
        complexity_tier: 2,
    },
    ConditionProfile {
        condition: Condition::Diabetes,
        base_duration_min: 60.0,
        base_cost: 35000.0,
        complexity_tier: 3,
    },
    ConditionProfile {
        condition: Condition::HeartDisease,
        base_duration_min: 90.0,
        base_cost: 80000.0,
        complexity_tier: 4,
    },
    ConditionProfile {
        condition: Condition::Emergency,
        base_duration_min: 120.0,
        base_cost: 150000.0,
        complexity_tier: 5,
    },
];

pub fn condition_profile(condition: Condition) -> &'static ConditionProfile {
    // CONDITION_PROFILES 与 Condition::ALL 同序
    &CONDITION_PROFILES[condition as usize]
}

// ==========================================
// AI 改进系数 (按复杂度等级)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiImprovement {
    pub complexity_tier: u8,
    pub time_reduction: f64,
    pub cost_reduction: f64,
    /// 仅作记录，仿真中不参与计算
    pub error_reduction: f64,
}

static AI_IMPROVEMENTS: [AiImprovement; 5] = [
    AiImprovement {
        complexity_tier: 1,
        time_reduction: 0.25,
        cost_reduction: 0.15,
        error_reduction: 0.30,
    },
    AiImprovement {
        complexity_tier: 2,
        time_reduction: 0.35,
        cost_reduction: 0.20,
        error_reduction: 0.40,
    },
    AiImprovement {
        complexity_tier: 3,
        time_reduction: 0.40,
        cost_reduction: 0.25,
        error_reduction: 0.50,
    },
    AiImprovement {
        complexity_tier: 4,
        time_reduction: 0.45,
        cost_reduction: 0.30,
        error_reduction: 0.60,
    },
    AiImprovement {
        complexity_tier: 5,
        time_reduction: 0.30,
        cost_reduction: 0.20,
        error_reduction: 0.45,
    },
];

/// 查询复杂度等级对应的 AI 改进系数（等级 1-5）
pub fn ai_improvement(complexity_tier: u8) -> Option<&'static AiImprovement> {
    AI_IMPROVEMENTS
        .iter()
        .find(|i| i.complexity_tier == complexity_tier)
}

// ==========================================
// 抽样分布表
// ==========================================

/// 年龄段 (最小年龄, 最大年龄, 权重)，闭区间
pub const AGE_BRACKETS: [(u32, u32, f64); 5] = [
    (0, 18, 0.12),
    (19, 39, 0.23),
    (40, 64, 0.35),
    (65, 80, 0.22),
    (81, 100, 0.08),
];

/// 病种概率（按 Condition::ALL 顺序），年龄 < 40
pub const CONDITION_WEIGHTS_UNDER_40: [f64; 5] = [0.5, 0.2, 0.1, 0.1, 0.1];
/// 病种概率，40 ≤ 年龄 < 65
pub const CONDITION_WEIGHTS_40_TO_64: [f64; 5] = [0.3, 0.3, 0.2, 0.15, 0.05];
/// 病种概率，年龄 ≥ 65
pub const CONDITION_WEIGHTS_65_PLUS: [f64; 5] = [0.2, 0.25, 0.25, 0.25, 0.05];

pub fn condition_weights_for_age(age: u32) -> &'static [f64; 5] {
    if age < 40 {
        &CONDITION_WEIGHTS_UNDER_40
    } else if age < 65 {
        &CONDITION_WEIGHTS_40_TO_64
    } else {
        &CONDITION_WEIGHTS_65_PLUS
    }
}

/// 急诊严重程度: High / Critical
pub const EMERGENCY_SEVERITY_WEIGHTS: [f64; 2] = [0.6, 0.4];
/// 非急诊严重程度: Low / Medium / High
pub const STANDARD_SEVERITY_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// 到达时段分布（08:00 起 9 个小时桶）
pub const ARRIVAL_HOUR_WEIGHTS: [f64; 9] = [0.15, 0.18, 0.16, 0.14, 0.12, 0.10, 0.08, 0.05, 0.02];
