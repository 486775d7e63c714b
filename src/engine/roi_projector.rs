// ==========================================
// AI 智能体投资回报分析 - ROI 测算引擎
// ==========================================
// 输入: 行业 + 员工规模 + 年营收 + 测算年数
// 输出: RoiProjection (实施成本 / 年度收益 / 逐年累计 / ROI / 回本年)
// ==========================================
// 收益模型: 第 n 年收益 = 年度收益 × 1.1^(n-1)
// 成本模型: 第 n 年累计成本 = 实施成本 × (1 + 0.1 × n)
// 纯函数: 仅依赖入参与静态基准表
// ==========================================

use crate::domain::benchmark::{industry_profile, role_productivity, IndustryProfile, DEFAULT_ROLE_MIX};
use crate::domain::metrics::MetricValue;
use crate::domain::roi::{
    BenefitLine, CashFlowSchedule, ComprehensiveAnalysis, RoiProjection, RoiSummary,
    WorkforceProductivity, YearProjection,
};
use crate::domain::types::{Industry, WorkRole};
use crate::engine::error::{ensure_positive, EngineError, EngineResult};
use tracing::{debug, instrument};

/// 默认测算年数
pub const DEFAULT_HORIZON_YEARS: u32 = 5;
/// 年度收益复合增长率
pub const BENEFIT_GROWTH_RATE: f64 = 0.10;
/// 年度成本增长率（基于实施成本）
pub const COST_GROWTH_RATE: f64 = 0.10;

// ==========================================
// RoiProjector - ROI 测算引擎
// ==========================================
pub struct RoiProjector {
    // 无状态引擎
}

impl RoiProjector {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 行业 ROI 测算
    ///
    /// # 参数
    /// - `industry`: 行业
    /// - `company_size`: 员工人数（> 0）
    /// - `annual_revenue`: 年营收（> 0）
    /// - `horizon_years`: 测算年数（> 0）
    ///
    /// # 返回
    /// RoiProjection，逐年序列长度恰为 horizon_years
    #[instrument(skip(self))]
    pub fn project(
        &self,
        industry: Industry,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
    ) -> EngineResult<RoiProjection> {
        ensure_positive("company_size", company_size)?;
        ensure_positive("annual_revenue", annual_revenue)?;
        if horizon_years == 0 {
            return Err(EngineError::invalid_parameter(
                "horizon_years",
                horizon_years,
                "必须大于 0",
            ));
        }

        let profile = industry_profile(industry);

        // 1. 实施成本
        let implementation_cost = Self::implementation_cost(profile, company_size);

        // 2. 年度收益（按行业驱动项加权）
        let (annual_benefit, benefit_breakdown) = Self::annual_benefit(profile, annual_revenue);

        // 3. 复利测算
        let schedule = compound(implementation_cost, annual_benefit, horizon_years);
        let roi_percentage = schedule.roi_percentage.require("roi_percentage")?;

        debug!(
            implementation_cost,
            annual_benefit,
            roi_pct = roi_percentage,
            break_even_year = ?schedule.break_even_year,
            "ROI 测算完成"
        );

        Ok(RoiProjection {
            industry,
            company_size,
            annual_revenue,
            horizon_years,
            implementation_cost,
            annual_benefit,
            benefit_breakdown,
            years: schedule.years,
            roi_percentage,
            payback_period_months: profile.payback_period_months,
            break_even_year: schedule.break_even_year,
        })
    }

    /// 按行业名称测算（名称不在基准表中返回 InvalidIndustry）
    pub fn project_by_key(
        &self,
        industry: &str,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
    ) -> EngineResult<RoiProjection> {
        let industry: Industry = industry.parse()?;
        self.project(industry, company_size, annual_revenue, horizon_years)
    }

    /// 综合分析: ROI 测算 + 摘要 + 岗位生产力
    ///
    /// role_mix 为 None 时使用默认岗位构成
    #[instrument(skip(self, role_mix))]
    pub fn comprehensive_analysis(
        &self,
        industry: Industry,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
        role_mix: Option<&[(WorkRole, f64)]>,
    ) -> EngineResult<ComprehensiveAnalysis> {
        let roi_analysis = self.project(industry, company_size, annual_revenue, horizon_years)?;
        let workforce =
            Self::workforce_productivity(company_size, role_mix.unwrap_or(&DEFAULT_ROLE_MIX[..]))?;

        let summary = RoiSummary {
            total_roi_pct: roi_analysis.roi_percentage,
            payback_period_months: roi_analysis.payback_period_months,
            annual_cost_savings: roi_analysis.annual_benefit,
            implementation_cost: roi_analysis.implementation_cost,
        };

        Ok(ComprehensiveAnalysis {
            roi_analysis,
            summary,
            workforce,
        })
    }

    // ==========================================
    // 分项计算
    // ==========================================

    /// 实施成本 = (员工数 / 1000) × 每千人实施成本
    pub fn implementation_cost(profile: &IndustryProfile, company_size: f64) -> f64 {
        (company_size / 1000.0) * profile.implementation_cost_per_thousand
    }

    /// 年度收益 = Σ 营收 × 权重 × (基准百分比 / 100)
    ///
    /// # 返回
    /// (年度收益合计, 分项明细)
    pub fn annual_benefit(profile: &IndustryProfile, annual_revenue: f64) -> (f64, Vec<BenefitLine>) {
        let lines: Vec<BenefitLine> = profile
            .benefit_drivers
            .iter()
            .map(|driver| {
                let benchmark_pct = profile.benchmark(driver.benchmark).unwrap_or(0.0);
                BenefitLine {
                    category: driver.category.to_string(),
                    benchmark_pct,
                    revenue_weight: driver.revenue_weight,
                    amount: annual_revenue * driver.revenue_weight * (benchmark_pct / 100.0),
                }
            })
            .collect();

        let total = lines.iter().map(|l| l.amount).sum();
        (total, lines)
    }

    /// 岗位生产力加权汇总
    ///
    /// 岗位占比需非负且合计 > 0，内部归一化
    pub fn workforce_productivity(
        company_size: f64,
        role_mix: &[(WorkRole, f64)],
    ) -> EngineResult<WorkforceProductivity> {
        if let Some((role, share)) = role_mix.iter().find(|(_, s)| !s.is_finite() || *s < 0.0) {
            return Err(EngineError::invalid_parameter(
                &format!("role_mix[{}]", role),
                share,
                "岗位占比不能为负",
            ));
        }
        let total: f64 = role_mix.iter().map(|(_, s)| s).sum();
        ensure_positive("role_mix_total", total)?;

        let role_shares: Vec<(WorkRole, f64)> =
            role_mix.iter().map(|(role, s)| (*role, s / total)).collect();

        let mut avg_time_saved = 0.0;
        let mut avg_efficiency = 0.0;
        for (role, share) in &role_shares {
            let p = role_productivity(*role);
            avg_time_saved += share * p.time_saved_hours_per_day;
            avg_efficiency += share * p.efficiency_increase_pct;
        }

        Ok(WorkforceProductivity {
            role_shares,
            avg_time_saved_hours_per_day: avg_time_saved,
            avg_efficiency_increase_pct: avg_efficiency,
            total_hours_saved_per_day: avg_time_saved * company_size,
        })
    }
}

impl Default for RoiProjector {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 复利测算
// ==========================================

/// 按复利模型展开逐年累计收益/成本/净收益
///
/// ROI 以实施成本为分母；实施成本为零时 roi_percentage 为 Undefined
pub fn compound(implementation_cost: f64, annual_benefit: f64, horizon_years: u32) -> CashFlowSchedule {
    let mut years = Vec::with_capacity(horizon_years as usize);
    let mut cumulative_benefit = 0.0;

    for year in 1..=horizon_years {
        let benefit = annual_benefit * (1.0 + BENEFIT_GROWTH_RATE).powi(year as i32 - 1);
        cumulative_benefit += benefit;
        let cumulative_cost = implementation_cost * (1.0 + COST_GROWTH_RATE * year as f64);

        years.push(YearProjection {
            year,
            annual_benefit: benefit,
            cumulative_benefit,
            cumulative_cost,
            net_benefit: cumulative_benefit - cumulative_cost,
        });
    }

    let break_even_year = years.iter().find(|y| y.net_benefit > 0.0).map(|y| y.year);
    let roi_percentage = years
        .last()
        .map(|y| MetricValue::ratio(y.net_benefit, implementation_cost).map(|r| r * 100.0))
        .unwrap_or(MetricValue::Undefined);

    CashFlowSchedule {
        years,
        break_even_year,
        roi_percentage,
    }
}
