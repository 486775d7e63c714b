// ==========================================
// AI 智能体投资回报分析 - ROI 测算结果
// ==========================================
// 每次查询新建，不持久化
// ==========================================

use crate::domain::metrics::MetricValue;
use crate::domain::types::{Industry, WorkRole};
use serde::{Deserialize, Serialize};

/// 年度收益拆分项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitLine {
    pub category: String,
    pub benchmark_pct: f64,
    pub revenue_weight: f64,
    pub amount: f64,
}

/// 单年度测算（累计口径）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 年份序号（从 1 开始）
    pub year: u32,
    /// 当年收益
    pub annual_benefit: f64,
    pub cumulative_benefit: f64,
    pub cumulative_cost: f64,
    pub net_benefit: f64,
}

/// 复利测算表（不含行业信息）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    pub years: Vec<YearProjection>,
    /// 首个净收益 > 0 的年份；测算期内未回本为 None
    pub break_even_year: Option<u32>,
    /// 实施成本为零时无定义
    pub roi_percentage: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub industry: Industry,
    pub company_size: f64,
    pub annual_revenue: f64,
    pub horizon_years: u32,
    pub implementation_cost: f64,
    pub annual_benefit: f64,
    pub benefit_breakdown: Vec<BenefitLine>,
    pub years: Vec<YearProjection>,
    pub roi_percentage: f64,
    pub payback_period_months: u32,
    pub break_even_year: Option<u32>,
}

impl RoiProjection {
    pub fn cumulative_benefits(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.cumulative_benefit).collect()
    }

    pub fn cumulative_costs(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.cumulative_cost).collect()
    }

    pub fn net_benefits(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.net_benefit).collect()
    }
}

/// 岗位生产力汇总（按岗位构成加权）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceProductivity {
    /// 归一化后的岗位占比 (岗位, 0~1)
    pub role_shares: Vec<(WorkRole, f64)>,
    /// 人均每日节省工时（小时）
    pub avg_time_saved_hours_per_day: f64,
    /// 加权效率提升（%）
    pub avg_efficiency_increase_pct: f64,
    /// 全员每日节省工时（小时）
    pub total_hours_saved_per_day: f64,
}

/// 综合分析摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub total_roi_pct: f64,
    pub payback_period_months: u32,
    pub annual_cost_savings: f64,
    pub implementation_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    pub roi_analysis: RoiProjection,
    pub summary: RoiSummary,
    pub workforce: WorkforceProductivity,
}
