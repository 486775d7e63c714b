// ==========================================
// AI 智能体投资回报分析 - ROI API
// ==========================================
// 职责: 校验入参 → 调用 RoiProjector → 返回测算结果
// 架构: API 层 → 引擎层 (RoiProjector)
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::{parse_industry, ParameterValidator};
use crate::config::RoiSettings;
use crate::domain::roi::{ComprehensiveAnalysis, RoiProjection};
use crate::domain::types::{Industry, WorkRole};
use crate::engine::roi_projector::RoiProjector;
use tracing::info;

// ==========================================
// RoiApi - ROI 测算 API
// ==========================================
pub struct RoiApi {
    projector: RoiProjector,
}

impl RoiApi {
    pub fn new() -> Self {
        Self {
            projector: RoiProjector::new(),
        }
    }

    /// 行业 ROI 测算（按行业名称）
    ///
    /// # 参数
    /// - industry: 行业名称（Healthcare / Finance / Logistics / Manufacturing）
    /// - company_size: 员工人数
    /// - annual_revenue: 年营收
    /// - horizon_years: 测算年数
    ///
    /// # 返回
    /// - Ok(RoiProjection)
    /// - Err(ApiError::UnsupportedIndustry / ParameterValidationError)
    pub fn project(
        &self,
        industry: &str,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
    ) -> ApiResult<RoiProjection> {
        let industry = parse_industry(industry)?;
        self.project_industry(industry, company_size, annual_revenue, horizon_years)
    }

    pub fn project_industry(
        &self,
        industry: Industry,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
    ) -> ApiResult<RoiProjection> {
        let _perf = crate::perf::PerfGuard::new("api.roi_project");

        ParameterValidator::new()
            .positive("company_size", company_size)
            .positive("annual_revenue", annual_revenue)
            .positive_count("horizon_years", horizon_years as u64)
            .finish()?;

        let projection =
            self.projector
                .project(industry, company_size, annual_revenue, horizon_years)?;

        info!(
            industry = %industry,
            implementation_cost = projection.implementation_cost,
            annual_benefit = projection.annual_benefit,
            roi_pct = projection.roi_percentage,
            "ROI 测算完成"
        );
        Ok(projection)
    }

    /// 综合分析（ROI + 摘要 + 岗位生产力）
    ///
    /// role_mix 为 None 时使用默认岗位构成（20/30/15/10/25 %）
    pub fn comprehensive_analysis(
        &self,
        industry: &str,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
        role_mix: Option<&[(WorkRole, f64)]>,
    ) -> ApiResult<ComprehensiveAnalysis> {
        let industry = parse_industry(industry)?;
        self.comprehensive_industry(industry, company_size, annual_revenue, horizon_years, role_mix)
    }

    /// 按配置做综合分析（行业 / 规模 / 营收 / 测算年数均取自 roi 配置段）
    pub fn comprehensive_from_settings(
        &self,
        settings: &RoiSettings,
        role_mix: Option<&[(WorkRole, f64)]>,
    ) -> ApiResult<ComprehensiveAnalysis> {
        self.comprehensive_industry(
            settings.industry,
            settings.company_size,
            settings.annual_revenue,
            settings.horizon_years,
            role_mix,
        )
    }

    fn comprehensive_industry(
        &self,
        industry: Industry,
        company_size: f64,
        annual_revenue: f64,
        horizon_years: u32,
        role_mix: Option<&[(WorkRole, f64)]>,
    ) -> ApiResult<ComprehensiveAnalysis> {
        let mut validator = ParameterValidator::new()
            .positive("company_size", company_size)
            .positive("annual_revenue", annual_revenue)
            .positive_count("horizon_years", horizon_years as u64);
        if let Some(mix) = role_mix {
            validator = validator.role_mix(mix);
        }
        validator.finish()?;

        let analysis = self.projector.comprehensive_analysis(
            industry,
            company_size,
            annual_revenue,
            horizon_years,
            role_mix,
        )?;
        info!(industry = %industry, horizon_years, "综合分析完成");
        Ok(analysis)
    }
}

impl Default for RoiApi {
    fn default() -> Self {
        Self::new()
    }
}
