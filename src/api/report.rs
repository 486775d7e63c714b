// ==========================================
// AI 智能体投资回报分析 - 报表输出
// ==========================================
// 职责: 渲染 ROI / 综合分析 / 仿真结论文本；导出患者明细 CSV
// 说明: 货币符号与文案来自 locales/*.yml，不属于计算口径
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::benchmark::{industry_profile, MARKET_OUTLOOK};
use crate::domain::metrics::{MetricValue, SavingsProjection, SimulationAnalysis};
use crate::domain::patient::{ComparativeResult, Patient};
use crate::domain::roi::{ComprehensiveAnalysis, RoiProjection};
use crate::domain::types::Industry;
use crate::i18n::t_locale;
use serde::Serialize;
use std::io::Write;

const RULE_WIDE: &str = "============================================================";
const RULE_NARROW: &str = "========================================";

// ==========================================
// 数值格式化
// ==========================================

/// 金额取整并加千分位: 12500000.4 → "12,500,000"
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 百分比（带 % 号）；无定义时输出本地化的 N/A
pub fn format_pct(value: MetricValue, decimals: usize, locale: &str) -> String {
    match value {
        MetricValue::Value(v) => format!("{:.*}%", decimals, v),
        MetricValue::Undefined => t_locale(locale, "common.not_available", &[]),
    }
}

// ==========================================
// ROI 报表
// ==========================================

/// ROI 摘要
pub fn render_roi_summary(projection: &RoiProjection, locale: &str) -> String {
    let industry = projection.industry.to_string();
    let mut lines = vec![
        t_locale(locale, "roi.title", &[("industry", &industry)]),
        String::new(),
        t_locale(locale, "roi.summary_header", &[("industry", &industry)]),
        t_locale(
            locale,
            "roi.company_size",
            &[("value", &format_amount(projection.company_size))],
        ),
        t_locale(
            locale,
            "roi.annual_revenue",
            &[("value", &format_amount(projection.annual_revenue))],
        ),
        t_locale(
            locale,
            "roi.implementation_cost",
            &[("value", &format_amount(projection.implementation_cost))],
        ),
        t_locale(
            locale,
            "roi.annual_savings",
            &[("value", &format_amount(projection.annual_benefit))],
        ),
    ];

    for line in &projection.benefit_breakdown {
        lines.push(t_locale(
            locale,
            "roi.benefit_line",
            &[
                ("category", &line.category),
                ("value", &format_amount(line.amount)),
            ],
        ));
    }

    lines.push(t_locale(
        locale,
        "roi.roi",
        &[
            ("years", &projection.horizon_years.to_string()),
            ("value", &format!("{:.1}", projection.roi_percentage)),
        ],
    ));
    lines.push(t_locale(
        locale,
        "roi.payback",
        &[("value", &projection.payback_period_months.to_string())],
    ));
    lines.push(match projection.break_even_year {
        Some(year) => t_locale(locale, "roi.break_even", &[("value", &year.to_string())]),
        None => t_locale(locale, "roi.break_even_none", &[]),
    });

    lines.join("\n")
}

/// 综合分析（ROI 摘要 + 岗位生产力）
pub fn render_comprehensive(analysis: &ComprehensiveAnalysis, locale: &str) -> String {
    let workforce = &analysis.workforce;
    let mut out = render_roi_summary(&analysis.roi_analysis, locale);
    out.push_str("\n\n");
    out.push_str(&t_locale(locale, "roi.workforce_header", &[]));
    for (role, share) in &workforce.role_shares {
        out.push('\n');
        out.push_str(&t_locale(
            locale,
            "roi.role_share",
            &[
                ("role", role.name()),
                ("value", &format!("{:.1}", share * 100.0)),
            ],
        ));
    }
    out.push('\n');
    out.push_str(&t_locale(
        locale,
        "roi.avg_time_saved",
        &[("value", &format!("{:.2}", workforce.avg_time_saved_hours_per_day))],
    ));
    out.push('\n');
    out.push_str(&t_locale(
        locale,
        "roi.avg_efficiency",
        &[("value", &format!("{:.1}", workforce.avg_efficiency_increase_pct))],
    ));
    out.push('\n');
    out.push_str(&t_locale(
        locale,
        "roi.total_hours_saved",
        &[("value", &format_amount(workforce.total_hours_saved_per_day))],
    ));
    out.push_str("\n\n");
    out.push_str(&render_market_context(analysis.roi_analysis.industry, locale));
    out
}

/// 市场背景（行业市场数据 + 全球/日本展望），行业缺失的数据项不输出
pub fn render_market_context(industry: Industry, locale: &str) -> String {
    let market = &industry_profile(industry).market;
    let mut lines = vec![t_locale(locale, "roi.market_header", &[])];

    if let (Some(from), Some(to)) = (market.market_size_2024_musd, market.market_size_2030_musd) {
        lines.push(t_locale(
            locale,
            "roi.market_size",
            &[("from", &format!("{:.1}", from)), ("to", &format!("{:.1}", to))],
        ));
    }
    if let Some(cagr) = market.cagr_pct {
        lines.push(t_locale(locale, "roi.market_cagr", &[("value", &format!("{:.1}", cagr))]));
    }
    if let Some(potential) = market.cost_savings_potential_musd {
        lines.push(t_locale(
            locale,
            "roi.savings_potential",
            &[("value", &format_amount(potential))],
        ));
    }
    if let Some(multiple) = market.roi_multiple {
        lines.push(t_locale(locale, "roi.roi_multiple", &[("value", &format!("{:.1}", multiple))]));
    }

    let outlook = &MARKET_OUTLOOK;
    lines.push(t_locale(
        locale,
        "roi.outlook_global",
        &[
            ("from", &format_amount(outlook.global_market_2022_musd)),
            ("to", &format_amount(outlook.global_market_2025_musd)),
        ],
    ));
    lines.push(t_locale(
        locale,
        "roi.outlook_japan",
        &[
            ("from", &format!("{:.1}", outlook.japan_market_2024_musd)),
            ("to", &format!("{:.1}", outlook.japan_market_2030_musd)),
            ("cagr", &format!("{:.1}", outlook.japan_cagr_pct)),
        ],
    ));

    lines.join("\n")
}

// ==========================================
// 仿真报表
// ==========================================

/// 仿真关键结论 + 多年回报推算
pub fn render_simulation_findings(
    analysis: &SimulationAnalysis,
    savings: &SavingsProjection,
    locale: &str,
) -> String {
    let improvements = &analysis.improvements;
    let years = savings.projection_years.to_string();
    let roi = format_pct(savings.roi_percentage, 0, locale);

    let lines = vec![
        t_locale(locale, "simulation.key_findings", &[]),
        RULE_NARROW.to_string(),
        t_locale(
            locale,
            "simulation.cost_reduction",
            &[("value", &format_pct(improvements.cost_reduction, 1, locale))],
        ),
        t_locale(
            locale,
            "simulation.wait_time_reduction",
            &[("value", &format_pct(improvements.wait_time_reduction, 1, locale))],
        ),
        t_locale(
            locale,
            "simulation.treatment_time_reduction",
            &[("value", &format_pct(improvements.treatment_time_reduction, 1, locale))],
        ),
        t_locale(
            locale,
            "simulation.total_savings",
            &[
                ("days", &savings.simulation_days.to_string()),
                ("value", &format_amount(savings.total_cost_savings)),
            ],
        ),
        t_locale(
            locale,
            "simulation.annualized_savings",
            &[("value", &format_amount(savings.annualized_savings))],
        ),
        String::new(),
        t_locale(locale, "simulation.projection_header", &[("years", &years)]),
        t_locale(
            locale,
            "simulation.implementation_cost",
            &[("value", &format_amount(savings.implementation_cost))],
        ),
        t_locale(
            locale,
            "simulation.projected_savings",
            &[
                ("years", &years),
                ("value", &format_amount(savings.projected_savings)),
            ],
        ),
        t_locale(locale, "simulation.roi", &[("value", &roi)]),
    ];

    lines.join("\n")
}

/// 病种拆分表
pub fn render_condition_breakdown(analysis: &SimulationAnalysis, locale: &str) -> String {
    let mut lines = vec![
        t_locale(locale, "simulation.breakdown_header", &[]),
        RULE_WIDE.to_string(),
    ];
    for row in &analysis.condition_breakdown {
        lines.push(format!(
            "{:<16} {:>6} {:>8} {:>12} | {:>6} {:>8} {:>12}",
            row.condition.name(),
            row.traditional.count,
            format!("{:.1}", row.traditional.avg_treatment_time),
            format!("{:.0}", row.traditional.avg_cost),
            row.ai_enabled.count,
            format!("{:.1}", row.ai_enabled.avg_treatment_time),
            format!("{:.0}", row.ai_enabled.avg_cost),
        ));
    }
    lines.join("\n")
}

// ==========================================
// CSV 导出
// ==========================================

#[derive(Debug, Serialize)]
struct PatientRow<'a> {
    patient_id: &'a str,
    age: u32,
    condition: &'a str,
    severity: String,
    arrival_time: String,
    wait_time: f64,
    treatment_duration: f64,
    total_time: f64,
    cost: f64,
    scenario: String,
}

impl<'a> From<&'a Patient> for PatientRow<'a> {
    fn from(p: &'a Patient) -> Self {
        PatientRow {
            patient_id: &p.id,
            age: p.age,
            condition: p.condition.name(),
            severity: p.severity.to_string(),
            arrival_time: p.arrival_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            wait_time: p.wait_time,
            treatment_duration: p.treatment_duration,
            total_time: p.total_time(),
            cost: p.cost,
            scenario: p.scenario().to_string(),
        }
    }
}

/// 导出两组患者明细（先传统后 AI）
///
/// # 返回
/// 写出的数据行数（不含表头）
pub fn export_patients_csv<W: Write>(result: &ComparativeResult, writer: W) -> ApiResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0usize;
    for patient in result.traditional.iter().chain(result.ai_enabled.iter()) {
        csv_writer.serialize(PatientRow::from(patient))?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(12_500_000.4), "12,500,000");
        assert_eq!(format_amount(-1_234_567.0), "-1,234,567");
        assert_eq!(format_amount(-0.2), "0");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(MetricValue::Value(24.26), 1, "en"), "24.3%");
        assert_eq!(format_pct(MetricValue::Value(1234.4), 0, "en"), "1234%");
        assert_eq!(format_pct(MetricValue::Undefined, 1, "en"), "N/A");
    }
}
