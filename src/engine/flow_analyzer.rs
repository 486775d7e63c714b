// ==========================================
// AI 智能体投资回报分析 - 仿真结果分析引擎
// ==========================================
// 输入: ComparativeResult (传统 / AI 两组患者)
// 输出: SimulationAnalysis (群体指标 + 改进幅度 + 病种拆分)
// ==========================================
// 红线: 分母为零 → MetricValue::Undefined，不崩溃、不归零
// ==========================================

use crate::domain::metrics::{
    ConditionBreakdown, ConditionStats, Improvements, MetricValue, PopulationMetrics,
    SavingsProjection, SimulationAnalysis,
};
use crate::domain::patient::{ComparativeResult, Patient};
use crate::domain::types::Condition;
use crate::engine::error::{ensure_positive, EngineError, EngineResult};
use tracing::{instrument, warn};

/// 年化天数
pub const DAYS_PER_YEAR: f64 = 365.0;
/// 默认推算年数
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;
/// 默认多年增长系数
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.1;

// ==========================================
// FlowAnalyzer - 仿真结果分析引擎
// ==========================================
pub struct FlowAnalyzer {
    // 无状态引擎
}

impl FlowAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    /// 对比分析
    #[instrument(skip(self, result), fields(
        traditional = result.traditional.len(),
        ai_enabled = result.ai_enabled.len()
    ))]
    pub fn analyze(&self, result: &ComparativeResult) -> SimulationAnalysis {
        let traditional = Self::population_metrics(&result.traditional);
        let ai_enabled = Self::population_metrics(&result.ai_enabled);
        let improvements = Self::improvements(&traditional, &ai_enabled);

        for (name, value) in [
            ("wait_time_reduction", improvements.wait_time_reduction),
            ("treatment_time_reduction", improvements.treatment_time_reduction),
            ("cost_reduction", improvements.cost_reduction),
        ] {
            if value.is_undefined() {
                warn!(metric = name, "改进指标无定义（基线为零或样本为空）");
            }
        }

        SimulationAnalysis {
            simulation_days: result.simulation_days,
            condition_breakdown: Self::condition_breakdown(result),
            traditional,
            ai_enabled,
            improvements,
        }
    }

    // ==========================================
    // 指标计算
    // ==========================================

    /// 群体指标: 平均等待 / 平均诊疗 / 平均总时长 / 人均费用 / 总费用 / 人数
    pub fn population_metrics(patients: &[Patient]) -> PopulationMetrics {
        let n = patients.len();
        let wait_sum: f64 = patients.iter().map(|p| p.wait_time).sum();
        let treatment_sum: f64 = patients.iter().map(|p| p.treatment_duration).sum();
        let total_time_sum: f64 = patients.iter().map(|p| p.total_time()).sum();
        let total_cost: f64 = patients.iter().map(|p| p.cost).sum();

        PopulationMetrics {
            avg_wait_time: MetricValue::mean(wait_sum, n),
            avg_treatment_time: MetricValue::mean(treatment_sum, n),
            avg_total_time: MetricValue::mean(total_time_sum, n),
            avg_cost_per_patient: MetricValue::mean(total_cost, n),
            total_cost,
            total_patients: n,
        }
    }

    /// 改进幅度（AI 相对传统）
    pub fn improvements(traditional: &PopulationMetrics, ai_enabled: &PopulationMetrics) -> Improvements {
        Improvements {
            wait_time_reduction: MetricValue::reduction_pct(
                traditional.avg_wait_time,
                ai_enabled.avg_wait_time,
            ),
            treatment_time_reduction: MetricValue::reduction_pct(
                traditional.avg_treatment_time,
                ai_enabled.avg_treatment_time,
            ),
            cost_reduction: MetricValue::reduction_pct(
                traditional.avg_cost_per_patient,
                ai_enabled.avg_cost_per_patient,
            ),
            total_cost_savings: traditional.total_cost - ai_enabled.total_cost,
        }
    }

    /// 病种拆分（按 Condition::ALL 顺序，包含样本为零的病种）
    pub fn condition_breakdown(result: &ComparativeResult) -> Vec<ConditionBreakdown> {
        Condition::ALL
            .iter()
            .map(|condition| ConditionBreakdown {
                condition: *condition,
                traditional: Self::condition_stats(&result.traditional, *condition),
                ai_enabled: Self::condition_stats(&result.ai_enabled, *condition),
            })
            .collect()
    }

    fn condition_stats(patients: &[Patient], condition: Condition) -> ConditionStats {
        let (count, treatment_sum, cost_sum) = patients
            .iter()
            .filter(|p| p.condition == condition)
            .fold((0usize, 0.0, 0.0), |(n, t, c), p| {
                (n + 1, t + p.treatment_duration, c + p.cost)
            });

        ConditionStats {
            count,
            avg_treatment_time: MetricValue::mean(treatment_sum, count),
            avg_cost: MetricValue::mean(cost_sum, count),
        }
    }

    // ==========================================
    // 节省额推算
    // ==========================================

    /// 以仿真节省额推算多年回报
    ///
    /// - 年化节省 = 总节省 × 365 / 仿真天数
    /// - 多年节省 = 年化节省 × projection_years × growth_factor
    /// - ROI% = (多年节省 - 实施成本) / 实施成本 × 100
    pub fn project_savings(
        &self,
        analysis: &SimulationAnalysis,
        implementation_cost: f64,
        projection_years: u32,
        growth_factor: f64,
    ) -> EngineResult<SavingsProjection> {
        if analysis.simulation_days == 0 {
            return Err(EngineError::invalid_parameter(
                "simulation_days",
                analysis.simulation_days,
                "必须大于 0",
            ));
        }
        if projection_years == 0 {
            return Err(EngineError::invalid_parameter(
                "projection_years",
                projection_years,
                "必须大于 0",
            ));
        }
        ensure_positive("growth_factor", growth_factor)?;
        if !implementation_cost.is_finite() || implementation_cost < 0.0 {
            return Err(EngineError::invalid_parameter(
                "implementation_cost",
                implementation_cost,
                "不能为负",
            ));
        }

        let total_cost_savings = analysis.improvements.total_cost_savings;
        let annualized_savings = total_cost_savings * DAYS_PER_YEAR / analysis.simulation_days as f64;
        let projected_savings = annualized_savings * projection_years as f64 * growth_factor;
        let roi_percentage =
            MetricValue::ratio(projected_savings - implementation_cost, implementation_cost)
                .map(|r| r * 100.0);

        Ok(SavingsProjection {
            simulation_days: analysis.simulation_days,
            total_cost_savings,
            annualized_savings,
            implementation_cost,
            projection_years,
            projected_savings,
            roi_percentage,
        })
    }
}

impl Default for FlowAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Severity;
    use chrono::NaiveDate;

    fn patient(condition: Condition, wait: f64, duration: f64, cost: f64, ai: bool) -> Patient {
        Patient {
            id: "P".to_string(),
            age: 50,
            condition,
            severity: Severity::Medium,
            arrival_time: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            wait_time: wait,
            treatment_duration: duration,
            cost,
            ai_assisted: ai,
        }
    }

    #[test]
    fn test_population_metrics() {
        let patients = vec![
            patient(Condition::Diabetes, 10.0, 60.0, 30000.0, false),
            patient(Condition::Diabetes, 20.0, 40.0, 20000.0, false),
        ];
        let m = FlowAnalyzer::population_metrics(&patients);
        assert_eq!(m.avg_wait_time, MetricValue::Value(15.0));
        assert_eq!(m.avg_treatment_time, MetricValue::Value(50.0));
        assert_eq!(m.avg_total_time, MetricValue::Value(65.0));
        assert_eq!(m.avg_cost_per_patient, MetricValue::Value(25000.0));
        assert_eq!(m.total_cost, 50000.0);
        assert_eq!(m.total_patients, 2);
    }

    #[test]
    fn test_empty_population_is_undefined() {
        let m = FlowAnalyzer::population_metrics(&[]);
        assert!(m.avg_wait_time.is_undefined());
        assert!(m.avg_cost_per_patient.is_undefined());
        assert_eq!(m.total_cost, 0.0);
    }

    #[test]
    fn test_condition_breakdown_covers_all_conditions() {
        let result = ComparativeResult {
            traditional: vec![patient(Condition::Emergency, 5.0, 120.0, 150000.0, false)],
            ai_enabled: vec![patient(Condition::Emergency, 3.0, 84.0, 120000.0, true)],
            simulation_days: 1,
        };
        let breakdown = FlowAnalyzer::condition_breakdown(&result);
        assert_eq!(breakdown.len(), 5);
        let emergency = breakdown
            .iter()
            .find(|b| b.condition == Condition::Emergency)
            .unwrap();
        assert_eq!(emergency.traditional.count, 1);
        assert_eq!(emergency.ai_enabled.avg_cost, MetricValue::Value(120000.0));
        let checkup = &breakdown[0];
        assert_eq!(checkup.traditional.count, 0);
        assert!(checkup.traditional.avg_cost.is_undefined());
    }

    #[test]
    fn test_project_savings() {
        let result = ComparativeResult {
            traditional: vec![patient(Condition::Diabetes, 10.0, 60.0, 40000.0, false)],
            ai_enabled: vec![patient(Condition::Diabetes, 6.0, 36.0, 10000.0, true)],
            simulation_days: 30,
        };
        let analyzer = FlowAnalyzer::new();
        let analysis = analyzer.analyze(&result);
        let projection = analyzer
            .project_savings(&analysis, 1_000_000.0, 5, 1.1)
            .unwrap();
        // 30000 × 365 / 30 = 365000；× 5 × 1.1 = 2007500
        assert!((projection.annualized_savings - 365_000.0).abs() < 1e-6);
        assert!((projection.projected_savings - 2_007_500.0).abs() < 1e-6);
        let roi = projection.roi_percentage.value().unwrap();
        assert!((roi - 100.75).abs() < 1e-9);
    }

    #[test]
    fn test_project_savings_zero_cost_is_undefined() {
        let result = ComparativeResult {
            traditional: vec![],
            ai_enabled: vec![],
            simulation_days: 30,
        };
        let analyzer = FlowAnalyzer::new();
        let analysis = analyzer.analyze(&result);
        let projection = analyzer.project_savings(&analysis, 0.0, 5, 1.1).unwrap();
        assert!(projection.roi_percentage.is_undefined());
    }
}
