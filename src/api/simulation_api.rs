// ==========================================
// AI 智能体投资回报分析 - 诊疗流程仿真 API
// ==========================================
// 职责: 按配置构造随机源与仿真引擎，执行对比仿真、分析与节省额推算
// 架构: API 层 → 引擎层 (FlowSimulator / FlowAnalyzer)
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::ParameterValidator;
use crate::config::{AppConfig, SavingsSettings, SimulationSettings};
use crate::domain::metrics::{SavingsProjection, SimulationAnalysis};
use crate::domain::patient::ComparativeResult;
use crate::engine::flow_analyzer::FlowAnalyzer;
use crate::engine::flow_simulator::FlowSimulator;
use crate::engine::patient_generator::PatientGenerator;
use crate::engine::random::seeded_rng;
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// 一次完整仿真运行的产出
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    /// 实际使用的随机种子（复现用）
    pub seed: u64,
    pub result: ComparativeResult,
    pub analysis: SimulationAnalysis,
    pub savings: SavingsProjection,
}

// ==========================================
// SimulationApi - 诊疗流程仿真 API
// ==========================================
pub struct SimulationApi {
    simulator: FlowSimulator,
    analyzer: FlowAnalyzer,
    settings: SimulationSettings,
    savings: SavingsSettings,
}

impl SimulationApi {
    pub fn new(settings: SimulationSettings, savings: SavingsSettings) -> Self {
        let simulator = FlowSimulator::new(PatientGenerator::new(settings.apply_noise))
            .with_start_date(settings.start_date)
            .with_patients_per_day(settings.patients_per_day);
        Self {
            simulator,
            analyzer: FlowAnalyzer::new(),
            settings,
            savings,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.simulation.clone(), config.savings.clone())
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// 按配置执行（天数、种子均取自配置）
    pub fn run(&self) -> ApiResult<SimulationRun> {
        self.run_days(self.settings.days)
    }

    /// 执行指定天数
    ///
    /// 种子: 配置中固定种子优先，否则随机取种并写入日志
    pub fn run_days(&self, days: u32) -> ApiResult<SimulationRun> {
        let (mut rng, seed) = seeded_rng(self.settings.seed);
        info!(seed, days, "仿真随机种子");
        self.run_with_rng(&mut rng, seed, days)
    }

    /// 使用调用方提供的随机源执行
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        seed: u64,
        days: u32,
    ) -> ApiResult<SimulationRun> {
        let _perf = crate::perf::PerfGuard::new("api.simulation_run");

        ParameterValidator::new()
            .positive_count("days", days as u64)
            .positive_count("patients_per_day", self.settings.patients_per_day as u64)
            .finish()?;

        let result = self.simulator.run_comparative(rng, days)?;
        let analysis = self.analyzer.analyze(&result);
        let savings = self.analyzer.project_savings(
            &analysis,
            self.savings.implementation_cost,
            self.savings.projection_years,
            self.savings.growth_factor,
        )?;

        info!(
            traditional = result.traditional.len(),
            ai_enabled = result.ai_enabled.len(),
            total_cost_savings = analysis.improvements.total_cost_savings,
            "仿真分析完成"
        );

        Ok(SimulationRun {
            seed,
            result,
            analysis,
            savings,
        })
    }

    /// 仅分析（外部提供的对比结果）
    pub fn analyze(&self, result: &ComparativeResult) -> SimulationAnalysis {
        self.analyzer.analyze(result)
    }
}
