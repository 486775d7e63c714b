// ==========================================
// AI 智能体投资回报分析 - 患者生成引擎
// ==========================================
// 抽样顺序（固定，保证同种子可复现）:
// 1) 年龄段 → 段内均匀年龄
// 2) 按年龄分层抽取病种
// 3) 按病种抽取严重程度
// 4) 基础时长/费用 × 年龄乘数 × 严重程度乘数
// 5) AI 辅助时按复杂度等级削减时长/费用
// 6) 高斯噪声: 时长 × N(1, 0.10)，费用 × N(1, 0.05)
// 7) 下限: 时长 ≥ 15，费用 ≥ 5000
// ==========================================

use crate::domain::benchmark::{
    ai_improvement, condition_profile, condition_weights_for_age, AGE_BRACKETS,
    EMERGENCY_SEVERITY_WEIGHTS, STANDARD_SEVERITY_WEIGHTS,
};
use crate::domain::patient::{Patient, MIN_COST, MIN_TREATMENT_DURATION};
use crate::domain::types::{Condition, Severity};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::random::{categorical, normal};
use chrono::NaiveDateTime;
use rand::Rng;

/// 时长噪声标准差
pub const DURATION_NOISE_STD: f64 = 0.10;
/// 费用噪声标准差
pub const COST_NOISE_STD: f64 = 0.05;

const EMERGENCY_SEVERITIES: [Severity; 2] = [Severity::High, Severity::Critical];
const STANDARD_SEVERITIES: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

// ==========================================
// PatientGenerator - 患者生成引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct PatientGenerator {
    /// 是否施加高斯噪声；关闭时不消耗噪声抽样
    apply_noise: bool,
}

impl PatientGenerator {
    pub fn new(apply_noise: bool) -> Self {
        Self { apply_noise }
    }

    pub fn apply_noise(&self) -> bool {
        self.apply_noise
    }

    /// 生成单个患者（wait_time 置 0，由当日排程写入）
    pub fn generate_patient<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: impl Into<String>,
        arrival_time: NaiveDateTime,
        ai_enabled: bool,
    ) -> EngineResult<Patient> {
        let age = Self::sample_age(rng);
        let condition = Self::sample_condition(rng, age);
        let severity = Self::sample_severity(rng, condition);

        let (mut treatment_duration, mut cost) =
            Self::base_estimate(age, condition, severity, ai_enabled)?;

        if self.apply_noise {
            treatment_duration *= normal(rng, 1.0, DURATION_NOISE_STD);
            cost *= normal(rng, 1.0, COST_NOISE_STD);
        }

        Ok(Patient {
            id: id.into(),
            age,
            condition,
            severity,
            arrival_time,
            wait_time: 0.0,
            treatment_duration: treatment_duration.max(MIN_TREATMENT_DURATION),
            cost: cost.max(MIN_COST),
            ai_assisted: ai_enabled,
        })
    }

    // ==========================================
    // 确定性部分
    // ==========================================

    /// 年龄乘数: age > 40 时 1 + (age - 40) × 0.01，否则 1
    pub fn age_multiplier(age: u32) -> f64 {
        if age > 40 {
            1.0 + (age - 40) as f64 * 0.01
        } else {
            1.0
        }
    }

    /// 噪声前的时长/费用估算
    ///
    /// # 返回
    /// (treatment_duration, cost)
    pub fn base_estimate(
        age: u32,
        condition: Condition,
        severity: Severity,
        ai_enabled: bool,
    ) -> EngineResult<(f64, f64)> {
        let profile = condition_profile(condition);
        let multiplier = Self::age_multiplier(age) * severity.multiplier();

        let mut duration = profile.base_duration_min * multiplier;
        let mut cost = profile.base_cost * multiplier;

        if ai_enabled {
            let improvement = ai_improvement(profile.complexity_tier).ok_or_else(|| {
                EngineError::InvalidCondition(format!(
                    "{} (complexity_tier={})",
                    condition, profile.complexity_tier
                ))
            })?;
            duration *= 1.0 - improvement.time_reduction;
            cost *= 1.0 - improvement.cost_reduction;
        }

        Ok((duration, cost))
    }

    // ==========================================
    // 抽样
    // ==========================================

    fn sample_age<R: Rng + ?Sized>(rng: &mut R) -> u32 {
        let weights: Vec<f64> = AGE_BRACKETS.iter().map(|(_, _, w)| *w).collect();
        let (min_age, max_age, _) = AGE_BRACKETS[categorical(rng, &weights)];
        rng.gen_range(min_age..=max_age)
    }

    fn sample_condition<R: Rng + ?Sized>(rng: &mut R, age: u32) -> Condition {
        let idx = categorical(rng, condition_weights_for_age(age));
        Condition::ALL[idx]
    }

    fn sample_severity<R: Rng + ?Sized>(rng: &mut R, condition: Condition) -> Severity {
        if condition == Condition::Emergency {
            EMERGENCY_SEVERITIES[categorical(rng, &EMERGENCY_SEVERITY_WEIGHTS)]
        } else {
            STANDARD_SEVERITIES[categorical(rng, &STANDARD_SEVERITY_WEIGHTS)]
        }
    }
}

impl Default for PatientGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}
