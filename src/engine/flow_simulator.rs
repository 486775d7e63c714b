// ==========================================
// AI 智能体投资回报分析 - 医院诊疗流程仿真引擎
// ==========================================
// 职责: 单日仿真 + 传统/AI 对比仿真
// 输入: 随机源 + 日期 + 场景 + 患者数
// 输出: SimulationDay / ComparativeResult
// ==========================================
// 单日排程规则（按到达时间顺序）:
// - 剔除结束时间 ≤ 当前到达时间的在诊记录
// - 在诊数 > 10: 等待 = (在诊数 - 10) × 15
// - 否则: 等待 = max(0, N(10, 5))
// - AI 辅助: 等待 × 0.6
// - 结束时间 = 到达 + 等待 + 诊疗时长
// ==========================================

use crate::domain::patient::{ComparativeResult, Patient, SimulationDay};
use crate::domain::benchmark::ARRIVAL_HOUR_WEIGHTS;
use crate::domain::types::Scenario;
use crate::engine::error::{ensure_positive_count, EngineError, EngineResult};
use crate::engine::patient_generator::PatientGenerator;
use crate::engine::random::{categorical, normal};
use crate::perf::{self, PerfGuard};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use tracing::{debug, info, instrument};

/// 默认每日患者数
pub const DEFAULT_PATIENTS_PER_DAY: usize = 200;
/// 开诊时刻
pub const DAY_START_HOUR: u32 = 8;
/// 同时在诊容量，超出即产生排队
pub const CONCURRENT_CAPACITY: usize = 10;
/// 每超出一位在诊患者增加的等待（分钟）
pub const QUEUE_WAIT_STEP_MIN: f64 = 15.0;
/// 未排队时的等待分布 N(10, 5)
pub const BASE_WAIT_MEAN_MIN: f64 = 10.0;
pub const BASE_WAIT_STD_MIN: f64 = 5.0;
/// AI 辅助等待系数
pub const AI_WAIT_FACTOR: f64 = 0.6;
/// 进度日志间隔（天）
const PROGRESS_LOG_INTERVAL: u32 = 10;

/// 对比仿真起始日 2025-01-01
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// 分钟数 → chrono::Duration（微秒精度）
pub fn minutes(value: f64) -> Duration {
    Duration::microseconds((value * 60_000_000.0).round() as i64)
}

// ==========================================
// FlowSimulator - 诊疗流程仿真引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct FlowSimulator {
    generator: PatientGenerator,
    start_date: NaiveDate,
    patients_per_day: usize,
}

impl FlowSimulator {
    pub fn new(generator: PatientGenerator) -> Self {
        Self {
            generator,
            start_date: default_start_date(),
            patients_per_day: DEFAULT_PATIENTS_PER_DAY,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_patients_per_day(mut self, patients_per_day: usize) -> Self {
        self.patients_per_day = patients_per_day;
        self
    }

    pub fn generator(&self) -> &PatientGenerator {
        &self.generator
    }

    // ==========================================
    // 单日仿真
    // ==========================================

    /// 仿真一天的诊疗流程
    ///
    /// # 返回
    /// SimulationDay，患者数恰为 patient_count，按到达时间升序
    #[instrument(skip(self, rng))]
    pub fn simulate_day<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        date: NaiveDate,
        ai_enabled: bool,
        patient_count: usize,
    ) -> EngineResult<SimulationDay> {
        ensure_positive_count("patient_count", patient_count)?;

        let start_time = date.and_hms_opt(DAY_START_HOUR, 0, 0).ok_or_else(|| {
            EngineError::invalid_parameter("date", date, "无法构造开诊时刻")
        })?;
        let date_tag = date.format("%Y%m%d").to_string();

        // 1. 生成患者（到达时刻 = 开诊 + 小时桶 + 分钟偏移）
        let mut patients = Vec::with_capacity(patient_count);
        for i in 0..patient_count {
            let hour_offset = categorical(rng, &ARRIVAL_HOUR_WEIGHTS) as i64;
            let minute_offset: i64 = rng.gen_range(0..60);
            let arrival_time = start_time
                .checked_add_signed(Duration::hours(hour_offset) + Duration::minutes(minute_offset))
                .ok_or_else(|| EngineError::invalid_parameter("date", date, "到达时刻超出可表示范围"))?;

            let id = format!("P{}_{:03}", date_tag, i);
            patients.push(self.generator.generate_patient(rng, id, arrival_time, ai_enabled)?);
        }

        // 2. 按到达时间排序（稳定排序）
        patients.sort_by_key(|p| p.arrival_time);

        // 3. 排程: 写入等待时长
        Self::assign_wait_times(rng, &mut patients, ai_enabled)?;

        perf::record_patients(patients.len());

        Ok(SimulationDay {
            date,
            scenario: Scenario::from_ai_flag(ai_enabled),
            patients,
        })
    }

    /// 按到达顺序推算排队等待
    ///
    /// 调用方保证 patients 已按 arrival_time 升序
    fn assign_wait_times<R: Rng + ?Sized>(
        rng: &mut R,
        patients: &mut [Patient],
        ai_enabled: bool,
    ) -> EngineResult<()> {
        let mut active_treatments: Vec<NaiveDateTime> = Vec::new();

        for patient in patients.iter_mut() {
            active_treatments.retain(|end| *end > patient.arrival_time);

            let active = active_treatments.len();
            let mut wait_time = if active > CONCURRENT_CAPACITY {
                (active - CONCURRENT_CAPACITY) as f64 * QUEUE_WAIT_STEP_MIN
            } else {
                normal(rng, BASE_WAIT_MEAN_MIN, BASE_WAIT_STD_MIN).max(0.0)
            };

            if ai_enabled {
                wait_time *= AI_WAIT_FACTOR;
            }
            patient.wait_time = wait_time;

            let treatment_end = patient
                .arrival_time
                .checked_add_signed(minutes(wait_time + patient.treatment_duration))
                .ok_or_else(|| {
                    EngineError::invalid_parameter(
                        "arrival_time",
                        patient.arrival_time,
                        "诊疗结束时刻超出可表示范围",
                    )
                })?;
            active_treatments.push(treatment_end);
        }
        Ok(())
    }

    // ==========================================
    // 对比仿真
    // ==========================================

    /// 连续 days 天，每天先传统后 AI，累积两组患者
    #[instrument(skip(self, rng), fields(patients_per_day = self.patients_per_day))]
    pub fn run_comparative<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        days: u32,
    ) -> EngineResult<ComparativeResult> {
        if days == 0 {
            return Err(EngineError::invalid_parameter("days", days, "必须大于 0"));
        }
        ensure_positive_count("patients_per_day", self.patients_per_day)?;

        let _perf = PerfGuard::new("engine.run_comparative");
        info!(days, "开始 {} 天医院对比仿真", days);

        let capacity = days as usize * self.patients_per_day;
        let mut traditional = Vec::with_capacity(capacity);
        let mut ai_enabled = Vec::with_capacity(capacity);

        for day in 0..days {
            let date = self
                .start_date
                .checked_add_signed(Duration::days(day as i64))
                .ok_or_else(|| {
                    EngineError::invalid_parameter("start_date", self.start_date, "仿真日期超出可表示范围")
                })?;

            let traditional_day = self.simulate_day(rng, date, false, self.patients_per_day)?;
            let ai_day = self.simulate_day(rng, date, true, self.patients_per_day)?;

            debug!(
                %date,
                traditional = traditional_day.patients.len(),
                ai_enabled = ai_day.patients.len(),
                "单日仿真完成"
            );

            traditional.extend(traditional_day.patients);
            ai_enabled.extend(ai_day.patients);

            if (day + 1) % PROGRESS_LOG_INTERVAL == 0 {
                info!("已完成 {} 天...", day + 1);
            }
        }

        Ok(ComparativeResult {
            traditional,
            ai_enabled,
            simulation_days: days,
        })
    }
}

impl Default for FlowSimulator {
    fn default() -> Self {
        Self::new(PatientGenerator::default())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Condition, Severity};
    use crate::engine::random::seeded_rng;

    fn patient_at(arrival: NaiveDateTime, duration: f64) -> Patient {
        Patient {
            id: "P".to_string(),
            age: 30,
            condition: Condition::RoutineCheckup,
            severity: Severity::Low,
            arrival_time: arrival,
            wait_time: 0.0,
            treatment_duration: duration,
            cost: 10000.0,
            ai_assisted: false,
        }
    }

    #[test]
    fn test_minutes_conversion() {
        assert_eq!(minutes(1.5), Duration::seconds(90));
        assert_eq!(minutes(0.0), Duration::zero());
    }

    #[test]
    fn test_queue_wait_when_over_capacity() {
        // 13 位患者同一时刻到达，诊疗极长: 第 12 位起开始排队
        let t0 = default_start_date().and_hms_opt(8, 0, 0).unwrap();
        let mut patients: Vec<Patient> = (0..13).map(|_| patient_at(t0, 600.0)).collect();
        let (mut rng, _) = seeded_rng(Some(1));

        FlowSimulator::assign_wait_times(&mut rng, &mut patients, false).unwrap();

        // 第 12 位 (下标 11) 到达时在诊 11 位 → (11-10)×15
        assert_eq!(patients[11].wait_time, 15.0);
        assert_eq!(patients[12].wait_time, 30.0);
        for p in &patients[..11] {
            assert!(p.wait_time >= 0.0);
        }
    }

    #[test]
    fn test_ai_queue_wait_scaled() {
        let t0 = default_start_date().and_hms_opt(8, 0, 0).unwrap();
        let mut patients: Vec<Patient> = (0..12).map(|_| patient_at(t0, 600.0)).collect();
        let (mut rng, _) = seeded_rng(Some(1));

        FlowSimulator::assign_wait_times(&mut rng, &mut patients, true).unwrap();

        assert!((patients[11].wait_time - 15.0 * AI_WAIT_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_finished_treatments_are_released() {
        // 间隔 2 小时到达、诊疗 20 分钟: 永不排队
        let t0 = default_start_date().and_hms_opt(8, 0, 0).unwrap();
        let mut patients: Vec<Patient> = (0..20)
            .map(|i| patient_at(t0 + Duration::hours(2 * i), 20.0))
            .collect();
        let (mut rng, _) = seeded_rng(Some(5));

        FlowSimulator::assign_wait_times(&mut rng, &mut patients, false).unwrap();

        // N(10,5) 截断后远小于排队步长
        for p in &patients {
            assert!(p.wait_time < QUEUE_WAIT_STEP_MIN * 3.0);
        }
    }

    #[test]
    fn test_treatment_end_overflow_is_error() {
        let t0 = NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap();
        let mut patients = vec![patient_at(t0, 600.0)];
        let (mut rng, _) = seeded_rng(Some(1));

        let err = FlowSimulator::assign_wait_times(&mut rng, &mut patients, false).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { ref field, .. } if field == "arrival_time"));
    }

    #[test]
    fn test_zero_days_rejected() {
        let sim = FlowSimulator::default();
        let (mut rng, _) = seeded_rng(Some(1));
        assert!(matches!(
            sim.run_comparative(&mut rng, 0),
            Err(EngineError::InvalidParameter { .. })
        ));
    }
}
