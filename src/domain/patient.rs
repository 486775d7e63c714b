// ==========================================
// AI 智能体投资回报分析 - 患者与仿真日
// ==========================================
// 时间单位: 分钟；费用单位: 货币单位
// 红线: 诊疗时长 ≥ 15，费用 ≥ 5000，等待时长 ≥ 0
// ==========================================

use crate::domain::types::{Condition, Scenario, Severity};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 诊疗时长下限（分钟）
pub const MIN_TREATMENT_DURATION: f64 = 15.0;
/// 费用下限
pub const MIN_COST: f64 = 5000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub age: u32,
    pub condition: Condition,
    pub severity: Severity,
    pub arrival_time: NaiveDateTime,
    /// 排队等待（分钟），由当日排程阶段写入
    pub wait_time: f64,
    /// 诊疗时长（分钟）
    pub treatment_duration: f64,
    pub cost: f64,
    pub ai_assisted: bool,
}

impl Patient {
    /// 总时长 = 等待 + 诊疗
    pub fn total_time(&self) -> f64 {
        self.wait_time + self.treatment_duration
    }

    pub fn scenario(&self) -> Scenario {
        Scenario::from_ai_flag(self.ai_assisted)
    }
}

/// 单日仿真结果，患者按到达时间升序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDay {
    pub date: NaiveDate,
    pub scenario: Scenario,
    pub patients: Vec<Patient>,
}

/// 对比仿真结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeResult {
    pub traditional: Vec<Patient>,
    pub ai_enabled: Vec<Patient>,
    /// 仿真天数
    pub simulation_days: u32,
}

impl ComparativeResult {
    pub fn population(&self, scenario: Scenario) -> &[Patient] {
        match scenario {
            Scenario::Traditional => &self.traditional,
            Scenario::AiEnabled => &self.ai_enabled,
        }
    }
}
