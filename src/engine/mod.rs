// ==========================================
// AI 智能体投资回报分析 - 引擎层
// ==========================================
// 职责: ROI 测算、患者生成、诊疗流程仿真、结果分析
// 红线: 引擎为纯计算，不读写文件、不持有跨调用状态
// 红线: 随机抽样一律使用调用方注入的随机源
// ==========================================

pub mod error;
pub mod flow_analyzer;
pub mod flow_simulator;
pub mod patient_generator;
pub mod random;
pub mod roi_projector;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use flow_analyzer::FlowAnalyzer;
pub use flow_simulator::FlowSimulator;
pub use patient_generator::PatientGenerator;
pub use random::{seeded_rng, SimRng};
pub use roi_projector::{compound, RoiProjector, DEFAULT_HORIZON_YEARS};
