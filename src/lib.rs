// ==========================================
// AI 智能体投资回报分析 - 核心库
// ==========================================
// 技术栈: Rust + rand/rand_chacha + serde + tracing
// 系统定位: 行业 ROI 测算 + 医院诊疗流程对比仿真
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体、类型与基准数据
pub mod domain;

// 引擎层 - 测算与仿真
pub mod engine;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口与报表
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Benchmark, Condition, Industry, Scenario, Severity, WorkRole};

// 领域实体
pub use domain::{
    ComparativeResult, ComprehensiveAnalysis, MetricValue, Patient, RoiProjection,
    SimulationAnalysis, SimulationDay,
};

// 引擎
pub use engine::{EngineError, FlowAnalyzer, FlowSimulator, PatientGenerator, RoiProjector};

// API
pub use api::{ApiError, RoiApi, SimulationApi};

// 配置
pub use config::{AppConfig, ConfigManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "AI 智能体投资回报分析";
