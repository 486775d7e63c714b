// ==========================================
// AI 智能体投资回报分析 - 配置层
// ==========================================
// 职责: 运行参数管理（JSON 文件 + 环境变量覆写）
// 说明: 行业/病种基准为静态常量，不属于可配置项
// ==========================================

pub mod app_config;
pub mod config_manager;

// 重导出核心配置管理器
pub use app_config::{AppConfig, RoiSettings, SavingsSettings, SimulationSettings};
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigSource};
