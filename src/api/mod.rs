// ==========================================
// AI 智能体投资回报分析 - API 层
// ==========================================
// 职责: 对外业务接口（入参校验 → 引擎调用 → 报表输出）
// ==========================================

pub mod error;
pub mod report;
pub mod roi_api;
pub mod simulation_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use report::{
    export_patients_csv, format_amount, format_pct, render_comprehensive,
    render_condition_breakdown, render_market_context, render_roi_summary,
    render_simulation_findings,
};
pub use roi_api::RoiApi;
pub use simulation_api::{SimulationApi, SimulationRun};
pub use validator::{parse_industry, ParameterValidator};
