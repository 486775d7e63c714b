// ==========================================
// AI 智能体投资回报分析 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/配置错误为用户友好的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 查表错误
    // ==========================================
    #[error("不支持的行业: {0}（支持: Healthcare / Finance / Logistics / Manufacturing）")]
    UnsupportedIndustry(String),

    #[error("不支持的病种: {0}")]
    UnsupportedCondition(String),

    // ==========================================
    // 参数错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 参数校验失败（带详细原因）
    #[error("参数校验失败: {reason}")]
    ParameterValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 指标错误
    // ==========================================
    #[error("指标无定义: {0}")]
    DegenerateMetric(String),

    // ==========================================
    // 配置/导出错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidIndustry(key) => ApiError::UnsupportedIndustry(key),
            EngineError::InvalidCondition(key) => ApiError::UnsupportedCondition(key),
            EngineError::InvalidParameter {
                field,
                value,
                reason,
            } => ApiError::ParameterValidationError {
                reason: format!("{}={}: {}", field, value, reason),
                violations: vec![ValidationViolation {
                    field,
                    value,
                    reason,
                }],
            },
            EngineError::DegenerateMetric { metric } => ApiError::DegenerateMetric(metric),
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// 参数名
    pub field: String,
    /// 实际值
    pub value: String,
    /// 违规原因
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_conversion() {
        let api: ApiError = EngineError::InvalidIndustry("Retail".to_string()).into();
        assert!(matches!(api, ApiError::UnsupportedIndustry(ref k) if k == "Retail"));

        let api: ApiError = EngineError::invalid_parameter("days", 0, "必须大于 0").into();
        match api {
            ApiError::ParameterValidationError { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "days");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
