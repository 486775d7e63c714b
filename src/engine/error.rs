// ==========================================
// AI 智能体投资回报分析 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 引擎均为内存内纯计算，错误只作用于单次调用，不做重试
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 查表错误 =====
    #[error("不支持的行业: {0}")]
    InvalidIndustry(String),

    #[error("不支持的病种: {0}")]
    InvalidCondition(String),

    // ===== 参数错误 =====
    #[error("参数无效 ({field}={value}): {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    // ===== 指标错误 =====
    #[error("指标无定义 ({metric}): 分母为零")]
    DegenerateMetric { metric: String },
}

impl EngineError {
    /// 构造参数错误
    pub fn invalid_parameter(
        field: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

/// 校验正数参数（有限且 > 0）
pub fn ensure_positive(field: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid_parameter(field, value, "必须为正数"))
    }
}

/// 校验正整数参数（> 0）
pub fn ensure_positive_count(field: &str, value: usize) -> EngineResult<usize> {
    if value > 0 {
        Ok(value)
    } else {
        Err(EngineError::invalid_parameter(field, value, "必须大于 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("company_size", 10.0), Ok(10.0));
        assert!(ensure_positive("company_size", 0.0).is_err());
        assert!(ensure_positive("company_size", -1.0).is_err());
        assert!(ensure_positive("company_size", f64::NAN).is_err());
        assert!(ensure_positive("company_size", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_contains_field() {
        let err = ensure_positive_count("days", 0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("days"));
        assert!(msg.contains("0"));
    }
}
