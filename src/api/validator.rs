// ==========================================
// AI 智能体投资回报分析 - 入参校验器
// ==========================================
// 职责: 公共入口的参数校验，一次性收集全部违规项
// 规则: 员工数/营收/年数/天数/患者数必须为正
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::types::{Industry, WorkRole};

// ==========================================
// ParameterValidator - 入参校验器
// ==========================================

/// 入参校验器
///
/// 逐项登记校验，最后 `finish()` 汇总：
/// 无违规返回 Ok，否则返回 ParameterValidationError（含全部违规项）
#[derive(Debug, Default)]
pub struct ParameterValidator {
    violations: Vec<ValidationViolation>,
}

impl ParameterValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 正数（有限且 > 0）
    pub fn positive(mut self, field: &str, value: f64) -> Self {
        if !(value.is_finite() && value > 0.0) {
            self.push(field, value.to_string(), "必须为正数");
        }
        self
    }

    /// 正整数（> 0）
    pub fn positive_count(mut self, field: &str, value: u64) -> Self {
        if value == 0 {
            self.push(field, value.to_string(), "必须大于 0");
        }
        self
    }

    /// 岗位构成: 各项非负，合计 > 0
    pub fn role_mix(mut self, role_mix: &[(WorkRole, f64)]) -> Self {
        for (role, share) in role_mix {
            if !share.is_finite() || *share < 0.0 {
                self.push(&format!("role_mix[{}]", role), share.to_string(), "岗位占比不能为负");
            }
        }
        let total: f64 = role_mix.iter().map(|(_, s)| s).sum();
        if !(total.is_finite() && total > 0.0) {
            self.push("role_mix", total.to_string(), "岗位占比合计必须大于 0");
        }
        self
    }

    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }

    pub fn finish(self) -> ApiResult<()> {
        if self.violations.is_empty() {
            return Ok(());
        }
        let reason = self
            .violations
            .iter()
            .map(|v| format!("{}={}: {}", v.field, v.value, v.reason))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ApiError::ParameterValidationError {
            reason,
            violations: self.violations,
        })
    }

    fn push(&mut self, field: &str, value: String, reason: &str) {
        self.violations.push(ValidationViolation {
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        });
    }
}

/// 解析行业名称
pub fn parse_industry(key: &str) -> ApiResult<Industry> {
    if key.trim().is_empty() {
        return Err(ApiError::InvalidInput("行业不能为空".to_string()));
    }
    Ok(key.parse::<Industry>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_violations() {
        let err = ParameterValidator::new()
            .positive("company_size", 0.0)
            .positive("annual_revenue", -5.0)
            .positive_count("horizon_years", 5)
            .finish()
            .unwrap_err();

        match err {
            ApiError::ParameterValidationError { violations, reason } => {
                assert_eq!(violations.len(), 2);
                assert!(reason.contains("company_size"));
                assert!(reason.contains("annual_revenue"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_valid_parameters_pass() {
        assert!(ParameterValidator::new()
            .positive("company_size", 10.0)
            .positive_count("days", 1)
            .role_mix(&[(WorkRole::Programmers, 1.0)])
            .finish()
            .is_ok());
    }

    #[test]
    fn test_parse_industry() {
        assert_eq!(parse_industry("Logistics").unwrap(), Industry::Logistics);
        assert!(matches!(parse_industry(""), Err(ApiError::InvalidInput(_))));
        assert!(matches!(
            parse_industry("Retail"),
            Err(ApiError::UnsupportedIndustry(_))
        ));
    }
}
