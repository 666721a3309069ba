// ==========================================
// 工程采购管理系统 - 延期天数估算引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.5 延期估算
// ==========================================

use crate::domain::risk::RiskFactor;
use crate::domain::types::{FactorKind, Severity};

/// 延期天数上限
const MAX_DELAY_DAYS: i32 = 14;

/// 延期天数估算引擎
///
/// 按因子类别与严重度累加贡献天数,封顶 14 天
pub struct DelayEstimator;

impl DelayEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 估算预计延期天数
    ///
    /// 贡献规则: supplier 高 3 天/其余 1 天, weather 高 2 天/其余 1 天,
    /// timeline 一律 2 天, budget 与 dependency 不贡献天数
    pub fn estimate(&self, factors: &[RiskFactor]) -> i32 {
        let mut days = 0;
        for factor in factors {
            days += match (factor.factor_type, factor.severity) {
                (FactorKind::Supplier, Severity::High) => 3,
                (FactorKind::Supplier, _) => 1,
                (FactorKind::Weather, Severity::High) => 2,
                (FactorKind::Weather, _) => 1,
                (FactorKind::Timeline, _) => 2,
                _ => 0,
            };
        }
        days.min(MAX_DELAY_DAYS)
    }
}

impl Default for DelayEstimator {
    fn default() -> Self {
        Self::new()
    }
}
