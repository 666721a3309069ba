// ==========================================
// 工程采购管理系统 - 风险评分聚合引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.4 风险评分
// ==========================================
// 职责: 将因子列表压缩为 0-1 评分并映射风险等级
// ==========================================

use crate::domain::risk::{RiskFactor, RiskScore};
use crate::domain::types::{RiskLevel, Severity};

/// 无因子时的基线评分(不为 0,保留残余不确定性)
const BASELINE_SCORE: f64 = 0.1;

/// 因子数量放大系数
const MULTI_FACTOR_BOOST: f64 = 1.3;
const DUAL_FACTOR_BOOST: f64 = 1.15;

/// 高严重度聚集放大系数
const MULTI_HIGH_BOOST: f64 = 1.2;
const SINGLE_HIGH_BOOST: f64 = 1.1;

/// 等级映射阈值(作用于最终两位小数评分)
const LEVEL_CRITICAL: f64 = 0.7;
const LEVEL_HIGH: f64 = 0.45;
const LEVEL_MEDIUM: f64 = 0.2;

/// 风险评分聚合引擎
pub struct RiskScoreAggregator;

impl RiskScoreAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 聚合因子列表为风险评分
    ///
    /// 基础分 = mean(严重度权重 × 置信度),
    /// 再按因子数量与高严重度聚集度放大,最终截断到 [0,1] 并保留两位小数
    ///
    /// # 返回
    /// - 空因子列表返回基线评分 0.1 / low
    pub fn aggregate(&self, factors: &[RiskFactor]) -> RiskScore {
        if factors.is_empty() {
            return RiskScore {
                score: BASELINE_SCORE,
                level: RiskLevel::Low,
            };
        }

        let weighted_sum: f64 = factors
            .iter()
            .map(|f| severity_weight(f.severity) * f.confidence)
            .sum();
        let mut score = (weighted_sum / factors.len() as f64).clamp(0.0, 1.0);

        score *= match factors.len() {
            n if n >= 3 => MULTI_FACTOR_BOOST,
            2 => DUAL_FACTOR_BOOST,
            _ => 1.0,
        };

        let high_count = factors.iter().filter(|f| f.is_high()).count();
        score *= match high_count {
            n if n >= 2 => MULTI_HIGH_BOOST,
            1 => SINGLE_HIGH_BOOST,
            _ => 1.0,
        };

        let score = round2(score.clamp(0.0, 1.0));
        RiskScore {
            score,
            level: level_for(score),
        }
    }
}

impl Default for RiskScoreAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// 严重度 → 基础权重
fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 0.3,
        Severity::Medium => 0.6,
        Severity::High => 0.9,
    }
}

/// 评分 → 风险等级
fn level_for(score: f64) -> RiskLevel {
    if score >= LEVEL_CRITICAL {
        RiskLevel::Critical
    } else if score >= LEVEL_HIGH {
        RiskLevel::High
    } else if score >= LEVEL_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
