// ==========================================
// 工程采购管理系统 - 风险分析输出模型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 5. 输出契约
// ==========================================
// 职责: 定义风险因子、评分与完整预测结果
// 红线: 所有结论必须可解释,因子必须带 issue 文本
// ==========================================

use crate::domain::recovery::{EmailDraft, RecoveryOption};
use crate::domain::types::{FactorKind, RiskLevel, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单条风险因子
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// 因子类别
    #[serde(rename = "type")]
    pub factor_type: FactorKind,
    /// 因子主体(供应商名/里程碑名/固定标签)
    pub name: String,
    /// 问题描述(面向项目经理的可读文本)
    pub issue: String,
    /// 严重度
    pub severity: Severity,
    /// 规则置信度(0-1)
    pub confidence: f64,
}

impl RiskFactor {
    pub fn new(
        factor_type: FactorKind,
        name: impl Into<String>,
        issue: impl Into<String>,
        severity: Severity,
        confidence: f64,
    ) -> Self {
        Self {
            factor_type,
            name: name.into(),
            issue: issue.into(),
            severity,
            confidence,
        }
    }

    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}

/// 聚合后的风险评分
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskScore {
    /// 归一化评分(0.0-1.0,保留两位小数)
    pub score: f64,
    /// 评分映射出的风险等级
    pub level: RiskLevel,
}

/// 延期风险预测结果(单项目分析的完整输出)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayPrediction {
    /// 本次预测的唯一标识
    pub prediction_id: String,
    /// 项目标识
    pub project_id: String,
    /// 风险评分(0.0-1.0)
    pub risk_score: f64,
    /// 风险等级
    pub risk_level: RiskLevel,
    /// 预计延期天数(0-14)
    pub predicted_delay_days: i32,
    /// 预估财务影响(项目币种,四舍五入到整数)
    pub financial_impact: f64,
    /// 识别出的风险因子
    pub contributing_factors: Vec<RiskFactor>,
    /// 三个恢复方案(恰有一个 recommended)
    pub recovery_options: Vec<RecoveryOption>,
    /// 预警邮件草稿
    pub email_draft: EmailDraft,
    /// 生成时间
    pub generated_at: DateTime<Utc>,
}

impl DelayPrediction {
    /// 被推荐的恢复方案
    pub fn recommended_option(&self) -> Option<&RecoveryOption> {
        self.recovery_options.iter().find(|o| o.recommended)
    }

    /// 高严重度因子数量
    pub fn high_severity_count(&self) -> usize {
        self.contributing_factors
            .iter()
            .filter(|f| f.is_high())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_serializes_type_field() {
        let factor = RiskFactor::new(
            FactorKind::Supplier,
            "华东钢材",
            "准时交付率 40%",
            Severity::High,
            0.8,
        );
        let json = serde_json::to_value(&factor).unwrap();
        assert_eq!(json["type"], "supplier");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["name"], "华东钢材");
    }

    #[test]
    fn test_factor_deserializes_from_app_payload() {
        let json = r#"{
            "type": "budget",
            "name": "预算消耗",
            "issue": "预算已使用 95%",
            "severity": "medium",
            "confidence": 0.95
        }"#;
        let factor: RiskFactor = serde_json::from_str(json).unwrap();
        assert_eq!(factor.factor_type, FactorKind::Budget);
        assert!(!factor.is_high());
    }
}
