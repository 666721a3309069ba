// ==========================================
// 工程采购管理系统 - 通知草稿引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.8 通知草稿
// ==========================================
// 职责: 起草风险预警与方案确认邮件,发送由 App 端通道执行
// ==========================================

use crate::domain::project::PurchaseOrder;
use crate::domain::recovery::{EmailDraft, RecoveryOption};
use crate::domain::risk::{RiskFactor, RiskScore};

/// 收件人数量上限
const MAX_RECIPIENTS: usize = 3;

/// 无法推断收件人时的占位地址
const FALLBACK_RECIPIENT: &str = "project.manager@example.com";

/// 通知草稿引擎
pub struct NotificationDrafter;

impl NotificationDrafter {
    pub fn new() -> Self {
        Self
    }

    /// 从订单创建人推断收件人
    ///
    /// 按订单顺序去重,至多 3 个;一个都推断不出时使用占位地址
    pub fn recipients(&self, orders: &[PurchaseOrder]) -> Vec<String> {
        let mut recipients: Vec<String> = Vec::new();
        for order in orders {
            let email = match order.created_by_email.as_deref() {
                Some(e) if !e.is_empty() => e,
                _ => continue,
            };
            if recipients.iter().any(|r| r == email) {
                continue;
            }
            recipients.push(email.to_string());
            if recipients.len() >= MAX_RECIPIENTS {
                break;
            }
        }

        if recipients.is_empty() {
            recipients.push(FALLBACK_RECIPIENT.to_string());
        }
        recipients
    }

    /// 起草决策前的风险预警邮件
    ///
    /// # 参数
    /// - `project_name`: 项目名称
    /// - `recipients`: 收件人列表
    /// - `score`: 聚合评分
    /// - `delay_days`: 预计延期天数
    /// - `financial_impact`: 预估财务影响
    /// - `factors`: 风险因子列表
    /// - `options`: 恢复方案列表
    pub fn draft_alert(
        &self,
        project_name: &str,
        recipients: Vec<String>,
        score: &RiskScore,
        delay_days: i32,
        financial_impact: f64,
        factors: &[RiskFactor],
        options: &[RecoveryOption],
    ) -> EmailDraft {
        let subject = format!(
            "[延期风险预警] {} - 风险等级: {}",
            project_name,
            score.level.label_cn()
        );

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("项目「{}」的延期风险分析结果如下:", project_name));
        lines.push(String::new());
        lines.push(format!(
            "风险等级: {} (评分 {:.2})",
            score.level.label_cn(),
            score.score
        ));
        lines.push(format!("预计延期: {} 天", delay_days));
        lines.push(format!("预估财务影响: {:.0} 元", financial_impact));
        lines.push(String::new());

        lines.push("主要风险因素:".to_string());
        if factors.is_empty() {
            lines.push("- 暂未识别出显著风险因素".to_string());
        } else {
            for factor in factors {
                lines.push(format!(
                    "- [{}|{}] {}: {}",
                    factor.factor_type.label_cn(),
                    factor.severity.label_cn(),
                    factor.name,
                    factor.issue
                ));
            }
        }
        lines.push(String::new());

        lines.push("可选恢复方案:".to_string());
        for option in options {
            let tag = if option.recommended { " [推荐]" } else { "" };
            lines.push(format!(
                "{}. {}{} (费用 {:.0} 元, 可挽回 {} 天)",
                option.id, option.name, tag, option.cost, option.time_saved_days
            ));
        }
        lines.push(String::new());
        lines.push("请在系统中确认恢复方案,以便同步采购与施工安排。".to_string());

        EmailDraft {
            to: recipients,
            subject,
            body: lines.join("\n"),
        }
    }

    /// 起草决策后的方案确认邮件
    pub fn draft_confirmation(
        &self,
        project_name: &str,
        recipients: Vec<String>,
        option: &RecoveryOption,
    ) -> EmailDraft {
        let subject = format!("[恢复方案确认] {} - {}", project_name, option.name);

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!(
            "项目「{}」已确认执行恢复方案「{}」。",
            project_name, option.name
        ));
        lines.push(String::new());
        lines.push(format!("方案类型: {}", option.option_type.label_cn()));
        lines.push(format!("预计费用: {:.0} 元", option.cost));
        lines.push(format!("预计挽回工期: {} 天", option.time_saved_days));
        lines.push(format!("方案说明: {}", option.description));
        lines.push(String::new());
        lines.push("执行清单:".to_string());
        for (index, action) in option.action_items.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, action));
        }
        lines.push(String::new());
        lines.push("请相关负责人按清单推进,并在系统中更新执行进展。".to_string());

        EmailDraft {
            to: recipients,
            subject,
            body: lines.join("\n"),
        }
    }
}

impl Default for NotificationDrafter {
    fn default() -> Self {
        Self::new()
    }
}
