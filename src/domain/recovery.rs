// ==========================================
// 工程采购管理系统 - 恢复方案与通知模型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.7 恢复方案 / 4.8 通知草稿
// ==========================================

use crate::domain::types::RecoveryKind;
use serde::{Deserialize, Serialize};

/// 恢复方案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryOption {
    /// 方案编号(1 最快 / 2 最省 / 3 均衡)
    pub id: i32,
    /// 方案名称
    pub name: String,
    /// 方案类型
    #[serde(rename = "type")]
    pub option_type: RecoveryKind,
    /// 预计额外费用(四舍五入到整数)
    pub cost: f64,
    /// 预计可挽回的工期天数
    pub time_saved_days: i32,
    /// 方案说明(结合本次因子生成)
    pub description: String,
    /// 执行清单(固定 4 条)
    pub action_items: Vec<String>,
    /// 是否为推荐方案(全列表恰有一个为 true)
    pub recommended: bool,
}

/// 邮件草稿
///
/// 引擎只负责起草,发送由 App 端通知通道执行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    /// 收件人(去重,至多 3 个)
    pub to: Vec<String>,
    /// 主题
    pub subject: String,
    /// 正文(纯文本,多行)
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_serializes_type_field() {
        let option = RecoveryOption {
            id: 2,
            name: "调整施工顺序等待交付".to_string(),
            option_type: RecoveryKind::Cheapest,
            cost: 0.0,
            time_saved_days: 0,
            description: "重排施工顺序".to_string(),
            action_items: vec!["识别可并行工序".to_string()],
            recommended: true,
        };
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["type"], "cheapest");
        assert_eq!(json["id"], 2);
        assert_eq!(json["recommended"], true);
    }
}
