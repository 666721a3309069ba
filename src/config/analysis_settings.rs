// ==========================================
// 工程采购管理系统 - 分析运行参数
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 9. 运行参数
// ==========================================

use serde::{Deserialize, Serialize};

/// 风险分析运行参数
///
/// 由 App 端配置下发,未配置字段回落到默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// 天气服务超时(秒)
    pub weather_timeout_secs: u64,
    /// 批量分析并发上限
    pub batch_concurrency: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            weather_timeout_secs: 8,
            batch_concurrency: 4,
        }
    }
}
