// ==========================================
// 工程采购管理系统 - 配置层
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 9. 运行参数
// ==========================================
// 职责: 分析运行参数管理
// ==========================================

pub mod analysis_settings;

// 重导出核心配置
pub use analysis_settings::AnalysisSettings;
