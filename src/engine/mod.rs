// ==========================================
// 工程采购管理系统 - 引擎层
// ==========================================
// 依据: Procurement_DSS_Master_Plan.md - PART D 引擎体系
// 依据: Risk_Engine_Specs_v1.0.md - 4. 组件拆分
// ==========================================
// 职责: 实现延期风险业务规则,不做 I/O
// 红线: 引擎只依赖仓储 trait, 所有结论必须输出可读 issue/描述
// ==========================================

pub mod delay;
pub mod error;
pub mod factors;
pub mod impact;
pub mod notification;
pub mod orchestrator;
pub mod recovery;
pub mod scoring;
pub mod supplier;
pub mod weather;

// 重导出核心引擎
pub use delay::DelayEstimator;
pub use error::{AnalysisError, AnalysisResult};
pub use factors::RiskFactorEngine;
pub use impact::{FinancialImpactCalculator, ImpactBreakdown};
pub use notification::NotificationDrafter;
pub use orchestrator::AnalysisOrchestrator;
pub use recovery::RecoveryPlanner;
pub use scoring::RiskScoreAggregator;
pub use supplier::SupplierAnalyzer;
pub use weather::WeatherNormalizer;
