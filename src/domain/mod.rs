// ==========================================
// 工程采购管理系统 - 领域模型层
// ==========================================
// 依据: Procurement_DSS_Master_Plan.md - PART C 领域模型
// ==========================================
// 职责: 定义纯数据结构,不含业务规则
// 红线: 领域层不依赖引擎层与仓储层
// ==========================================

pub mod project;
pub mod recovery;
pub mod risk;
pub mod supplier;
pub mod types;
pub mod weather;

// 重导出核心模型
pub use project::{
    Delivery, DeliveryItem, ExpenseRecord, Milestone, ProjectInfo, ProjectRef, ProjectSnapshot,
    PurchaseOrder,
};
pub use recovery::{EmailDraft, RecoveryOption};
pub use risk::{DelayPrediction, RiskFactor, RiskScore};
pub use supplier::SupplierStat;
pub use types::{FactorKind, ForecastOrigin, RecoveryKind, RiskLevel, Severity};
pub use weather::{RawForecast, WeatherDay, WeatherSummary};
