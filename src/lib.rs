// ==========================================
// 工程采购管理系统 - 延期风险引擎核心库
// ==========================================
// 依据: Procurement_DSS_Master_Plan.md - 系统宪法
// 系统定位: 决策支持引擎 (人工最终控制权, 引擎只建议不执行)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 外部数据接口
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FactorKind, ForecastOrigin, RecoveryKind, RiskLevel, Severity};

// 领域实体
pub use domain::{
    DelayPrediction, Delivery, DeliveryItem, EmailDraft, ExpenseRecord, Milestone, ProjectInfo,
    ProjectRef, ProjectSnapshot, PurchaseOrder, RawForecast, RecoveryOption, RiskFactor,
    RiskScore, SupplierStat, WeatherDay, WeatherSummary,
};

// 引擎
pub use engine::{
    AnalysisError, AnalysisOrchestrator, AnalysisResult, DelayEstimator,
    FinancialImpactCalculator, ImpactBreakdown, NotificationDrafter, RecoveryPlanner,
    RiskFactorEngine, RiskScoreAggregator, SupplierAnalyzer, WeatherNormalizer,
};

// 仓储接口与错误
pub use repository::{
    ProjectDataRepository, ProviderError, RepositoryError, RepositoryResult, WeatherProvider,
};

// 配置
pub use config::AnalysisSettings;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工程采购延期风险引擎";

// ==========================================
// 预编译检查
// ==========================================
