// ==========================================
// 工程采购管理系统 - 仓储接口层
// ==========================================
// 依据: Procurement_DSS_Master_Plan.md - PART E 数据访问
// ==========================================
// 职责: 定义引擎与外部数据源之间的只读接口与错误类型
// ==========================================

pub mod error;
pub mod project_data;
pub mod weather_provider;

// 重导出核心接口
pub use error::{ProviderError, RepositoryError, RepositoryResult};
pub use project_data::ProjectDataRepository;
pub use weather_provider::WeatherProvider;
