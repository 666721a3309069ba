// ==========================================
// 工程采购管理系统 - 分析错误类型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 7. 失败语义
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 单项目分析的致命错误
///
/// 只有项目本体不可得时分析才失败;
/// 订单/交付/支出/里程碑/天气的失败一律在编排内降级
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// 项目不存在(或不属于该租户)
    #[error("项目未找到: project_id={project_id} tenant_id={tenant_id}")]
    ProjectNotFound {
        project_id: String,
        tenant_id: String,
    },

    /// 项目本体拉取失败(数据源故障等)
    #[error("项目数据获取失败: {0}")]
    Repository(#[from] RepositoryError),
}

/// 分析结果类型别名
pub type AnalysisResult<T> = Result<T, AnalysisError>;
