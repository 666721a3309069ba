// ==========================================
// 工程采购管理系统 - 数据访问错误
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 7. 失败语义
// ==========================================

use thiserror::Error;

/// 项目数据访问错误
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 记录未找到
    #[error("记录未找到: {entity} tenant_id={tenant_id} id={id}")]
    NotFound {
        entity: String,
        tenant_id: String,
        id: String,
    },

    /// 数据源不可用(连接失败/权限/限流等)
    #[error("数据源访问失败: {0}")]
    Unavailable(String),

    /// 其他未分类错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &str, tenant_id: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            tenant_id: tenant_id.to_string(),
            id: id.to_string(),
        }
    }
}

/// 数据访问结果类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 天气服务错误
#[derive(Error, Debug)]
pub enum ProviderError {
    /// 网络不可达
    #[error("天气服务不可达: {0}")]
    Unreachable(String),

    /// 非 2xx 响应
    #[error("天气服务响应异常: status={status}")]
    BadStatus { status: u16 },

    /// 响应体缺失 daily 数据或格式不符
    #[error("天气数据格式异常: {0}")]
    InvalidPayload(String),
}
