// ==========================================
// 工程采购管理系统 - 项目数据仓储接口
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 6. 外部依赖接口
// ==========================================
// 职责: 定义引擎消费项目数据的只读接口,屏蔽具体数据源
// 红线: 引擎层只依赖本 trait,不感知 SQL/HTTP 细节
// ==========================================

use crate::domain::project::{
    Delivery, ExpenseRecord, Milestone, ProjectInfo, ProjectRef, PurchaseOrder,
};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

/// 项目数据只读仓储
///
/// 所有方法以 (tenant_id, project_id) 为检索键,实现方负责租户隔离;
/// 列表类方法返回该项目的全量记录,过滤口径由实现方与数据协作方对齐
#[async_trait]
pub trait ProjectDataRepository: Send + Sync {
    /// 获取项目基础信息
    ///
    /// # 返回
    /// - 项目不存在时返回 `RepositoryError::NotFound`
    async fn fetch_project(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<ProjectInfo>;

    /// 获取项目的采购订单
    async fn fetch_orders(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<PurchaseOrder>>;

    /// 获取项目的交付单
    async fn fetch_deliveries(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<Delivery>>;

    /// 获取项目的支出记录
    async fn fetch_expenses(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<ExpenseRecord>>;

    /// 获取项目的里程碑
    async fn fetch_milestones(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<Milestone>>;

    /// 列出租户下的活跃项目(批量分析入口)
    ///
    /// "活跃"的判定口径由实现方维护(通常为 status = "active")
    async fn list_active_projects(&self, tenant_id: &str) -> RepositoryResult<Vec<ProjectRef>>;
}
