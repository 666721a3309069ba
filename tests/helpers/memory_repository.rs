// ==========================================
// 内存仓储与天气服务 Mock - 用于集成测试
// ==========================================

use async_trait::async_trait;
use delay_risk_engine::{
    Delivery, ExpenseRecord, Milestone, ProjectDataRepository, ProjectInfo, ProjectRef,
    ProjectSnapshot, ProviderError, PurchaseOrder, RawForecast, RepositoryError, RepositoryResult,
    WeatherProvider,
};
use std::collections::{HashMap, HashSet};

type Key = (String, String);

/// 内存项目数据仓储
///
/// 支持按数据类别注入故障,模拟部分数据不可用的降级场景
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: HashMap<Key, ProjectInfo>,
    orders: HashMap<Key, Vec<PurchaseOrder>>,
    deliveries: HashMap<Key, Vec<Delivery>>,
    expenses: HashMap<Key, Vec<ExpenseRecord>>,
    milestones: HashMap<Key, Vec<Milestone>>,
    failing_categories: HashSet<String>,
    failing_projects: HashSet<String>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入完整快照
    pub fn insert_snapshot(&mut self, snapshot: ProjectSnapshot) {
        let key = (
            snapshot.project.tenant_id.clone(),
            snapshot.project.id.clone(),
        );
        self.projects.insert(key.clone(), snapshot.project);
        self.orders.insert(key.clone(), snapshot.orders);
        self.deliveries.insert(key.clone(), snapshot.deliveries);
        self.expenses.insert(key.clone(), snapshot.expenses);
        self.milestones.insert(key, snapshot.milestones);
    }

    /// 注入类别故障: "orders"/"deliveries"/"expenses"/"milestones"/"listing"
    pub fn fail_category(&mut self, category: &str) {
        self.failing_categories.insert(category.to_string());
    }

    /// 注入单项目故障: 该项目的本体读取失败,其余项目不受影响
    pub fn fail_project(&mut self, project_id: &str) {
        self.failing_projects.insert(project_id.to_string());
    }

    fn check(&self, category: &str) -> RepositoryResult<()> {
        if self.failing_categories.contains(category) {
            return Err(RepositoryError::Unavailable(format!(
                "模拟故障: {}",
                category
            )));
        }
        Ok(())
    }

    fn key(tenant_id: &str, project_id: &str) -> Key {
        (tenant_id.to_string(), project_id.to_string())
    }
}

#[async_trait]
impl ProjectDataRepository for InMemoryProjectRepository {
    async fn fetch_project(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<ProjectInfo> {
        self.check("project")?;
        if self.failing_projects.contains(project_id) {
            return Err(RepositoryError::Unavailable(format!(
                "模拟故障: 项目 {}",
                project_id
            )));
        }
        self.projects
            .get(&Self::key(tenant_id, project_id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("project", tenant_id, project_id))
    }

    async fn fetch_orders(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<PurchaseOrder>> {
        self.check("orders")?;
        Ok(self
            .orders
            .get(&Self::key(tenant_id, project_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_deliveries(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<Delivery>> {
        self.check("deliveries")?;
        Ok(self
            .deliveries
            .get(&Self::key(tenant_id, project_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_expenses(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<ExpenseRecord>> {
        self.check("expenses")?;
        Ok(self
            .expenses
            .get(&Self::key(tenant_id, project_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_milestones(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> RepositoryResult<Vec<Milestone>> {
        self.check("milestones")?;
        Ok(self
            .milestones
            .get(&Self::key(tenant_id, project_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_active_projects(&self, tenant_id: &str) -> RepositoryResult<Vec<ProjectRef>> {
        self.check("listing")?;
        let mut refs: Vec<ProjectRef> = self
            .projects
            .values()
            .filter(|p| p.tenant_id == tenant_id && p.status == "active")
            .map(|p| ProjectRef {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect();
        refs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(refs)
    }
}

/// 返回固定预报的天气服务
pub struct StaticWeatherProvider {
    forecast: RawForecast,
}

impl StaticWeatherProvider {
    pub fn new(forecast: RawForecast) -> Self {
        Self { forecast }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn fetch_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<RawForecast, ProviderError> {
        Ok(self.forecast.clone())
    }
}

/// 始终失败的天气服务
pub struct FailingWeatherProvider;

#[async_trait]
impl WeatherProvider for FailingWeatherProvider {
    async fn fetch_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<RawForecast, ProviderError> {
        Err(ProviderError::Unreachable("模拟网络不可达".to_string()))
    }
}

/// 永不响应的天气服务,用于验证超时降级
pub struct NeverRespondingWeatherProvider;

#[async_trait]
impl WeatherProvider for NeverRespondingWeatherProvider {
    async fn fetch_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<RawForecast, ProviderError> {
        std::future::pending().await
    }
}
