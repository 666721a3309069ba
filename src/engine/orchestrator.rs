// ==========================================
// 工程采购管理系统 - 延期风险分析编排器
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.9 编排主流程
// ==========================================
// 职责: 串联快照拉取 → 天气归一化 → 因子识别 → 评分 →
//       延期/财务估算 → 恢复方案 → 通知草稿
// 红线: 除项目本体缺失外,任何单数据类别失败都不得中断分析;
//       批量分析不向上抛错,失败项目记录后跳过
// ==========================================

use crate::config::AnalysisSettings;
use crate::domain::project::ProjectSnapshot;
use crate::domain::recovery::EmailDraft;
use crate::domain::risk::DelayPrediction;
use crate::domain::weather::WeatherSummary;
use crate::engine::delay::DelayEstimator;
use crate::engine::error::{AnalysisError, AnalysisResult};
use crate::engine::factors::RiskFactorEngine;
use crate::engine::impact::FinancialImpactCalculator;
use crate::engine::notification::NotificationDrafter;
use crate::engine::recovery::RecoveryPlanner;
use crate::engine::scoring::RiskScoreAggregator;
use crate::engine::supplier::SupplierAnalyzer;
use crate::engine::weather::WeatherNormalizer;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::project_data::ProjectDataRepository;
use crate::repository::weather_provider::WeatherProvider;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// 延期风险分析编排器
///
/// 泛型参数:
/// - R: 项目数据仓储实现
/// - W: 天气服务实现
pub struct AnalysisOrchestrator<R, W>
where
    R: ProjectDataRepository,
    W: WeatherProvider,
{
    repository: Arc<R>,
    weather_provider: Arc<W>,
    settings: AnalysisSettings,
    normalizer: WeatherNormalizer,
    supplier_analyzer: SupplierAnalyzer,
    factor_engine: RiskFactorEngine,
    score_aggregator: RiskScoreAggregator,
    delay_estimator: DelayEstimator,
    impact_calculator: FinancialImpactCalculator,
    recovery_planner: RecoveryPlanner,
    drafter: NotificationDrafter,
}

impl<R, W> AnalysisOrchestrator<R, W>
where
    R: ProjectDataRepository,
    W: WeatherProvider,
{
    pub fn new(repository: Arc<R>, weather_provider: Arc<W>, settings: AnalysisSettings) -> Self {
        Self {
            repository,
            weather_provider,
            settings,
            normalizer: WeatherNormalizer::new(),
            supplier_analyzer: SupplierAnalyzer::new(),
            factor_engine: RiskFactorEngine::new(),
            score_aggregator: RiskScoreAggregator::new(),
            delay_estimator: DelayEstimator::new(),
            impact_calculator: FinancialImpactCalculator::new(),
            recovery_planner: RecoveryPlanner::new(),
            drafter: NotificationDrafter::new(),
        }
    }

    /// 单项目延期风险分析
    ///
    /// # 参数
    /// - `project_id`: 项目标识
    /// - `tenant_id`: 租户标识
    /// - `weather_coords`: 坐标覆写(调用方指定时优先于项目档案坐标)
    ///
    /// # 返回
    /// - 完整预测结果;仅当项目本体不可得时返回错误
    pub async fn analyze_project(
        &self,
        project_id: &str,
        tenant_id: &str,
        weather_coords: Option<(f64, f64)>,
    ) -> AnalysisResult<DelayPrediction> {
        info!(tenant_id, project_id, "开始延期风险分析");

        // 步骤 1: 拉取项目快照(项目本体致命,其余类别降级)
        let snapshot = self.fetch_snapshot(tenant_id, project_id).await?;

        // 步骤 2: 天气归一化(超时/失败降级为保守替代值)
        let coords = weather_coords.or_else(|| snapshot.project.coordinates());
        let weather = self.resolve_weather(&snapshot.project.id, coords).await;
        debug!(
            origin = %weather.origin,
            rain_days = weather.rain_days,
            extreme = weather.extreme_conditions,
            "天气汇总完成"
        );

        // 步骤 3: 供应商履约画像
        let supplier_stats = self
            .supplier_analyzer
            .analyze(&snapshot.orders, &snapshot.deliveries);
        debug!(vendor_count = supplier_stats.len(), "供应商画像完成");

        // 步骤 4: 风险因子识别
        let now = Utc::now();
        let factors = self
            .factor_engine
            .identify(&snapshot, &supplier_stats, &weather, now);
        debug!(factor_count = factors.len(), "风险因子识别完成");

        // 步骤 5: 评分 / 延期 / 财务影响
        let score = self.score_aggregator.aggregate(&factors);
        let delay_days = self.delay_estimator.estimate(&factors);
        let financial_impact = self.impact_calculator.estimate(
            &snapshot.project,
            &snapshot.orders,
            &snapshot.expenses,
            delay_days,
        );

        // 步骤 6: 恢复方案
        let recovery_options =
            self.recovery_planner
                .generate(&factors, &snapshot.project, delay_days, financial_impact);

        // 步骤 7: 预警邮件草稿
        let recipients = self.drafter.recipients(&snapshot.orders);
        let email_draft = self.drafter.draft_alert(
            &snapshot.project.name,
            recipients,
            &score,
            delay_days,
            financial_impact,
            &factors,
            &recovery_options,
        );

        let prediction = DelayPrediction {
            prediction_id: Uuid::new_v4().to_string(),
            project_id: snapshot.project.id.clone(),
            risk_score: score.score,
            risk_level: score.level,
            predicted_delay_days: delay_days,
            financial_impact,
            contributing_factors: factors,
            recovery_options,
            email_draft,
            generated_at: now,
        };

        info!(
            tenant_id,
            project_id,
            risk_level = %prediction.risk_level,
            risk_score = prediction.risk_score,
            delay_days = prediction.predicted_delay_days,
            financial_impact = prediction.financial_impact,
            "延期风险分析完成"
        );
        Ok(prediction)
    }

    /// 批量分析租户下全部活跃项目
    ///
    /// 受控并发,单项目失败记录日志后跳过,从不向上抛错
    pub async fn analyze_all_projects(&self, tenant_id: &str) -> Vec<DelayPrediction> {
        let projects = match self.repository.list_active_projects(tenant_id).await {
            Ok(projects) => projects,
            Err(e) => {
                error!(tenant_id, error = %e, "活跃项目列表获取失败,批量分析返回空结果");
                return Vec::new();
            }
        };

        let total = projects.len();
        info!(tenant_id, project_count = total, "开始批量延期风险分析");

        let predictions: Vec<DelayPrediction> = stream::iter(projects)
            .map(|project| async move {
                match self.analyze_project(&project.id, tenant_id, None).await {
                    Ok(prediction) => Some(prediction),
                    Err(e) => {
                        warn!(
                            tenant_id,
                            project_id = %project.id,
                            project_name = %project.name,
                            error = %e,
                            "单项目分析失败,跳过"
                        );
                        None
                    }
                }
            })
            .buffer_unordered(self.settings.batch_concurrency.max(1))
            .filter_map(|result| async move { result })
            .collect()
            .await;

        info!(
            tenant_id,
            succeeded = predictions.len(),
            skipped = total - predictions.len(),
            "批量延期风险分析完成"
        );
        predictions
    }

    /// 起草已选恢复方案的确认邮件
    ///
    /// # 返回
    /// - 方案编号不存在时返回 None
    pub fn confirm_option(
        &self,
        project_name: &str,
        prediction: &DelayPrediction,
        option_id: i32,
    ) -> Option<EmailDraft> {
        let option = prediction
            .recovery_options
            .iter()
            .find(|o| o.id == option_id)?;
        info!(
            project_id = %prediction.project_id,
            option_id,
            option_type = %option.option_type,
            "起草恢复方案确认通知"
        );
        Some(
            self.drafter
                .draft_confirmation(project_name, prediction.email_draft.to.clone(), option),
        )
    }

    /// 拉取项目快照
    ///
    /// 项目本体失败即返回错误;四个列表类别各自独立降级为空列表
    async fn fetch_snapshot(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> AnalysisResult<ProjectSnapshot> {
        let project = self
            .repository
            .fetch_project(tenant_id, project_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => AnalysisError::ProjectNotFound {
                    project_id: project_id.to_string(),
                    tenant_id: tenant_id.to_string(),
                },
                other => AnalysisError::Repository(other),
            })?;

        let orders = degrade(
            "orders",
            project_id,
            self.repository.fetch_orders(tenant_id, project_id).await,
        );
        let deliveries = degrade(
            "deliveries",
            project_id,
            self.repository.fetch_deliveries(tenant_id, project_id).await,
        );
        let expenses = degrade(
            "expenses",
            project_id,
            self.repository.fetch_expenses(tenant_id, project_id).await,
        );
        let milestones = degrade(
            "milestones",
            project_id,
            self.repository.fetch_milestones(tenant_id, project_id).await,
        );

        Ok(ProjectSnapshot {
            project,
            orders,
            deliveries,
            expenses,
            milestones,
        })
    }

    /// 解析项目天气
    ///
    /// 无坐标 → 晴好假设; 服务失败或超时 → 保守替代值
    async fn resolve_weather(
        &self,
        project_id: &str,
        coords: Option<(f64, f64)>,
    ) -> WeatherSummary {
        let (latitude, longitude) = match coords {
            Some(coords) => coords,
            None => {
                debug!(project_id, "项目无工地坐标,使用晴好假设");
                return self.normalizer.clear_summary();
            }
        };

        let timeout = Duration::from_secs(self.settings.weather_timeout_secs);
        match tokio::time::timeout(
            timeout,
            self.weather_provider.fetch_forecast(latitude, longitude),
        )
        .await
        {
            Ok(Ok(raw)) => self.normalizer.normalize(&raw),
            Ok(Err(e)) => {
                warn!(project_id, error = %e, "天气服务失败,使用保守替代汇总");
                self.normalizer.fallback_summary()
            }
            Err(_) => {
                warn!(
                    project_id,
                    timeout_secs = self.settings.weather_timeout_secs,
                    "天气服务超时,使用保守替代汇总"
                );
                self.normalizer.fallback_summary()
            }
        }
    }
}

/// 列表类别的降级处理: 失败记录日志并按空列表继续
fn degrade<T>(category: &str, project_id: &str, result: RepositoryResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!(category, project_id, error = %e, "数据类别加载失败,按空列表降级");
            Vec::new()
        }
    }
}
