// ==========================================
// 工程采购管理系统 - 天气服务接口
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 6. 外部依赖接口
// ==========================================

use crate::domain::weather::RawForecast;
use crate::repository::error::ProviderError;
use async_trait::async_trait;

/// 天气预报服务
///
/// 实现方对接外部气象 API(按日预报,约 7 天窗口);
/// 引擎侧通过超时与降级保证该依赖不可用时分析仍能完成
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// 按工地坐标获取按日原始预报
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecast, ProviderError>;
}
