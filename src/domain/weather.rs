// ==========================================
// 工程采购管理系统 - 天气数据模型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.1 天气归一化
// ==========================================
// 职责: 定义天气服务原始预报与归一化汇总的载体
// ==========================================

use crate::domain::types::ForecastOrigin;
use serde::{Deserialize, Serialize};

/// 天气服务原始预报(按日平行数组)
///
/// 四个数组按日对齐,长度不一致时以最短者为准
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawForecast {
    /// WMO 天气代码
    pub weather_codes: Vec<i32>,
    /// 日最高气温(摄氏度)
    pub max_temperatures: Vec<f64>,
    /// 日降水量(毫米)
    pub precipitation_mm: Vec<f64>,
    /// 日降水概率(0-100)
    pub rain_probabilities: Vec<f64>,
}

impl RawForecast {
    /// 从天气服务响应的 daily 对象解析
    ///
    /// 兼容 `weathercode` 与 `weather_code` 两种键名;
    /// 缺失或类型不符的条目按 0 处理
    ///
    /// # 参数
    /// - `daily`: 响应 JSON 中的 daily 对象
    pub fn from_daily_json(daily: &serde_json::Value) -> Self {
        let codes = daily
            .get("weathercode")
            .or_else(|| daily.get("weather_code"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .map(|v| v.as_i64().unwrap_or(0) as i32)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            weather_codes: codes,
            max_temperatures: Self::float_series(daily, "temperature_2m_max"),
            precipitation_mm: Self::float_series(daily, "precipitation_sum"),
            rain_probabilities: Self::float_series(daily, "precipitation_probability_max"),
        }
    }

    fn float_series(daily: &serde_json::Value, key: &str) -> Vec<f64> {
        daily
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().map(|v| v.as_f64().unwrap_or(0.0)).collect())
            .unwrap_or_default()
    }

    /// 有效天数(各数组长度的最小值)
    pub fn day_count(&self) -> usize {
        self.weather_codes
            .len()
            .min(self.max_temperatures.len())
            .min(self.precipitation_mm.len())
            .min(self.rain_probabilities.len())
    }

    pub fn is_empty(&self) -> bool {
        self.day_count() == 0
    }
}

/// 单日天气视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDay {
    /// 天气中文描述
    pub description: String,
    /// 日最高气温(摄氏度)
    pub max_temperature: f64,
    /// 日降水量(毫米)
    pub precipitation_mm: f64,
    /// 日降水概率(0-100)
    pub rain_probability: f64,
    /// 是否计为降雨日
    pub rainy: bool,
}

/// 归一化天气汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// 预报窗口天数
    pub horizon_days: usize,
    /// 降雨日数量
    pub rain_days: usize,
    /// 平均最高气温(四舍五入到整数)
    pub avg_max_temperature: i32,
    /// 是否存在极端天气
    pub extreme_conditions: bool,
    /// 窗口内累计降水量(毫米)
    pub total_precipitation_mm: f64,
    /// 按日明细
    pub daily: Vec<WeatherDay>,
    /// 汇总来源口径
    pub origin: ForecastOrigin,
}

impl WeatherSummary {
    /// 是否为降级替代值(非真实预报)
    pub fn is_fallback(&self) -> bool {
        self.origin != ForecastOrigin::Provider
    }
}
