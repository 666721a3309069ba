// ==========================================
// 工程采购管理系统 - 天气归一化引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.1 天气归一化
// ==========================================
// 职责: 将天气服务原始预报压缩为风险规则消费的汇总指标
// 红线: 降级路径必须显式标注来源口径(origin)
// ==========================================

use crate::domain::types::ForecastOrigin;
use crate::domain::weather::{RawForecast, WeatherDay, WeatherSummary};

/// 降雨概率阈值(百分比),超过即计为降雨日
const RAIN_PROBABILITY_THRESHOLD: f64 = 60.0;

/// 触发极端天气的 WMO 代码: 大雨/大雪/强阵雨/雷暴类
const EXTREME_WEATHER_CODES: [i32; 6] = [65, 75, 82, 95, 96, 99];

/// 窗口内降雨日达到该数量时整体视为极端
const EXTREME_RAIN_DAYS: usize = 4;

/// 无气温数据时的平均最高气温默认值(摄氏度)
const DEFAULT_AVG_TEMPERATURE: i32 = 22;

/// 降级替代汇总的保守降雨日数
const FALLBACK_RAIN_DAYS: usize = 2;

/// 天气归一化引擎
///
/// 无状态,纯函数式转换
pub struct WeatherNormalizer;

impl WeatherNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 归一化原始预报
    ///
    /// 降雨日 = WMO 降雨代码 或 降雨概率 > 60;
    /// 极端天气 = 出现极端代码 或 降雨日 ≥ 4
    ///
    /// # 参数
    /// - `raw`: 天气服务原始预报(平行数组)
    ///
    /// # 返回
    /// - 归一化汇总,origin = Provider
    pub fn normalize(&self, raw: &RawForecast) -> WeatherSummary {
        let horizon = raw.day_count();
        let mut daily = Vec::with_capacity(horizon);
        let mut rain_days = 0usize;
        let mut extreme = false;
        let mut total_precipitation = 0.0;
        let mut temperature_sum = 0.0;

        for i in 0..horizon {
            let code = raw.weather_codes[i];
            let max_temperature = raw.max_temperatures[i];
            let precipitation = raw.precipitation_mm[i];
            let probability = raw.rain_probabilities[i];

            let rainy = is_rain_code(code) || probability > RAIN_PROBABILITY_THRESHOLD;
            if rainy {
                rain_days += 1;
            }
            if EXTREME_WEATHER_CODES.contains(&code) {
                extreme = true;
            }
            total_precipitation += precipitation;
            temperature_sum += max_temperature;

            daily.push(WeatherDay {
                description: describe_weather_code(code).to_string(),
                max_temperature,
                precipitation_mm: precipitation,
                rain_probability: probability,
                rainy,
            });
        }

        // 连续降雨本身构成极端条件
        if rain_days >= EXTREME_RAIN_DAYS {
            extreme = true;
        }

        let avg_max_temperature = if horizon == 0 {
            DEFAULT_AVG_TEMPERATURE
        } else {
            (temperature_sum / horizon as f64).round() as i32
        };

        WeatherSummary {
            horizon_days: horizon,
            rain_days,
            avg_max_temperature,
            extreme_conditions: extreme,
            total_precipitation_mm: total_precipitation,
            daily,
            origin: ForecastOrigin::Provider,
        }
    }

    /// 无坐标项目的晴好假设汇总(不触发任何天气因子)
    pub fn clear_summary(&self) -> WeatherSummary {
        WeatherSummary {
            horizon_days: 0,
            rain_days: 0,
            avg_max_temperature: DEFAULT_AVG_TEMPERATURE,
            extreme_conditions: false,
            total_precipitation_mm: 0.0,
            daily: Vec::new(),
            origin: ForecastOrigin::NoCoordinates,
        }
    }

    /// 天气服务失败/超时时的保守替代汇总
    ///
    /// 按 2 个降雨日估计,会触发一条中等降雨因子,
    /// 避免外部故障被解读为"无天气风险"
    pub fn fallback_summary(&self) -> WeatherSummary {
        WeatherSummary {
            horizon_days: 0,
            rain_days: FALLBACK_RAIN_DAYS,
            avg_max_temperature: DEFAULT_AVG_TEMPERATURE,
            extreme_conditions: false,
            total_precipitation_mm: 0.0,
            daily: Vec::new(),
            origin: ForecastOrigin::ProviderFallback,
        }
    }
}

impl Default for WeatherNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// WMO 代码是否属于降雨类
///
/// 覆盖毛毛雨/降雨/冻雨(51-67)、阵雨(80-82)、雷暴(95-99)
fn is_rain_code(code: i32) -> bool {
    matches!(code, 51..=67 | 80..=82 | 95..=99)
}

/// WMO 代码的中文描述
fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "晴",
        1..=3 => "多云",
        45 | 48 => "雾",
        51..=57 => "毛毛雨",
        61 | 63 => "小到中雨",
        65 => "大雨",
        66 | 67 => "冻雨",
        71 | 73 => "小到中雪",
        75 | 77 => "大雪",
        80 | 81 => "阵雨",
        82 => "强阵雨",
        85 | 86 => "阵雪",
        95 => "雷阵雨",
        96 | 99 => "雷暴伴冰雹",
        _ => "未知",
    }
}
