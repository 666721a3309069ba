// ==========================================
// 工程采购管理系统 - 风险因子识别引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.3 风险因子规则
// ==========================================
// 职责: 对项目快照执行固定规则集,产出可解释的风险因子列表
// 红线: 每条因子必须携带 issue 文本与置信度,规则只读不写
// ==========================================

use crate::domain::project::{Milestone, ProjectSnapshot, PurchaseOrder};
use crate::domain::risk::RiskFactor;
use crate::domain::supplier::SupplierStat;
use crate::domain::types::{FactorKind, Severity};
use crate::domain::weather::WeatherSummary;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

// ---- 订单规则阈值 ----
/// 无预计交付日期的挂起订单,账龄超过该天数视为滞留
const STALE_PENDING_AGE_DAYS: i64 = 7;
/// 挂起订单进入关注区的账龄下限
const AGING_PENDING_MIN_AGE_DAYS: i64 = 3;
/// 超期订单数量超过该值时升级为高严重度
const OVERDUE_HIGH_COUNT: usize = 2;

// ---- 供应商规则阈值 ----
/// 准时率低于该值触发履约因子
const RELIABILITY_WARN_RATE: f64 = 0.7;
/// 准时率低于该值升级为高严重度
const RELIABILITY_CRITICAL_RATE: f64 = 0.5;

// ---- 天气规则阈值 ----
/// 降雨日达到该数量触发降雨因子
const RAIN_DAYS_WARN: usize = 2;
/// 降雨日达到该数量升级为高严重度
const RAIN_DAYS_HIGH: usize = 3;

// ---- 预算规则阈值 ----
/// 预算使用率超过该值触发预算因子
const BUDGET_WARN_RATIO: f64 = 0.9;
/// 预算使用率超过该值升级为高严重度(已超支)
const BUDGET_OVERRUN_RATIO: f64 = 1.0;

// ---- 交付进度规则阈值 ----
/// 交付单总数超过该值才评估停滞
const DELIVERY_STALL_MIN_TOTAL: usize = 3;
/// 完成率低于该值视为停滞
const DELIVERY_STALL_COMPLETION_RATIO: f64 = 0.5;

// ---- 各规则置信度 ----
const CONF_OVERDUE_ORDERS: f64 = 0.9;
const CONF_AGING_ORDERS: f64 = 0.7;
const CONF_SUPPLIER_RELIABILITY: f64 = 0.8;
const CONF_RAIN: f64 = 0.75;
const CONF_EXTREME_WEATHER: f64 = 0.85;
const CONF_BUDGET: f64 = 0.95;
const CONF_MILESTONE: f64 = 0.9;
const CONF_DELIVERY_STALL: f64 = 0.85;

/// 因子主体缺失时的占位名称
const UNKNOWN_VENDOR: &str = "未知供应商";

/// 风险因子识别引擎
///
/// 无状态,同一输入必然产出同一因子列表
pub struct RiskFactorEngine;

impl RiskFactorEngine {
    pub fn new() -> Self {
        Self
    }

    /// 执行全部规则,返回风险因子列表
    ///
    /// 规则分组与产出顺序固定: 订单 → 供应商 → 天气 → 预算 → 里程碑 → 交付进度
    ///
    /// # 参数
    /// - `snapshot`: 项目数据快照(类别缺失时对应列表为空)
    /// - `supplier_stats`: 供应商履约统计
    /// - `weather`: 归一化天气汇总
    /// - `now`: 分析时刻(账龄与逾期判定基准)
    pub fn identify(
        &self,
        snapshot: &ProjectSnapshot,
        supplier_stats: &HashMap<String, SupplierStat>,
        weather: &WeatherSummary,
        now: DateTime<Utc>,
    ) -> Vec<RiskFactor> {
        let today = now.date_naive();
        let mut factors = Vec::new();

        self.check_order_aging(&snapshot.orders, now, today, &mut factors);
        self.check_supplier_reliability(supplier_stats, &mut factors);
        self.check_weather(weather, &mut factors);
        self.check_budget(snapshot, &mut factors);
        self.check_milestones(&snapshot.milestones, today, &mut factors);
        self.check_delivery_progress(snapshot, &mut factors);

        factors
    }

    /// 规则 1+2: 超期订单与账龄关注
    ///
    /// 超期 = 挂起订单预计交付日期已过,或无预计日期且账龄 > 7 天;
    /// 存在超期订单时产出一条超期因子,否则检查 3-7 天账龄的关注因子
    fn check_order_aging(
        &self,
        orders: &[PurchaseOrder],
        now: DateTime<Utc>,
        today: NaiveDate,
        factors: &mut Vec<RiskFactor>,
    ) {
        let overdue: Vec<&PurchaseOrder> = orders
            .iter()
            .filter(|o| o.is_pending() && order_is_overdue(o, now, today))
            .collect();

        if !overdue.is_empty() {
            let severity = if overdue.len() > OVERDUE_HIGH_COUNT {
                Severity::High
            } else {
                Severity::Medium
            };
            factors.push(RiskFactor::new(
                FactorKind::Supplier,
                first_vendor(&overdue),
                format!("{} 个采购订单已超期未交付", overdue.len()),
                severity,
                CONF_OVERDUE_ORDERS,
            ));
            return;
        }

        // 无超期订单时才关注账龄区间,避免重复告警
        let aging: Vec<&PurchaseOrder> = orders
            .iter()
            .filter(|o| {
                let age = o.age_days(now);
                o.is_pending()
                    && age >= AGING_PENDING_MIN_AGE_DAYS
                    && age <= STALE_PENDING_AGE_DAYS
            })
            .collect();

        if !aging.is_empty() {
            factors.push(RiskFactor::new(
                FactorKind::Supplier,
                first_vendor(&aging),
                format!("{} 个挂起订单已创建 3 天以上,需跟进交付安排", aging.len()),
                Severity::Medium,
                CONF_AGING_ORDERS,
            ));
        }
    }

    /// 规则 3: 供应商履约率
    ///
    /// 准时率 < 0.7 的供应商各产出一条因子,< 0.5 升级为高严重度
    fn check_supplier_reliability(
        &self,
        supplier_stats: &HashMap<String, SupplierStat>,
        factors: &mut Vec<RiskFactor>,
    ) {
        // 按供应商名排序保证产出顺序稳定
        let mut vendors: Vec<&SupplierStat> = supplier_stats.values().collect();
        vendors.sort_by(|a, b| a.vendor.cmp(&b.vendor));

        for stat in vendors {
            if stat.on_time_rate >= RELIABILITY_WARN_RATE {
                continue;
            }
            let severity = if stat.on_time_rate < RELIABILITY_CRITICAL_RATE {
                Severity::High
            } else {
                Severity::Medium
            };
            factors.push(RiskFactor::new(
                FactorKind::Supplier,
                stat.vendor.clone(),
                format!(
                    "准时交付率 {:.0}% ({} 单中 {} 单延迟)",
                    stat.on_time_rate * 100.0,
                    stat.total_orders,
                    stat.late_deliveries
                ),
                severity,
                CONF_SUPPLIER_RELIABILITY,
            ));
        }
    }

    /// 规则 4+5: 降雨与极端天气
    ///
    /// 两条规则独立判定,可同时产出
    fn check_weather(&self, weather: &WeatherSummary, factors: &mut Vec<RiskFactor>) {
        if weather.rain_days >= RAIN_DAYS_WARN {
            let severity = if weather.rain_days >= RAIN_DAYS_HIGH {
                Severity::High
            } else {
                Severity::Medium
            };
            factors.push(RiskFactor::new(
                FactorKind::Weather,
                "降雨天气",
                format!("未来一周预报有 {} 天降雨,室外施工受影响", weather.rain_days),
                severity,
                CONF_RAIN,
            ));
        }

        if weather.extreme_conditions {
            factors.push(RiskFactor::new(
                FactorKind::Weather,
                "极端天气",
                "预报存在极端天气(强降雨/雷暴等),施工窗口受限".to_string(),
                Severity::High,
                CONF_EXTREME_WEATHER,
            ));
        }
    }

    /// 规则 6: 预算消耗
    ///
    /// 使用率 > 0.9 触发,> 1.0(已超支)升级为高严重度
    fn check_budget(&self, snapshot: &ProjectSnapshot, factors: &mut Vec<RiskFactor>) {
        let ratio = snapshot.budget_used_ratio();
        if ratio <= BUDGET_WARN_RATIO {
            return;
        }
        let severity = if ratio > BUDGET_OVERRUN_RATIO {
            Severity::High
        } else {
            Severity::Medium
        };
        factors.push(RiskFactor::new(
            FactorKind::Budget,
            "预算消耗",
            format!("预算已使用 {:.0}%,追加采购空间有限", ratio * 100.0),
            severity,
            CONF_BUDGET,
        ));
    }

    /// 规则 7: 里程碑逾期
    ///
    /// 不论逾期数量,只产出一条 timeline 因子;逾期超过 1 个升级为高严重度
    fn check_milestones(
        &self,
        milestones: &[Milestone],
        today: NaiveDate,
        factors: &mut Vec<RiskFactor>,
    ) {
        let overdue: Vec<&Milestone> = milestones.iter().filter(|m| m.is_overdue(today)).collect();
        if overdue.is_empty() {
            return;
        }
        let severity = if overdue.len() > 1 {
            Severity::High
        } else {
            Severity::Medium
        };
        factors.push(RiskFactor::new(
            FactorKind::Timeline,
            overdue[0].name.clone(),
            format!("{} 个里程碑已逾期未完成", overdue.len()),
            severity,
            CONF_MILESTONE,
        ));
    }

    /// 规则 8: 交付进度停滞
    ///
    /// 交付单总数 > 3 且完成率 < 0.5 时产出一条 dependency 因子
    fn check_delivery_progress(&self, snapshot: &ProjectSnapshot, factors: &mut Vec<RiskFactor>) {
        let total = snapshot.deliveries.len();
        if total <= DELIVERY_STALL_MIN_TOTAL {
            return;
        }
        let completed = snapshot
            .deliveries
            .iter()
            .filter(|d| d.is_completed())
            .count();
        let ratio = completed as f64 / total as f64;
        if ratio >= DELIVERY_STALL_COMPLETION_RATIO {
            return;
        }
        factors.push(RiskFactor::new(
            FactorKind::Dependency,
            "交付进度",
            format!("交付完成率仅 {:.0}% ({}/{})", ratio * 100.0, completed, total),
            Severity::Medium,
            CONF_DELIVERY_STALL,
        ));
    }
}

impl Default for RiskFactorEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 挂起订单是否超期
fn order_is_overdue(order: &PurchaseOrder, now: DateTime<Utc>, today: NaiveDate) -> bool {
    match order.expected_delivery {
        Some(expected) => expected < today,
        None => order.age_days(now) > STALE_PENDING_AGE_DAYS,
    }
}

/// 订单集合中第一个有名称的供应商,作为因子主体
fn first_vendor(orders: &[&PurchaseOrder]) -> String {
    orders
        .iter()
        .find_map(|o| o.vendor.clone())
        .unwrap_or_else(|| UNKNOWN_VENDOR.to_string())
}
