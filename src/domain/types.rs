// ==========================================
// 工程采购管理系统 - 核心枚举类型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 2. 统一词表
// ==========================================
// 职责: 定义风险分析全链路共用的枚举
// 红线: 序列化值与 App 端接口字面量保持一致(小写)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 风险因子严重度
///
/// 排序语义: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// 中文标签(用于通知正文)
    pub fn label_cn(&self) -> &'static str {
        match self {
            Severity::Low => "低",
            Severity::Medium => "中",
            Severity::High => "高",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// 风险因子类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// 供应商履约类
    Supplier,
    /// 天气类
    Weather,
    /// 里程碑进度类
    Timeline,
    /// 预算类
    Budget,
    /// 交付依赖类
    Dependency,
}

impl FactorKind {
    /// 中文标签(用于通知正文)
    pub fn label_cn(&self) -> &'static str {
        match self {
            FactorKind::Supplier => "供应商",
            FactorKind::Weather => "天气",
            FactorKind::Timeline => "里程碑",
            FactorKind::Budget => "预算",
            FactorKind::Dependency => "交付依赖",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FactorKind::Supplier => "supplier",
            FactorKind::Weather => "weather",
            FactorKind::Timeline => "timeline",
            FactorKind::Budget => "budget",
            FactorKind::Dependency => "dependency",
        };
        write!(f, "{}", s)
    }
}

/// 项目整体风险等级
///
/// 排序语义: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// 中文标签(用于通知正文)
    pub fn label_cn(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
            RiskLevel::Critical => "严重",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// 恢复方案类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryKind {
    /// 最快追赶: 更换/加急供应商
    Fastest,
    /// 最省成本: 重排施工顺序
    Cheapest,
    /// 均衡: 部分补货 + 加班
    Balanced,
}

impl RecoveryKind {
    /// 中文标签(用于通知正文)
    pub fn label_cn(&self) -> &'static str {
        match self {
            RecoveryKind::Fastest => "最快追赶",
            RecoveryKind::Cheapest => "最省成本",
            RecoveryKind::Balanced => "均衡推进",
        }
    }
}

impl fmt::Display for RecoveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecoveryKind::Fastest => "fastest",
            RecoveryKind::Cheapest => "cheapest",
            RecoveryKind::Balanced => "balanced",
        };
        write!(f, "{}", s)
    }
}

/// 天气汇总的来源口径
///
/// 用于区分"真实预报"与"降级替代值",下游据此判断结果可信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastOrigin {
    /// 天气服务返回的真实预报
    Provider,
    /// 项目缺少坐标,使用晴好假设
    NoCoordinates,
    /// 天气服务失败/超时,使用保守替代值
    ProviderFallback,
}

impl fmt::Display for ForecastOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForecastOrigin::Provider => "provider",
            ForecastOrigin::NoCoordinates => "no_coordinates",
            ForecastOrigin::ProviderFallback => "provider_fallback",
        };
        write!(f, "{}", s)
    }
}
