// ==========================================
// 工程采购管理系统 - 项目数据模型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 3. 输入数据口径
// ==========================================
// 职责: 定义风险分析消费的项目侧实体(项目/订单/交付/支出/里程碑)
// 红线: 字段口径以数据协作方导出为准,缺失字段一律 Option
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 项目引用(批量分析用的轻量视图)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

/// 项目基础信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// 项目唯一标识
    pub id: String,
    /// 租户标识(数据隔离边界)
    pub tenant_id: String,
    /// 项目名称
    pub name: String,
    /// 项目状态("active" 等,字面量由 App 端维护)
    pub status: String,
    /// 项目预算(部分历史项目缺失)
    pub budget: Option<f64>,
    /// 工地纬度
    pub latitude: Option<f64>,
    /// 工地经度
    pub longitude: Option<f64>,
}

impl ProjectInfo {
    /// 工地坐标,经纬度任一缺失视为无坐标
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// 采购订单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 订单唯一标识
    pub id: String,
    /// 供应商名称(历史数据存在缺失)
    pub vendor: Option<String>,
    /// 订单状态("pending"/"approved"/"delivered"/"cancelled" 等)
    pub status: String,
    /// 订单金额
    pub amount: f64,
    /// 预计交付日期
    pub expected_delivery: Option<NaiveDate>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 创建人邮箱(通知收件人来源)
    pub created_by_email: Option<String>,
}

impl PurchaseOrder {
    /// 是否为挂起订单
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    /// 是否为未闭环订单(pending/approved,计入在途资金敞口)
    pub fn is_outstanding(&self) -> bool {
        self.status == "pending" || self.status == "approved"
    }

    /// 订单账龄(自创建起的自然天数)
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}

/// 交付单明细行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryItem {
    pub description: String,
    pub quantity: f64,
}

/// 交付单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    /// 交付单唯一标识
    pub id: String,
    /// 关联采购订单(历史数据存在缺失)
    pub order_id: Option<String>,
    /// 交付状态("completed" 等)
    pub status: String,
    /// 实际送达时间
    pub delivered_at: Option<DateTime<Utc>>,
    /// 明细行
    pub items: Vec<DeliveryItem>,
}

impl Delivery {
    /// 是否已完成交付
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// 支出记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// 支出记录唯一标识
    pub id: String,
    /// 支出类别(自由文本,如 "Labor crew"/"材料费")
    pub category: String,
    /// 支出金额
    pub amount: f64,
}

/// 里程碑
///
/// 完成状态存在两套历史口径: 布尔 `completed` 与字符串 `status`,
/// 任一口径标记完成即视为完成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// 里程碑唯一标识
    pub id: String,
    /// 里程碑名称
    pub name: String,
    /// 布尔完成口径
    pub completed: Option<bool>,
    /// 字符串状态口径("completed" 等)
    pub status: Option<String>,
    /// 计划日期(旧口径)
    pub target_date: Option<NaiveDate>,
    /// 计划日期(新口径,优先)
    pub due_date: Option<NaiveDate>,
}

impl Milestone {
    /// 任一口径标记完成即为完成
    pub fn is_completed(&self) -> bool {
        self.completed == Some(true) || self.status.as_deref() == Some("completed")
    }

    /// 计划日期,due_date 优先于 target_date
    pub fn planned_date(&self) -> Option<NaiveDate> {
        self.due_date.or(self.target_date)
    }

    /// 是否已逾期(未完成且计划日期早于今天)
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.is_completed() {
            return false;
        }
        match self.planned_date() {
            Some(date) => date < today,
            None => false,
        }
    }
}

/// 项目数据快照
///
/// 编排器按类别降级拉取后的聚合输入,类别缺失时对应列表为空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub project: ProjectInfo,
    pub orders: Vec<PurchaseOrder>,
    pub deliveries: Vec<Delivery>,
    pub expenses: Vec<ExpenseRecord>,
    pub milestones: Vec<Milestone>,
}

impl ProjectSnapshot {
    /// 累计支出
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// 预算使用率,预算缺失或为 0 时返回 0.0
    pub fn budget_used_ratio(&self) -> f64 {
        match self.project.budget {
            Some(budget) if budget > 0.0 => self.total_expenses() / budget,
            _ => 0.0,
        }
    }
}
