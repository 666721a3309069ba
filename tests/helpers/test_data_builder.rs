// ==========================================
// 测试数据构建器
// ==========================================
// 职责: 以链式调用方式构造项目/订单/交付/里程碑等测试数据
// ==========================================

use chrono::{DateTime, Duration, NaiveDate, Utc};
use delay_risk_engine::{
    Delivery, DeliveryItem, ExpenseRecord, Milestone, ProjectInfo, ProjectSnapshot, PurchaseOrder,
    RawForecast,
};

/// 距今 days 天前的日期
pub fn days_ago(days: i64) -> NaiveDate {
    (Utc::now() - Duration::days(days)).date_naive()
}

/// 距今 days 天后的日期
pub fn days_ahead(days: i64) -> NaiveDate {
    (Utc::now() + Duration::days(days)).date_naive()
}

/// 项目构建器
pub struct ProjectBuilder {
    project: ProjectInfo,
}

impl ProjectBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            project: ProjectInfo {
                id: id.to_string(),
                tenant_id: "T001".to_string(),
                name: name.to_string(),
                status: "active".to_string(),
                budget: None,
                latitude: None,
                longitude: None,
            },
        }
    }

    pub fn tenant(mut self, tenant_id: &str) -> Self {
        self.project.tenant_id = tenant_id.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.project.status = status.to_string();
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.project.budget = Some(budget);
        self
    }

    pub fn coords(mut self, latitude: f64, longitude: f64) -> Self {
        self.project.latitude = Some(latitude);
        self.project.longitude = Some(longitude);
        self
    }

    pub fn build(self) -> ProjectInfo {
        self.project
    }
}

/// 采购订单构建器
pub struct OrderBuilder {
    order: PurchaseOrder,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            order: PurchaseOrder {
                id: id.to_string(),
                vendor: None,
                status: "pending".to_string(),
                amount: 10000.0,
                expected_delivery: None,
                created_at: Utc::now(),
                created_by_email: None,
            },
        }
    }

    pub fn vendor(mut self, vendor: &str) -> Self {
        self.order.vendor = Some(vendor.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.order.status = status.to_string();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.order.amount = amount;
        self
    }

    pub fn expected_delivery(mut self, date: NaiveDate) -> Self {
        self.order.expected_delivery = Some(date);
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.order.created_at = Utc::now() - Duration::days(days);
        self
    }

    pub fn created_by(mut self, email: &str) -> Self {
        self.order.created_by_email = Some(email.to_string());
        self
    }

    pub fn build(self) -> PurchaseOrder {
        self.order
    }
}

/// 交付单构建器
pub struct DeliveryBuilder {
    delivery: Delivery,
}

impl DeliveryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            delivery: Delivery {
                id: id.to_string(),
                order_id: None,
                status: "in_transit".to_string(),
                delivered_at: None,
                items: vec![],
            },
        }
    }

    pub fn order(mut self, order_id: &str) -> Self {
        self.delivery.order_id = Some(order_id.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.delivery.status = status.to_string();
        self
    }

    pub fn delivered_at(mut self, ts: DateTime<Utc>) -> Self {
        self.delivery.delivered_at = Some(ts);
        self
    }

    pub fn delivered_days_ago(mut self, days: i64) -> Self {
        self.delivery.delivered_at = Some(Utc::now() - Duration::days(days));
        self
    }

    pub fn item(mut self, description: &str, quantity: f64) -> Self {
        self.delivery.items.push(DeliveryItem {
            description: description.to_string(),
            quantity,
        });
        self
    }

    pub fn build(self) -> Delivery {
        self.delivery
    }
}

/// 里程碑构建器
pub struct MilestoneBuilder {
    milestone: Milestone,
}

impl MilestoneBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            milestone: Milestone {
                id: id.to_string(),
                name: name.to_string(),
                completed: None,
                status: None,
                target_date: None,
                due_date: None,
            },
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.milestone.completed = Some(completed);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.milestone.status = Some(status.to_string());
        self
    }

    pub fn target(mut self, date: NaiveDate) -> Self {
        self.milestone.target_date = Some(date);
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.milestone.due_date = Some(date);
        self
    }

    pub fn build(self) -> Milestone {
        self.milestone
    }
}

/// 支出记录
pub fn expense(id: &str, category: &str, amount: f64) -> ExpenseRecord {
    ExpenseRecord {
        id: id.to_string(),
        category: category.to_string(),
        amount,
    }
}

/// 空快照(仅项目本体)
pub fn snapshot_of(project: ProjectInfo) -> ProjectSnapshot {
    ProjectSnapshot {
        project,
        orders: vec![],
        deliveries: vec![],
        expenses: vec![],
        milestones: vec![],
    }
}

/// 构造原始预报: 按天给定天气代码与降雨概率,气温固定 20 度
pub fn forecast(codes: &[i32], probabilities: &[f64]) -> RawForecast {
    let days = codes.len();
    RawForecast {
        weather_codes: codes.to_vec(),
        max_temperatures: vec![20.0; days],
        precipitation_mm: vec![1.0; days],
        rain_probabilities: probabilities.to_vec(),
    }
}
