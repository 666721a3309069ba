// ==========================================
// 工程采购管理系统 - 供应商履约分析引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.2 供应商履约画像
// ==========================================
// 职责: 从订单与交付历史构建按供应商的履约统计
// ==========================================

use crate::domain::project::{Delivery, PurchaseOrder};
use crate::domain::supplier::SupplierStat;
use std::collections::HashMap;

/// 供应商履约分析引擎
///
/// 无状态,纯函数式统计
pub struct SupplierAnalyzer;

impl SupplierAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 构建按供应商的履约统计
    ///
    /// 无供应商名称的订单不计入;
    /// 延迟判定 = 存在关联交付单的实际送达日期晚于订单预计交付日期
    ///
    /// # 参数
    /// - `orders`: 项目全量采购订单
    /// - `deliveries`: 项目全量交付单
    ///
    /// # 返回
    /// - 以供应商名称为键的统计映射
    pub fn analyze(
        &self,
        orders: &[PurchaseOrder],
        deliveries: &[Delivery],
    ) -> HashMap<String, SupplierStat> {
        let mut stats: HashMap<String, SupplierStat> = HashMap::new();

        for order in orders {
            let vendor = match order.vendor.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };

            let late = self.order_delivered_late(order, deliveries);
            stats
                .entry(vendor.to_string())
                .or_insert_with(|| SupplierStat::new(vendor))
                .record(late);
        }

        stats
    }

    /// 订单是否延迟交付
    ///
    /// 预计交付日期缺失、无关联交付单或交付单无送达时间,均不计为延迟
    fn order_delivered_late(&self, order: &PurchaseOrder, deliveries: &[Delivery]) -> bool {
        let expected = match order.expected_delivery {
            Some(date) => date,
            None => return false,
        };

        deliveries.iter().any(|delivery| {
            delivery.order_id.as_deref() == Some(order.id.as_str())
                && delivery
                    .delivered_at
                    .map(|ts| ts.date_naive() > expected)
                    .unwrap_or(false)
        })
    }
}

impl Default for SupplierAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
