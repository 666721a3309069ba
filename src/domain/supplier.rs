// ==========================================
// 工程采购管理系统 - 供应商画像模型
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.2 供应商履约画像
// ==========================================

use serde::{Deserialize, Serialize};

/// 供应商履约统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierStat {
    /// 供应商名称
    pub vendor: String,
    /// 该供应商的订单总数
    pub total_orders: i32,
    /// 延迟交付的订单数
    pub late_deliveries: i32,
    /// 准时率 = (总数 - 延迟数) / 总数
    pub on_time_rate: f64,
}

impl SupplierStat {
    pub fn new(vendor: &str) -> Self {
        Self {
            vendor: vendor.to_string(),
            total_orders: 0,
            late_deliveries: 0,
            on_time_rate: 1.0,
        }
    }

    /// 记录一笔订单并就地重算准时率
    pub fn record(&mut self, late: bool) {
        self.total_orders += 1;
        if late {
            self.late_deliveries += 1;
        }
        self.on_time_rate =
            f64::from(self.total_orders - self.late_deliveries) / f64::from(self.total_orders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_recomputes_on_time_rate() {
        let mut stat = SupplierStat::new("华东钢材");
        stat.record(false);
        assert!((stat.on_time_rate - 1.0).abs() < 1e-9);

        stat.record(true);
        assert_eq!(stat.total_orders, 2);
        assert_eq!(stat.late_deliveries, 1);
        assert!((stat.on_time_rate - 0.5).abs() < 1e-9);

        stat.record(true);
        stat.record(true);
        stat.record(true);
        assert!((stat.on_time_rate - 0.2).abs() < 1e-9);
    }
}
