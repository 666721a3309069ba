// ==========================================
// 工程采购管理系统 - 财务影响估算引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.6 财务影响
// ==========================================
// 职责: 将预计延期天数折算为货币损失,输出可解释的分项
// ==========================================

use crate::domain::project::{ExpenseRecord, ProjectInfo, PurchaseOrder};
use serde::{Deserialize, Serialize};

/// 日均预算折算的项目工期假设(天)
const ASSUMED_PROJECT_DURATION_DAYS: f64 = 90.0;

/// 人工日成本的放大系数
const LABOR_DAY_MULTIPLIER: f64 = 5.0;

/// 延期的机会成本占直接成本的比例
const OPPORTUNITY_COST_RATE: f64 = 0.20;

/// 在途订单的风险敞口折算比例
const PENDING_ORDER_RISK_RATE: f64 = 0.10;

/// 人工类支出的类别关键词(不区分大小写)
const LABOR_CATEGORY_KEYWORDS: [&str; 3] = ["labor", "crew", "wage"];

/// 财务影响分项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    /// 直接成本 = 日均预算 × 延期天数
    pub direct_cost: f64,
    /// 人工成本 = 人工日成本 × 延期天数
    pub labor_cost: f64,
    /// 机会成本 = 直接成本 × 20%
    pub opportunity_cost: f64,
    /// 在途订单风险 = 未闭环订单金额 × 10%
    pub pending_order_risk: f64,
    /// 合计(四舍五入到整数)
    pub total: f64,
}

/// 财务影响估算引擎
pub struct FinancialImpactCalculator;

impl FinancialImpactCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 估算延期的财务影响合计
    pub fn estimate(
        &self,
        project: &ProjectInfo,
        orders: &[PurchaseOrder],
        expenses: &[ExpenseRecord],
        delay_days: i32,
    ) -> f64 {
        self.breakdown(project, orders, expenses, delay_days).total
    }

    /// 估算财务影响并返回分项
    ///
    /// 日均预算按 90 天工期假设折算;
    /// 人工日成本 = 人工类支出均摊到全部支出笔数后 × 5,为经验近似口径
    ///
    /// TODO(P2-FIN01): 人工日成本口径待财务复核(当前为均摊 × 5 经验近似)
    ///
    /// # 参数
    /// - `delay_days`: 预计延期天数(0 时仅剩在途订单风险项)
    pub fn breakdown(
        &self,
        project: &ProjectInfo,
        orders: &[PurchaseOrder],
        expenses: &[ExpenseRecord],
        delay_days: i32,
    ) -> ImpactBreakdown {
        let days = f64::from(delay_days);

        let daily_budget = project.budget.unwrap_or(0.0) / ASSUMED_PROJECT_DURATION_DAYS;

        let labor_total: f64 = expenses
            .iter()
            .filter(|e| is_labor_category(&e.category))
            .map(|e| e.amount)
            .sum();
        // 均摊分母取全部支出笔数,而非仅人工类笔数
        let daily_labor =
            labor_total / expenses.len().max(1) as f64 * LABOR_DAY_MULTIPLIER;

        let pending_value: f64 = orders
            .iter()
            .filter(|o| o.is_outstanding())
            .map(|o| o.amount)
            .sum();

        let direct_cost = daily_budget * days;
        let labor_cost = daily_labor * days;
        let opportunity_cost = direct_cost * OPPORTUNITY_COST_RATE;
        let pending_order_risk = pending_value * PENDING_ORDER_RISK_RATE;

        ImpactBreakdown {
            direct_cost,
            labor_cost,
            opportunity_cost,
            pending_order_risk,
            // 脏数据(负金额)下仍保证合计非负
            total: (direct_cost + labor_cost + opportunity_cost + pending_order_risk)
                .max(0.0)
                .round(),
        }
    }
}

impl Default for FinancialImpactCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// 支出类别是否属于人工类
fn is_labor_category(category: &str) -> bool {
    let lowered = category.to_lowercase();
    LABOR_CATEGORY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_project(budget: Option<f64>) -> ProjectInfo {
        ProjectInfo {
            id: "P001".to_string(),
            tenant_id: "T001".to_string(),
            name: "测试项目".to_string(),
            status: "active".to_string(),
            budget,
            latitude: None,
            longitude: None,
        }
    }

    fn make_order(status: &str, amount: f64) -> PurchaseOrder {
        PurchaseOrder {
            id: format!("PO-{}", amount),
            vendor: None,
            status: status.to_string(),
            amount,
            expected_delivery: None,
            created_at: Utc::now(),
            created_by_email: None,
        }
    }

    fn expense(category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            id: format!("E-{}", amount),
            category: category.to_string(),
            amount,
        }
    }

    #[test]
    fn test_empty_project_zero_impact() {
        let calculator = FinancialImpactCalculator::new();
        let total = calculator.estimate(&make_project(None), &[], &[], 0);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_direct_and_opportunity_cost() {
        let calculator = FinancialImpactCalculator::new();
        // 日均预算 = 90000 / 90 = 1000; 延期 5 天
        let breakdown = calculator.breakdown(&make_project(Some(90000.0)), &[], &[], 5);
        assert!((breakdown.direct_cost - 5000.0).abs() < 1e-9);
        assert!((breakdown.opportunity_cost - 1000.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 6000.0);
    }

    #[test]
    fn test_labor_cost_averages_over_all_expenses() {
        let calculator = FinancialImpactCalculator::new();
        let expenses = vec![
            expense("Labor crew", 3000.0),
            expense("材料费", 5000.0),
            expense("Wages", 1000.0),
            expense("设备租赁", 2000.0),
        ];
        // 人工类合计 4000, 均摊到 4 笔 = 1000, ×5 = 5000/天; 延期 2 天
        let breakdown = calculator.breakdown(&make_project(None), &[], &expenses, 2);
        assert!((breakdown.labor_cost - 10000.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 10000.0);
    }

    #[test]
    fn test_labor_keyword_matching_case_insensitive() {
        assert!(is_labor_category("LABOR"));
        assert!(is_labor_category("Steel crew rental"));
        assert!(is_labor_category("wage settlement"));
        assert!(!is_labor_category("材料费"));
        assert!(!is_labor_category("equipment"));
    }

    #[test]
    fn test_pending_order_risk() {
        let calculator = FinancialImpactCalculator::new();
        let orders = vec![
            make_order("pending", 10000.0),
            make_order("approved", 20000.0),
            make_order("delivered", 50000.0),
            make_order("cancelled", 40000.0),
        ];
        // 仅 pending/approved 计入: 30000 × 10% = 3000
        let breakdown = calculator.breakdown(&make_project(None), &orders, &[], 0);
        assert!((breakdown.pending_order_risk - 3000.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 3000.0, "延期 0 天仍保留在途风险项");
    }

    #[test]
    fn test_total_rounded_to_integer() {
        let calculator = FinancialImpactCalculator::new();
        // 日均预算 = 100 / 90 ≈ 1.111; 延期 1 天
        let breakdown = calculator.breakdown(&make_project(Some(100.0)), &[], &[], 1);
        assert_eq!(breakdown.total.fract(), 0.0);
        assert_eq!(breakdown.total, 1.0, "1.111 + 0.222 ≈ 1.33 四舍五入到 1");
    }

    #[test]
    fn test_combined_scenario() {
        let calculator = FinancialImpactCalculator::new();
        let project = make_project(Some(900000.0));
        let orders = vec![make_order("pending", 50000.0)];
        let expenses = vec![expense("Labor", 20000.0), expense("材料费", 20000.0)];
        // 日均预算 10000, 延期 3 天: 直接 30000
        // 人工 20000/2×5 = 50000/天 × 3 = 150000
        // 机会 6000; 在途 5000
        let breakdown = calculator.breakdown(&project, &orders, &expenses, 3);
        assert_eq!(breakdown.total, 191000.0);
    }
}
