// ==========================================
// 工程采购管理系统 - 恢复方案生成引擎
// ==========================================
// 依据: Risk_Engine_Specs_v1.0.md - 4.7 恢复方案
// ==========================================
// 职责: 生成三个固定档位的恢复方案并选出唯一推荐
// 红线: 方案列表恰有一个 recommended = true
// ==========================================

use crate::domain::project::ProjectInfo;
use crate::domain::recovery::RecoveryOption;
use crate::domain::risk::RiskFactor;
use crate::domain::types::{FactorKind, RecoveryKind, Severity};

/// 加急采购费用占财务影响的比例
const EXPEDITE_COST_RATE: f64 = 0.05;

/// 加班追赶费用占财务影响的比例
const OVERTIME_COST_RATE: f64 = 0.02;

/// 均衡方案可挽回的工期比例
const BALANCED_TIME_RECOVERY_RATE: f64 = 0.6;

/// 恢复方案生成引擎
pub struct RecoveryPlanner;

impl RecoveryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 生成三个恢复方案
    ///
    /// 推荐规则: 存在高严重度供应商因子 → 推荐最快方案;
    /// 无任何高严重度因子 → 推荐最省方案; 其余情况回落到均衡方案
    ///
    /// # 参数
    /// - `factors`: 本次识别出的风险因子
    /// - `project`: 项目基础信息(用于方案描述)
    /// - `delay_days`: 预计延期天数
    /// - `financial_impact`: 预估财务影响(费用折算基数)
    ///
    /// # 返回
    /// - 固定顺序 [最快, 最省, 均衡],恰有一个 recommended
    pub fn generate(
        &self,
        factors: &[RiskFactor],
        project: &ProjectInfo,
        delay_days: i32,
        financial_impact: f64,
    ) -> Vec<RecoveryOption> {
        let supplier_high = factors
            .iter()
            .any(|f| f.factor_type == FactorKind::Supplier && f.severity == Severity::High);
        let any_high = factors.iter().any(|f| f.severity == Severity::High);

        let mut options = vec![
            self.build_fastest(factors, delay_days, financial_impact, supplier_high),
            self.build_cheapest(factors, project, any_high),
            self.build_balanced(project, delay_days, financial_impact),
        ];

        enforce_single_recommendation(&mut options);
        debug_assert_eq!(
            options.iter().filter(|o| o.recommended).count(),
            1,
            "恢复方案必须恰有一个推荐项"
        );
        options
    }

    /// 方案 1: 更换供应商 / 加急采购
    fn build_fastest(
        &self,
        factors: &[RiskFactor],
        delay_days: i32,
        financial_impact: f64,
        recommended: bool,
    ) -> RecoveryOption {
        let supplier_factor = factors.iter().find(|f| f.factor_type == FactorKind::Supplier);
        let description = match supplier_factor {
            Some(factor) => format!(
                "就近更换或加急催办供应商「{}」的在途订单,压缩关键物资到货周期",
                factor.name
            ),
            None => "对关键物资订单启用加急渠道,压缩到货周期".to_string(),
        };

        RecoveryOption {
            id: 1,
            name: "更换供应商/加急采购".to_string(),
            option_type: RecoveryKind::Fastest,
            cost: (financial_impact * EXPEDITE_COST_RATE).round(),
            time_saved_days: (delay_days - 1).max(1),
            description,
            action_items: vec![
                "梳理受影响订单并确认缺口物料清单".to_string(),
                "联系备选供应商获取加急报价".to_string(),
                "确认加急费用与到货承诺后改单".to_string(),
                "更新采购台账与现场收货计划".to_string(),
            ],
            recommended,
        }
    }

    /// 方案 2: 调整施工顺序等待交付
    fn build_cheapest(
        &self,
        factors: &[RiskFactor],
        project: &ProjectInfo,
        any_high: bool,
    ) -> RecoveryOption {
        let weather_affected = factors.iter().any(|f| f.factor_type == FactorKind::Weather);
        let description = if weather_affected {
            format!(
                "将「{}」受天气影响的室外工序后移,优先安排室内作业等待物资到位",
                project.name
            )
        } else {
            format!(
                "在现有资源内重排「{}」的施工顺序,等待物资按原计划到位",
                project.name
            )
        };

        RecoveryOption {
            id: 2,
            name: "调整施工顺序等待交付".to_string(),
            option_type: RecoveryKind::Cheapest,
            cost: 0.0,
            time_saved_days: 0,
            description,
            action_items: vec![
                "识别可并行推进的非受阻工序".to_string(),
                "与施工班组确认新的作业顺序".to_string(),
                "同步调整里程碑与人力排班".to_string(),
                "每日跟踪待交付订单状态".to_string(),
            ],
            recommended: !any_high,
        }
    }

    /// 方案 3: 部分补货并安排加班追赶
    fn build_balanced(
        &self,
        project: &ProjectInfo,
        delay_days: i32,
        financial_impact: f64,
    ) -> RecoveryOption {
        RecoveryOption {
            id: 3,
            name: "部分补货并安排加班追赶".to_string(),
            option_type: RecoveryKind::Balanced,
            cost: (financial_impact * OVERTIME_COST_RATE).round(),
            time_saved_days: (f64::from(delay_days) * BALANCED_TIME_RECOVERY_RATE).ceil() as i32,
            description: format!(
                "对「{}」最紧缺的部分物资先行小批量补货,同时安排关键工序加班追赶进度",
                project.name
            ),
            action_items: vec![
                "确定最影响关键路径的物资并小批量补货".to_string(),
                "评估加班班次与预算占用".to_string(),
                "锁定加班人员与设备窗口".to_string(),
                "按周复盘追赶效果并滚动调整".to_string(),
            ],
            // 初始不推荐,由唯一推荐收敛逻辑按需回落
            recommended: false,
        }
    }
}

impl Default for RecoveryPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// 收敛为唯一推荐
///
/// 多个方案被标记时保留序号最小者;
/// 无任何标记时回落到均衡方案(列表末位)
fn enforce_single_recommendation(options: &mut [RecoveryOption]) {
    let first = options.iter().position(|o| o.recommended);
    match first {
        Some(index) => {
            for (i, option) in options.iter_mut().enumerate() {
                option.recommended = i == index;
            }
        }
        None => {
            if let Some(last) = options.last_mut() {
                last.recommended = true;
            }
        }
    }
}
