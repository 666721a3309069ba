// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 分析链路的结构化字段(project_id/tenant_id)由编排器埋点提供
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统(人读格式)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=delay_risk_engine=trace
///
/// # 示例
/// ```no_run
/// use delay_risk_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    // 配置日志格式
    fmt()
        .with_env_filter(default_filter())
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化日志系统(JSON 格式)
///
/// 批量分析通常跑在后台任务里,JSON 输出便于日志采集管道
/// 按 project_id/tenant_id 字段检索
pub fn init_json() {
    fmt()
        .json()
        .with_env_filter(default_filter())
        .with_target(true)
        .with_current_span(false)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

// 从环境变量读取日志级别，默认为 info
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
