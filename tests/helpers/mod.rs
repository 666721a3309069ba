// ==========================================
// 集成测试辅助模块
// ==========================================

pub mod memory_repository;
pub mod test_data_builder;
