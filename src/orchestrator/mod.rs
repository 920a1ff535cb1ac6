//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量搜索处理器
//! - 管理应用生命周期（初始化、运行、关闭）
//! - 批量加载关键词（Vec<KeywordRow>）
//! - 单会话顺序处理，行间无并发
//! - 管理浏览器资源（Browser、Page）
//! - 输出全局统计信息
//!
//! ### `row_processor` - 单行关键词处理器
//! - 执行单行的完整流程（建目录 → 搜索 → 逐页导出）
//! - 行级错误隔离：搜索失败跳过本行，翻页失败停止本行，
//!   导出失败只丢失该页
//! - 输出单行的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (处理 Vec<KeywordRow>)
//!     ↓
//! row_processor (处理单个 KeywordRow)
//!     ↓
//! services (能力层：search / export)
//!     ↓
//! browser (基础设施：会话与元素等待)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_runner 管批量，row_processor 管单行
//! 2. **资源隔离**：只有编排层持有 Browser 和 Page
//! 3. **向下依赖**：编排层 → services → browser
//! 4. **无业务逻辑**：只做调度和统计，不做具体页面操作

pub mod batch_runner;
pub mod row_processor;

// 重新导出主要类型
pub use batch_runner::{App, RunStats};
pub use row_processor::{process_row, PageStats, RowOutcome};
