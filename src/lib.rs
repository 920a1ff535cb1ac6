//! # Search Archiver
//!
//! 把"公司名 + 关键词"组合批量提交到搜索引擎，并把每页搜索结果
//! 导出为 PDF 的自动化工具
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 基础设施层（Browser）
//! - `browser/` - 无头浏览器会话与元素等待原语
//! - `launch_headless_browser` - 唯一的会话入口，持有 CDP 事件循环
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次操作
//! - `SearchService` - 搜索 / 翻页能力
//! - `PdfExporter` - 公司目录、打印与落盘能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 批次生命周期与浏览器资源管理
//! - `orchestrator/row_processor` - 单行流程编排（搜索 → 逐页导出）与错误隔离
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{RowError, RowResult};
pub use models::{load_keyword_rows, KeywordRow};
pub use orchestrator::{App, RunStats};
pub use services::{PdfExporter, SearchService};
