//! 批量搜索处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批次的生命周期和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写运行日志头、启动无头浏览器
//! 2. **批量加载**：读取关键词表格（Vec<KeywordRow>）
//! 3. **顺序处理**：单会话逐行执行，行间无并发
//! 4. **资源管理**：唯一持有 Browser 和 Page，保证会话恰好关闭一次
//! 5. **全局统计**：汇总所有行的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单行的细节，向下委托 row_processor
//! - **资源所有者**：唯一持有 Browser 的模块
//! - **顺序执行**：浏览器会话不能安全地跨任务共享，所有行复用
//!   同一个 Page 依次执行
//! - **关闭保证**：批次正常结束或致命错误中止都走同一条关闭路径

use crate::browser;
use crate::config::Config;
use crate::models::load_keyword_rows;
use crate::orchestrator::row_processor::{self, RowOutcome};
use crate::services::{PdfExporter, SearchService};
use crate::utils::logging::{init_log_file, log_rows_loaded, log_startup, print_final_stats};
use anyhow::Result;
use chromiumoxide::{Browser, Page};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    page: Page,
    search: SearchService,
    exporter: PdfExporter,
}

/// 批次处理统计
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    /// 搜索成功的行数
    pub completed: usize,
    /// 搜索失败被跳过的行数
    pub skipped: usize,
    /// 写出的 PDF 总数
    pub artifacts: usize,
    /// 导出失败的页数
    pub pages_failed: usize,
    /// 总行数
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 启动浏览器
        let (browser, page) =
            browser::launch_headless_browser(config.chrome_path.as_deref()).await?;

        Ok(Self {
            search: SearchService::new(&config),
            exporter: PdfExporter::new(&config),
            config,
            browser,
            page,
        })
    }

    /// 运行批次
    ///
    /// 无论批次正常结束还是致命错误中止，浏览器会话都在这里关闭，
    /// 且整个运行恰好关闭一次。
    pub async fn run(mut self) -> Result<RunStats> {
        let result = self.process_all_rows().await;
        self.shutdown().await;

        let stats = result?;
        print_final_stats(&stats, &self.config);
        Ok(stats)
    }

    /// 按输入顺序处理所有行
    async fn process_all_rows(&self) -> Result<RunStats> {
        info!("\n📁 正在读取关键词表格...");
        let rows = load_keyword_rows(&self.config.keyword_file).await?;

        if rows.is_empty() {
            warn!("⚠️ 关键词表格中没有有效行，程序结束");
            return Ok(RunStats::default());
        }

        log_rows_loaded(rows.len(), &self.config.keyword_file);

        let mut stats = RunStats {
            total: rows.len(),
            ..Default::default()
        };

        for (index, row) in rows.iter().enumerate() {
            let row_index = index + 1;
            match row_processor::process_row(
                &self.page,
                &self.search,
                &self.exporter,
                row,
                row_index,
                &self.config,
            )
            .await?
            {
                RowOutcome::Completed(pages) => {
                    stats.completed += 1;
                    stats.artifacts += pages.exported;
                    stats.pages_failed += pages.failed;
                }
                RowOutcome::SearchFailed => {
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    /// 关闭浏览器会话
    async fn shutdown(&mut self) {
        info!("正在关闭浏览器会话...");
        if let Err(e) = self.browser.close().await {
            warn!("⚠️ 关闭浏览器失败: {}", e);
        }
        let _ = self.browser.wait().await;
    }
}
