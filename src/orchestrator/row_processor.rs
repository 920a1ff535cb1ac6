//! 单行关键词处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单个 KeywordRow 的完整处理流程，是行级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **目录准备**：确保公司输出目录存在（失败致命，中止批次）
//! 2. **搜索**：失败只跳过本行，批次继续
//! 3. **逐页导出**：第 1 页导出后依次尝试第 2..=N 页
//! 4. **翻页失败**：停止本行翻页，保留已导出的页，不重试
//! 5. **导出失败**：只丢失该页，继续翻页
//! 6. **统计输出**：记录本行导出 / 失败的页数

use crate::config::Config;
use crate::models::KeywordRow;
use crate::services::{PdfExporter, SearchService};
use crate::utils::logging::truncate_text;
use anyhow::Result;
use chromiumoxide::Page;
use std::path::Path;
use tracing::{error, info, warn};

/// 单行页面统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    /// 成功导出的页数
    pub exported: usize,
    /// 导出失败的页数
    pub failed: usize,
}

/// 单行处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// 搜索成功，完成（或部分完成）逐页导出
    Completed(PageStats),
    /// 搜索失败，本行被跳过
    SearchFailed,
}

/// 处理单行关键词
///
/// # 参数
/// - `page`: 共享的浏览器页面
/// - `search`: 搜索服务
/// - `exporter`: PDF 导出服务
/// - `row`: 关键词行
/// - `row_index`: 行号（用于日志）
/// - `config`: 配置
pub async fn process_row(
    page: &Page,
    search: &SearchService,
    exporter: &PdfExporter,
    row: &KeywordRow,
    row_index: usize,
    config: &Config,
) -> Result<RowOutcome> {
    let query = row.search_query();
    log_row_start(row_index, row, &query);

    // 目录创建失败是致命错误，直接上抛中止批次
    let folder = exporter.ensure_company_folder(&row.company)?;

    // 搜索失败行级隔离：记录后跳过本行
    let result_url = match search.perform_search(page, &query).await {
        Ok(url) => url,
        Err(e) => {
            error!("[行 {}] ❌ 执行搜索时出错，跳过本行: {}", row_index, e);
            return Ok(RowOutcome::SearchFailed);
        }
    };
    if config.verbose_logging {
        info!("[行 {}] 结果页 URL: {}", row_index, result_url);
    }

    let mut stats = PageStats::default();

    // 第 1 页
    export_current_page(page, exporter, &folder, &query, 1, row_index, &mut stats).await;

    // 第 2..=N 页：翻页失败停止本行，导出失败继续翻页
    for page_num in 2..=config.max_pages {
        if let Err(e) = search.go_to_next_page(page, page_num).await {
            warn!(
                "[行 {}] ⚠️ 无法处理第 {} 页，停止翻页: {}",
                row_index, page_num, e
            );
            break;
        }
        export_current_page(page, exporter, &folder, &query, page_num, row_index, &mut stats)
            .await;
    }

    log_row_complete(row_index, &stats);
    Ok(RowOutcome::Completed(stats))
}

/// 导出当前页，失败只记录不中断
async fn export_current_page(
    page: &Page,
    exporter: &PdfExporter,
    folder: &Path,
    query: &str,
    page_num: usize,
    row_index: usize,
    stats: &mut PageStats,
) {
    match exporter.export_page(page, folder, query, page_num).await {
        Ok(_) => stats.exported += 1,
        Err(e) => {
            error!(
                "[行 {}] 保存第 {} 页搜索结果时出错: {}",
                row_index, page_num, e
            );
            stats.failed += 1;
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_row_start(row_index: usize, row: &KeywordRow, query: &str) {
    info!("\n[行 {}] {}", row_index, "─".repeat(30));
    info!("[行 {}] 公司: {}", row_index, row.company);
    info!("[行 {}] 搜索词: {}", row_index, truncate_text(query, 60));
}

fn log_row_complete(row_index: usize, stats: &PageStats) {
    info!(
        "[行 {}] ✅ 本行处理完成: 导出 {} 页, 失败 {} 页",
        row_index, stats.exported, stats.failed
    );
}
