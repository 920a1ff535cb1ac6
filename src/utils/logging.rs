//! 日志工具模块
//!
//! 提供运行日志文件和控制台统计输出的辅助函数

use crate::config::Config;
use crate::orchestrator::batch_runner::RunStats;
use anyhow::Result;
use std::fs;
use tracing::info;

/// 初始化运行日志文件
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n搜索结果导出日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 公司搜索结果批量导出");
    info!("📄 关键词表格: {}", config.keyword_file);
    info!("📂 输出目录: {}", config.result_folder);
    info!("📑 每行最多导出 {} 页", config.max_pages);
    info!("{}", "=".repeat(60));
}

/// 记录关键词加载信息
pub fn log_rows_loaded(total: usize, keyword_file: &str) {
    info!("✓ 从 {} 中读取到 {} 行关键词", keyword_file, total);
    info!("💡 将按输入顺序逐行处理\n");
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.completed, stats.total);
    info!("❌ 跳过: {}", stats.skipped);
    info!(
        "📄 导出 PDF: {} 个 (失败 {} 页)",
        stats.artifacts, stats.pages_failed
    );
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short_unchanged() {
        assert_eq!(truncate_text("AcmeCo", 10), "AcmeCo");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("abcdefgh", 5), "abcde...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        // 按字符截断而不是按字节
        assert_eq!(truncate_text("测试公司年报导出", 4), "测试公司...");
    }
}
