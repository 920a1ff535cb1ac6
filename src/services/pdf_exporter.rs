//! PDF 导出服务 - 业务能力层
//!
//! 只负责"把当前页面存成 PDF"的能力：公司目录、打印参数、文件落盘。
//! 文件名由搜索词和页码决定，重复运行覆盖同名文件而不是追加。

use crate::config::Config;
use crate::error::{RowError, RowResult};
use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// PDF 导出服务
pub struct PdfExporter {
    result_folder: PathBuf,
    scale: f64,
}

impl PdfExporter {
    pub fn new(config: &Config) -> Self {
        Self {
            result_folder: PathBuf::from(&config.result_folder),
            scale: config.pdf_scale,
        }
    }

    /// 确保公司输出目录存在（幂等）
    ///
    /// 目录创建失败视为致命错误，由顶层中止整个批次。
    pub fn ensure_company_folder(&self, company: &str) -> Result<PathBuf> {
        let folder = self.result_folder.join(sanitize_component(company));
        fs::create_dir_all(&folder)
            .with_context(|| format!("无法创建输出目录: {}", folder.display()))?;
        Ok(folder)
    }

    /// 把当前页面导出为 PDF
    ///
    /// 页眉为当前时间，页脚为当前页面 URL。失败为行级错误，
    /// 调用方记录后继续处理本行剩余页。
    pub async fn export_page(
        &self,
        page: &Page,
        folder: &Path,
        query: &str,
        page_num: usize,
    ) -> RowResult<PathBuf> {
        let file_path = folder.join(artifact_file_name(query, page_num));

        let current_url = page
            .url()
            .await
            .map_err(|e| RowError::print_failed(page_num, e))?
            .unwrap_or_default();

        // 使用 DevTools 协议生成 PDF，chromiumoxide 返回已解码的字节
        let pdf_bytes = page
            .pdf(self.print_params(&current_url))
            .await
            .map_err(|e| RowError::print_failed(page_num, e))?;

        tokio::fs::write(&file_path, &pdf_bytes)
            .await
            .map_err(|e| RowError::write_failed(file_path.display().to_string(), e))?;

        info!("✓ 已保存第 {} 页搜索结果: {}", page_num, file_path.display());
        Ok(file_path)
    }

    /// 构建打印参数：打印背景、固定缩放、时间页眉、URL 页脚、固定页边距
    fn print_params(&self, current_url: &str) -> PrintToPdfParams {
        let header_template = format!(
            r#"<div style="font-size:8px; width:100%; text-align:center;">{}</div>"#,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let footer_template = format!(
            r#"<div style="font-size:8px; width:100%; text-align:center;">{}</div>"#,
            current_url
        );

        PrintToPdfParams {
            print_background: Some(true),
            scale: Some(self.scale),
            display_header_footer: Some(true),
            header_template: Some(header_template),
            footer_template: Some(footer_template),
            margin_top: Some(0.4),
            margin_bottom: Some(0.4),
            margin_left: Some(0.4),
            margin_right: Some(0.4),
            ..Default::default()
        }
    }
}

/// 由搜索词和页码推导 PDF 文件名（确定性）
pub fn artifact_file_name(query: &str, page_num: usize) -> String {
    format!("{}_page_{}.pdf", sanitize_component(query), page_num)
}

/// 把公司名 / 搜索词清洗为安全的路径组成部分
///
/// 空白和路径敏感字符替换为下划线，保证"每个公司恰好一个目录"的
/// 不变量对任意输入都成立。
pub fn sanitize_component(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '\t' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_file_name_deterministic() {
        assert_eq!(
            artifact_file_name("AcmeCo pricing 2024", 1),
            "AcmeCo_pricing_2024_page_1.pdf"
        );
        // 同样的输入永远得到同样的文件名
        assert_eq!(
            artifact_file_name("AcmeCo pricing 2024", 1),
            artifact_file_name("AcmeCo pricing 2024", 1)
        );
    }

    #[test]
    fn test_artifact_file_name_chinese_query() {
        assert_eq!(
            artifact_file_name("测试公司 年报 2023", 5),
            "测试公司_年报_2023_page_5.pdf"
        );
    }

    #[test]
    fn test_sanitize_component_hostile_chars() {
        assert_eq!(sanitize_component("A/B\\C:D"), "A_B_C_D");
        assert_eq!(sanitize_component("  spaced name  "), "spaced_name");
    }

    #[test]
    fn test_ensure_company_folder_idempotent() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let config = Config {
            result_folder: dir.path().join("result").to_string_lossy().to_string(),
            ..Config::default()
        };
        let exporter = PdfExporter::new(&config);

        let first = exporter.ensure_company_folder("AcmeCo").expect("首次创建失败");
        let second = exporter.ensure_company_folder("AcmeCo").expect("重复创建失败");
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn test_ensure_company_folder_sanitizes_name() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let config = Config {
            result_folder: dir.path().join("result").to_string_lossy().to_string(),
            ..Config::default()
        };
        let exporter = PdfExporter::new(&config);

        // 含路径分隔符的公司名仍然只产生一层目录
        let folder = exporter.ensure_company_folder("Acme/Sub").expect("创建失败");
        assert_eq!(folder.file_name().unwrap().to_string_lossy(), "Acme_Sub");
        assert_eq!(folder.parent().unwrap(), dir.path().join("result"));
    }
}
