use crate::models::keyword::KeywordRow;
use anyhow::{Context, Result};
use tokio::fs;
use tracing::warn;

/// 从 CSV 文件加载关键词表格
///
/// 取每行前三列（公司名 / 关键词1 / 关键词2），不解析表头；
/// 文件读不到或 CSV 格式损坏视为致命错误。
pub async fn load_keyword_rows(file_path: &str) -> Result<Vec<KeywordRow>> {
    let content = fs::read_to_string(file_path)
        .await
        .with_context(|| format!("无法读取关键词文件: {}", file_path))?;

    parse_keyword_rows(&content).with_context(|| format!("无法解析关键词文件: {}", file_path))
}

/// 解析 CSV 文本为关键词行列表
///
/// 不足三列或公司名为空的行记录警告后跳过，不中断整个批次。
pub fn parse_keyword_rows(content: &str) -> Result<Vec<KeywordRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 1;

        if record.len() < 3 {
            warn!("⚠️ 第 {} 行不足三列，已跳过", line);
            continue;
        }

        let company = record.get(0).unwrap_or("").trim();
        if company.is_empty() {
            warn!("⚠️ 第 {} 行公司名为空，已跳过", line);
            continue;
        }

        let keyword1 = record.get(1).unwrap_or("").trim();
        let keyword2 = record.get(2).unwrap_or("").trim();
        rows.push(KeywordRow::new(company, keyword1, keyword2));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_rows() {
        let rows = parse_keyword_rows("AcmeCo,pricing,2024\nGlobex,merger,2023\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], KeywordRow::new("AcmeCo", "pricing", "2024"));
        assert_eq!(rows[1].company, "Globex");
    }

    #[test]
    fn test_parse_uses_first_three_columns() {
        // 多余的列被忽略
        let rows = parse_keyword_rows("AcmeCo,pricing,2024,extra,columns\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], KeywordRow::new("AcmeCo", "pricing", "2024"));
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let rows = parse_keyword_rows("AcmeCo,pricing\nGlobex,merger,2023\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company, "Globex");
    }

    #[test]
    fn test_parse_skips_empty_company() {
        let rows = parse_keyword_rows(",pricing,2024\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        let rows = parse_keyword_rows("").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_quoted_field_with_comma() {
        let rows = parse_keyword_rows("\"Acme, Inc\",pricing,2024\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company, "Acme, Inc");
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let rows = parse_keyword_rows("B公司,年报,2023\nA公司,招股书,2024\n").unwrap();
        assert_eq!(rows[0].company, "B公司");
        assert_eq!(rows[1].company, "A公司");
    }
}
