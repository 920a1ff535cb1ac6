/// 关键词行
///
/// 一行对应一次完整的"搜索 + 翻页 + 导出"流程，从关键词表格批量读入后
/// 只读使用，不回写。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    /// 公司名
    pub company: String,
    /// 关键词1
    pub keyword1: String,
    /// 关键词2
    pub keyword2: String,
}

impl KeywordRow {
    pub fn new(
        company: impl Into<String>,
        keyword1: impl Into<String>,
        keyword2: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            keyword1: keyword1.into(),
            keyword2: keyword2.into(),
        }
    }

    /// 拼接搜索词：`公司名 关键词1 关键词2`
    ///
    /// 空白关键词不参与拼接，避免产生多余空格。
    pub fn search_query(&self) -> String {
        [
            self.company.as_str(),
            self.keyword1.as_str(),
            self.keyword2.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_concatenation() {
        let row = KeywordRow::new("AcmeCo", "pricing", "2024");
        assert_eq!(row.search_query(), "AcmeCo pricing 2024");
    }

    #[test]
    fn test_search_query_skips_empty_keyword() {
        let row = KeywordRow::new("AcmeCo", "", "2024");
        assert_eq!(row.search_query(), "AcmeCo 2024");
    }

    #[test]
    fn test_search_query_chinese() {
        let row = KeywordRow::new("测试公司", "年报", "2023");
        assert_eq!(row.search_query(), "测试公司 年报 2023");
    }
}
