use std::fmt;
use std::time::Duration;

/// 行级错误类型
///
/// 两级错误策略中"可恢复"的一级：搜索、翻页、导出的失败只影响当前行
/// （或当前页），由编排层记录并跳过。致命错误（浏览器启动失败、关键词
/// 文件读取失败、输出目录创建失败）不进入此枚举，以 anyhow::Error 携带
/// 上下文直接上抛到顶层。
#[derive(Debug)]
pub enum RowError {
    /// 搜索相关错误
    Search(SearchError),
    /// 翻页相关错误
    Pagination(PaginationError),
    /// PDF 导出相关错误
    Export(ExportError),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::Search(e) => write!(f, "搜索错误: {}", e),
            RowError::Pagination(e) => write!(f, "翻页错误: {}", e),
            RowError::Export(e) => write!(f, "导出错误: {}", e),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowError::Search(e) => Some(e),
            RowError::Pagination(e) => Some(e),
            RowError::Export(e) => Some(e),
        }
    }
}

/// 搜索相关错误
#[derive(Debug)]
pub enum SearchError {
    /// 导航到搜索引擎失败
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 超时前未找到页面元素
    ElementMissing {
        selector: String,
        timeout_secs: u64,
    },
    /// 与页面元素交互失败
    InteractionFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 等待搜索结果容器超时
    ResultsTimeout {
        query: String,
        timeout_secs: u64,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NavigationFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            SearchError::ElementMissing {
                selector,
                timeout_secs,
            } => {
                write!(f, "{}s 内未找到元素: {}", timeout_secs, selector)
            }
            SearchError::InteractionFailed { source } => {
                write!(f, "页面交互失败: {}", source)
            }
            SearchError::ResultsTimeout {
                query,
                timeout_secs,
            } => {
                write!(f, "等待搜索结果超时 ({}s): {}", timeout_secs, query)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::NavigationFailed { source, .. }
            | SearchError::InteractionFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 翻页相关错误
#[derive(Debug)]
pub enum PaginationError {
    /// 超时前未找到翻页控件
    ControlNotFound {
        page_num: usize,
        timeout_secs: u64,
    },
    /// 点击翻页控件失败
    ClickFailed {
        page_num: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::ControlNotFound {
                page_num,
                timeout_secs,
            } => {
                write!(f, "{}s 内未找到第 {} 页的翻页控件", timeout_secs, page_num)
            }
            PaginationError::ClickFailed { page_num, source } => {
                write!(f, "点击翻页控件失败 (第 {} 页): {}", page_num, source)
            }
        }
    }
}

impl std::error::Error for PaginationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaginationError::ClickFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// PDF 导出相关错误
#[derive(Debug)]
pub enum ExportError {
    /// 打印管线生成 PDF 失败
    PrintFailed {
        page_num: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// PDF 文件写入失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::PrintFailed { page_num, source } => {
                write!(f, "生成第 {} 页 PDF 失败: {}", page_num, source)
            }
            ExportError::WriteFailed { path, source } => {
                write!(f, "写入 PDF 文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::PrintFailed { source, .. } | ExportError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 便捷构造函数 ==========

impl RowError {
    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RowError::Search(SearchError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建元素缺失错误
    pub fn element_missing(selector: impl Into<String>, timeout: Duration) -> Self {
        RowError::Search(SearchError::ElementMissing {
            selector: selector.into(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// 创建页面交互失败错误
    pub fn interaction_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RowError::Search(SearchError::InteractionFailed {
            source: Box::new(source),
        })
    }

    /// 创建搜索结果超时错误
    pub fn results_timeout(query: impl Into<String>, timeout: Duration) -> Self {
        RowError::Search(SearchError::ResultsTimeout {
            query: query.into(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// 创建翻页控件缺失错误
    pub fn control_not_found(page_num: usize, timeout: Duration) -> Self {
        RowError::Pagination(PaginationError::ControlNotFound {
            page_num,
            timeout_secs: timeout.as_secs(),
        })
    }

    /// 创建翻页点击失败错误
    pub fn click_failed(
        page_num: usize,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RowError::Pagination(PaginationError::ClickFailed {
            page_num,
            source: Box::new(source),
        })
    }

    /// 创建 PDF 生成失败错误
    pub fn print_failed(
        page_num: usize,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RowError::Export(ExportError::PrintFailed {
            page_num,
            source: Box::new(source),
        })
    }

    /// 创建 PDF 写入失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RowError::Export(ExportError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 行级结果类型
pub type RowResult<T> = Result<T, RowError>;
