/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 关键词表格路径（公司名 / 关键词1 / 关键词2）
    pub keyword_file: String,
    /// 结果输出根目录
    pub result_folder: String,
    /// 搜索引擎首页
    pub search_url: String,
    /// 浏览器可执行文件路径（None 时自动探测）
    pub chrome_path: Option<String>,
    /// 元素等待超时（秒）
    pub wait_timeout_secs: u64,
    /// 翻页后的页面加载等待（毫秒）
    pub page_settle_millis: u64,
    /// 每行最多导出的结果页数
    pub max_pages: usize,
    /// PDF 打印缩放
    pub pdf_scale: f64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword_file: "keywords.csv".to_string(),
            result_folder: "result".to_string(),
            search_url: "https://www.baidu.com".to_string(),
            chrome_path: None,
            wait_timeout_secs: 10,
            page_settle_millis: 2000,
            max_pages: 5,
            pdf_scale: 1.0,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            keyword_file: std::env::var("KEYWORD_FILE").unwrap_or(default.keyword_file),
            result_folder: std::env::var("RESULT_FOLDER").unwrap_or(default.result_folder),
            search_url: std::env::var("SEARCH_URL").unwrap_or(default.search_url),
            chrome_path: std::env::var("CHROME_PATH").ok(),
            wait_timeout_secs: std::env::var("WAIT_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.wait_timeout_secs),
            page_settle_millis: std::env::var("PAGE_SETTLE_MILLIS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_settle_millis),
            max_pages: std::env::var("MAX_PAGES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_pages),
            pdf_scale: std::env::var("PDF_SCALE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.pdf_scale),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
