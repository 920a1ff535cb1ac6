//! 搜索服务 - 业务能力层
//!
//! 只负责"驱动搜索引擎"的能力：打开首页、输入搜索词、提交、翻页。
//! 不持有 Page，不关心导出和批处理流程。

use crate::browser::dom;
use crate::config::Config;
use crate::error::{RowError, RowResult};
use chromiumoxide::Page;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

/// 搜索输入框
const SEARCH_INPUT_SELECTOR: &str = "input[name='wd']";
/// 搜索按钮
const SEARCH_BUTTON_SELECTOR: &str = "#su";
/// 搜索结果容器
const RESULTS_CONTAINER_SELECTOR: &str = "div#content_left";
/// 翻页链接候选集合
const PAGINATION_LINK_SELECTOR: &str = "a.n";
/// 翻页链接文本
const NEXT_PAGE_LINK_TEXT: &str = "下一页";

/// 搜索服务
pub struct SearchService {
    search_url: String,
    wait_timeout: Duration,
    settle_delay: Duration,
}

impl SearchService {
    pub fn new(config: &Config) -> Self {
        Self {
            search_url: config.search_url.clone(),
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
            settle_delay: Duration::from_millis(config.page_settle_millis),
        }
    }

    /// 执行一次搜索并返回结果页 URL
    ///
    /// 导航失败、元素缺失、结果超时均为行级错误，不重试，
    /// 由调用方决定跳过该行。
    pub async fn perform_search(&self, page: &Page, query: &str) -> RowResult<String> {
        debug!("导航到搜索引擎: {}", self.search_url);
        page.goto(self.search_url.as_str())
            .await
            .map_err(|e| RowError::navigation_failed(&self.search_url, e))?;

        // 找到输入文本框并输入搜索词
        let input = dom::wait_for_element(page, SEARCH_INPUT_SELECTOR, self.wait_timeout)
            .await
            .ok_or_else(|| RowError::element_missing(SEARCH_INPUT_SELECTOR, self.wait_timeout))?;
        input
            .click()
            .await
            .map_err(|e| RowError::interaction_failed(e))?;
        input
            .type_str(query)
            .await
            .map_err(|e| RowError::interaction_failed(e))?;

        // 点击搜索按钮
        let button = dom::wait_for_element(page, SEARCH_BUTTON_SELECTOR, self.wait_timeout)
            .await
            .ok_or_else(|| RowError::element_missing(SEARCH_BUTTON_SELECTOR, self.wait_timeout))?;
        button
            .click()
            .await
            .map_err(|e| RowError::interaction_failed(e))?;

        // 结果容器出现即认为搜索完成
        dom::wait_for_element(page, RESULTS_CONTAINER_SELECTOR, self.wait_timeout)
            .await
            .ok_or_else(|| RowError::results_timeout(query, self.wait_timeout))?;

        let url = page
            .url()
            .await
            .map_err(|e| RowError::interaction_failed(e))?
            .unwrap_or_default();

        info!("✓ 搜索完成: {}", query);
        Ok(url)
    }

    /// 点击"下一页"并等待页面加载
    ///
    /// 失败上抛给翻页循环，由它停止本行的后续翻页。
    pub async fn go_to_next_page(&self, page: &Page, page_num: usize) -> RowResult<()> {
        let link = dom::wait_for_link_with_text(
            page,
            PAGINATION_LINK_SELECTOR,
            NEXT_PAGE_LINK_TEXT,
            self.wait_timeout,
        )
        .await
        .ok_or_else(|| RowError::control_not_found(page_num, self.wait_timeout))?;

        link.click()
            .await
            .map_err(|e| RowError::click_failed(page_num, e))?;

        // 等待页面加载
        sleep(self.settle_delay).await;
        Ok(())
    }
}
