//! 元素等待原语
//!
//! chromiumoxide 没有内置的显式等待，这里用轮询实现有界等待：
//! 找到元素立即返回，超过截止时间返回 None，由调用方决定错误语义。

use chromiumoxide::element::Element;
use chromiumoxide::Page;
use tokio::time::{sleep, Duration, Instant};

/// 轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 在超时时间内轮询等待元素出现
pub async fn wait_for_element(page: &Page, selector: &str, timeout: Duration) -> Option<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Some(element);
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(POLL_INTERVAL).await;
    }
}

/// 在超时时间内轮询等待文本包含 `text` 的链接出现
///
/// CSS 选择器无法按链接文本定位，翻页控件需要在候选集合里按文本过滤。
pub async fn wait_for_link_with_text(
    page: &Page,
    selector: &str,
    text: &str,
    timeout: Duration,
) -> Option<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(elements) = page.find_elements(selector).await {
            for element in elements {
                if let Ok(Some(t)) = element.inner_text().await {
                    if t.contains(text) {
                        return Some(element);
                    }
                }
            }
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(POLL_INTERVAL).await;
    }
}
