use std::path::Path;

use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

/// 启动无头浏览器并创建空白页面
///
/// `chrome_path` 为 None 时由 chromiumoxide 自动探测可执行文件。
pub async fn launch_headless_browser(chrome_path: Option<&str>) -> Result<(Browser, Page)> {
    info!("🚀 启动无头浏览器...");

    // 配置无头浏览器
    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",           // 无头模式下禁用 GPU，避免图形渲染问题
        "--no-sandbox",            // 禁用沙盒，防止容器环境中的权限问题导致崩溃
        "--disable-dev-shm-usage", // 禁用 /dev/shm，防止共享内存不足
    ]);
    if let Some(path) = chrome_path {
        builder = builder.chrome_executable(Path::new(path));
    }
    let config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        anyhow::anyhow!("配置无头浏览器失败: {}", e)
    })?;

    // 启动浏览器
    let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        anyhow::anyhow!("启动无头浏览器失败: {}", e)
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    // 创建空白页面；失败时先尽力关闭半开的会话再上抛
    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(e) => {
            error!("创建页面失败: {}", e);
            let _ = browser.close().await;
            return Err(anyhow::anyhow!("创建页面失败: {}", e));
        }
    };

    info!("✅ 无头浏览器已就绪");
    Ok((browser, page))
}
