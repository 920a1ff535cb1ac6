use search_archiver::logger;
use search_archiver::{App, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用；致命错误记录后正常退出（不区分退出码）
    match run(config).await {
        Ok(()) => info!("✅ 所有搜索结果已成功导出"),
        Err(e) => error!("❌ 执行主程序时出错: {:#}", e),
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let app = App::initialize(config).await?;
    app.run().await?;
    Ok(())
}
