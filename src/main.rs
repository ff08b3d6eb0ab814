use replenish_preview_rust::service::SummaryPanel;
use replenish_preview_rust::{AppConfig, ReplenishPreviewService};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

/// 标准输出面板: 渲染结果当作页面内容打印
struct StdoutPanel;

impl SummaryPanel for StdoutPanel {
    fn replace_content(&self, markup: &str) -> bool {
        println!("{}", markup);
        true
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting with config: {:?}", config);

    let service = Arc::new(ReplenishPreviewService::new(config, Arc::new(StdoutPanel))?);

    // 首个命令行参数作为初始页面URL, 之后从标准输入逐行接收URL变化事件
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(read_url_events(tx));

    let initial = std::env::args().nth(1).map(|url| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.handle_initial_load(&url).await })
    });

    service.watch(rx).await;

    // 标准输入关闭后等首轮统计收尾
    if let Some(handle) = initial {
        let _ = handle.await;
    }
    Ok(())
}

/// 从标准输入逐行读取URL变化事件
async fn read_url_events(tx: mpsc::Sender<String>) {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let url = line.trim().to_string();
        if url.is_empty() {
            continue;
        }
        if tx.send(url).await.is_err() {
            break;
        }
    }
}
