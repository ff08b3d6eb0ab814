use crate::api;
use crate::config::AppConfig;
use crate::models::{PreviewParams, ReplenishTotals, SupplierSummary};
use crate::service::aggregator;
use crate::service::panel::SummaryPanel;
use crate::service::renderer;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// 补货预览汇总服务
///
/// 上一次处理的URL与运行序号都是实例状态;
/// 序号用于丢弃过期运行的渲染, 后发起的运行覆盖先发起的
pub struct ReplenishPreviewService {
    config: AppConfig,
    client: Client,
    panel: Arc<dyn SummaryPanel>,
    last_url: Mutex<Option<String>>,
    run_seq: AtomicU64,
}

impl ReplenishPreviewService {
    pub fn new(config: AppConfig, panel: Arc<dyn SummaryPanel>) -> Result<Self, reqwest::Error> {
        let client = api::create_client()?;
        Ok(Self {
            config,
            client,
            panel,
            last_url: Mutex::new(None),
            run_seq: AtomicU64::new(0),
        })
    }

    /// URL是否属于补货单预览页面
    pub fn url_matched(&self, url: &str) -> bool {
        url.contains(&self.config.page.path_marker)
    }

    /// 页面首次加载: 命中目标页面时延迟固定秒数后开始统计
    pub async fn handle_initial_load(&self, url: &str) {
        if !self.url_matched(url) {
            return;
        }
        tracing::info!(
            "页面加载完成, {} 秒后开始统计",
            self.config.page.initial_delay_secs
        );
        tokio::time::sleep(Duration::from_secs(self.config.page.initial_delay_secs)).await;
        self.run(url).await;
    }

    /// URL变化通知: 与上次记录不同且命中目标页面时立即重新统计
    pub async fn handle_url_change(&self, url: &str) {
        let changed = {
            let mut last = self.last_url.lock().unwrap();
            if last.as_deref() == Some(url) {
                false
            } else {
                *last = Some(url.to_string());
                true
            }
        };
        if changed && self.url_matched(url) {
            tracing::info!("URL发生变化, 重新加载数据");
            self.run(url).await;
        }
    }

    /// 订阅URL变化通知通道, 通道关闭后返回
    ///
    /// 每条通知单独起任务处理, 长耗时运行不阻塞通道; 交错由运行序号裁决
    pub async fn watch(self: Arc<Self>, mut rx: mpsc::Receiver<String>) {
        while let Some(url) = rx.recv().await {
            let service = Arc::clone(&self);
            tokio::spawn(async move {
                service.handle_url_change(&url).await;
            });
        }
    }

    /// 执行一轮完整统计: 占位提示 → 解析参数 → 查SKU种数 → 顺序拉页 → 汇总 → 渲染
    pub async fn run(&self, url: &str) {
        let seq = self.run_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("第 {} 轮统计开始", seq);
        self.show_panel(seq, renderer::LOADING_MARKUP);

        match self.collect_and_summarize(url).await {
            Ok((summaries, totals)) => {
                tracing::info!("供应商数据汇总完成, 共 {} 家供应商", summaries.len());
                let markup = renderer::render_summary(&summaries, &totals);
                self.show_panel(seq, &markup);
            }
            Err(e) => {
                tracing::error!("第 {} 轮统计失败: {}", seq, e);
                self.show_panel(seq, renderer::LOAD_FAILED_MARKUP);
            }
        }
    }

    /// 顺序拉取全部分页并汇总; 任何一页失败都中断, 不渲染部分结果
    async fn collect_and_summarize(
        &self,
        url: &str,
    ) -> Result<(Vec<SupplierSummary>, ReplenishTotals), Box<dyn std::error::Error + Send + Sync>>
    {
        let params = PreviewParams::from_url(url);
        tracing::info!("URL参数解析结果: {:?}", params);

        let page_size = self.config.page.page_size;
        let sku_count =
            api::lookup_sku_count(&self.client, &self.config.endpoint, &params, page_size).await;
        let total_pages = sku_count.div_ceil(page_size);
        tracing::info!("需要请求 {} 页数据", total_pages);

        let mut all_items = Vec::new();
        for page_no in 1..=total_pages {
            let items = api::fetch_sku_page(
                &self.client,
                &self.config.endpoint,
                page_no,
                page_size,
                params.replenish_preview_order_no.as_deref(),
                params.preview_no.as_deref(),
            )
            .await?;
            all_items.extend(items);
            tracing::info!(
                "第 {} 页数据合并完成, 当前明细条数: {}",
                page_no,
                all_items.len()
            );
        }

        let summaries = aggregator::summarize_supplier_data(&all_items);
        let totals = aggregator::compute_totals(&summaries);
        Ok((summaries, totals))
    }

    /// 过期运行不再写面板; 目标区域不存在时只记录日志
    fn show_panel(&self, seq: u64, markup: &str) {
        if self.run_seq.load(Ordering::SeqCst) != seq {
            tracing::info!("第 {} 轮统计已过期, 丢弃渲染结果", seq);
            return;
        }
        if !self.panel.replace_content(markup) {
            tracing::warn!("未找到目标显示区域");
        }
    }
}
