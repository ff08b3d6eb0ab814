use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub page: PageConfig,
}

/// 后端接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub app_key: String,
}

/// 页面匹配与分页配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// 目标页面URL路径特征, 不包含该片段的URL一律忽略
    pub path_marker: String,
    /// 固定分页大小
    pub page_size: u32,
    /// 首次加载后延迟多少秒开始统计
    pub initial_delay_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: "https://qnh.meituan.com".to_string(),
                app_key: "fe_recofesaascrm".to_string(),
            },
            page: PageConfig {
                path_marker: "purchase/replenish-dispatch/order-splitting-preview".to_string(),
                page_size: 10,
                initial_delay_secs: 3,
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let default = AppConfig::default();
        Self {
            endpoint: EndpointConfig {
                base_url: std::env::var("REPLENISH_BASE_URL")
                    .unwrap_or(default.endpoint.base_url),
                app_key: std::env::var("REPLENISH_APP_KEY")
                    .unwrap_or(default.endpoint.app_key),
            },
            page: PageConfig {
                path_marker: std::env::var("REPLENISH_PATH_MARKER")
                    .unwrap_or(default.page.path_marker),
                page_size: std::env::var("REPLENISH_PAGE_SIZE")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(default.page.page_size),
                initial_delay_secs: std::env::var("REPLENISH_INITIAL_DELAY_SECS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(default.page.initial_delay_secs),
            },
        }
    }
}
