use crate::config::EndpointConfig;
use crate::models::{OrderListResponse, PreviewParams, ReplenishSkuItem, SkuListResponse};
use reqwest::header::ACCEPT;
use reqwest::Client;

/// 接口路径与防刷查询参数, 与页面自身的请求保持一致
const ORDER_LIST_PATH: &str = "/api/v1/supplychain/replenish-preorder/order-list";
const SKU_LIST_PATH: &str = "/api/v1/supplychain/replenish-preorder/sku-list";
const CSEC_QUERY: &str = "yodaReady=h5&csecplatform=4&csecversion=3.1.0";

/// 应用标识请求头
const APP_KEY_HEADER: &str = "M-APPKEY";

/// 查询订单列表, 返回目标子单的SKU种数
///
/// 任何失败(网络/解析/未命中)都按 0 处理并记录日志, 不中断主流程;
/// 0 意味着后续零页拉取、空汇总
pub async fn lookup_sku_count(
    client: &Client,
    endpoint: &EndpointConfig,
    params: &PreviewParams,
    page_size: u32,
) -> u32 {
    match order_list(client, endpoint, params, page_size).await {
        Ok(resp) => match resp.sku_count_for(params.replenish_preview_order_no.as_deref()) {
            Some(count) => {
                tracing::info!("找到目标订单的SKU种数: {}", count);
                count
            }
            None => {
                tracing::warn!("未找到匹配的子订单, SKU种数按 0 处理");
                0
            }
        },
        Err(e) => {
            tracing::warn!("订单列表请求失败, SKU种数按 0 处理: {}", e);
            0
        }
    }
}

/// 请求订单列表接口
async fn order_list(
    client: &Client,
    endpoint: &EndpointConfig,
    params: &PreviewParams,
    page_size: u32,
) -> Result<OrderListResponse, reqwest::Error> {
    let url = format!("{}{}?{}", endpoint.base_url, ORDER_LIST_PATH, CSEC_QUERY);
    let body = serde_json::json!({
        "replenishListNo": params.replenish_list_no,
        "previewNo": params.preview_no,
        "replenishMode": 1,
        "pageNo": params.document_information_page_no,
        "pageSize": page_size,
    });

    client
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(APP_KEY_HEADER, &endpoint.app_key)
        .json(&body)
        .send()
        .await?
        // 不校验HTTP状态码, 响应体能按JSON解出即算成功
        .json::<OrderListResponse>()
        .await
}

/// 拉取一页SKU明细
///
/// 失败向上传播, 中断本轮统计; data/list 缺失按空页处理
pub async fn fetch_sku_page(
    client: &Client,
    endpoint: &EndpointConfig,
    page_no: u32,
    page_size: u32,
    sub_preview_no: Option<&str>,
    preview_no: Option<&str>,
) -> Result<Vec<ReplenishSkuItem>, reqwest::Error> {
    tracing::info!("开始请求第 {} 页数据", page_no);
    let url = format!("{}{}?{}", endpoint.base_url, SKU_LIST_PATH, CSEC_QUERY);
    let body = serde_json::json!({
        "pageNo": page_no,
        "pageSize": page_size,
        "subPreviewNo": sub_preview_no,
        "previewNo": preview_no,
    });

    let resp = client
        .post(&url)
        .header(ACCEPT, "application/json")
        .header(APP_KEY_HEADER, &endpoint.app_key)
        .json(&body)
        .send()
        .await?
        .json::<SkuListResponse>()
        .await?;

    Ok(resp.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_client;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(base_url: String) -> EndpointConfig {
        EndpointConfig { base_url, app_key: "test-app-key".to_string() }
    }

    fn params() -> PreviewParams {
        PreviewParams {
            replenish_preview_order_no: Some("RP001".to_string()),
            preview_no: Some("P001".to_string()),
            replenish_list_no: Some("L001".to_string()),
            document_information_page_no: 1,
        }
    }

    #[tokio::test]
    async fn lookup_returns_sku_count_of_matching_sub_order() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/order-list"))
            .and(header("M-APPKEY", "test-app-key"))
            .and(body_json(json!({
                "replenishListNo": "L001",
                "previewNo": "P001",
                "replenishMode": 1,
                "pageNo": 1,
                "pageSize": 10
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "result": { "list": [
                    { "subPreviewNo": "RP000", "skuCount": 99 },
                    { "subPreviewNo": "RP001", "skuCount": 23 }
                ] } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let count = lookup_sku_count(&client, &endpoint(server.uri()), &params(), 10).await;

        assert_eq!(count, 23);
    }

    #[tokio::test]
    async fn lookup_returns_zero_when_sub_order_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/order-list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "result": { "list": [
                    { "subPreviewNo": "RP999", "skuCount": 7 }
                ] } }
            })))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let count = lookup_sku_count(&client, &endpoint(server.uri()), &params(), 10).await;

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn lookup_swallows_decode_failure_as_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/order-list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let count = lookup_sku_count(&client, &endpoint(server.uri()), &params(), 10).await;

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn lookup_swallows_connection_failure_as_zero() {
        // 无人监听的端口, 连接直接被拒绝
        let client = create_client().unwrap();
        let count = lookup_sku_count(
            &client,
            &endpoint("http://127.0.0.1:1".to_string()),
            &params(),
            10,
        )
        .await;

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn fetch_sku_page_returns_items() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/sku-list"))
            .and(header("M-APPKEY", "test-app-key"))
            .and(body_json(json!({
                "pageNo": 2,
                "pageSize": 10,
                "subPreviewNo": "RP001",
                "previewNo": "P001"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "list": [
                    {
                        "supplierId": 1,
                        "supplierName": "S1",
                        "supplyType": 2,
                        "replenishTotalPrice": "10.5",
                        "replenishPlanQuantity": "3"
                    }
                ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let items = fetch_sku_page(
            &client,
            &endpoint(server.uri()),
            2,
            10,
            Some("RP001"),
            Some("P001"),
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].supplier_name, "S1");
        assert_eq!(items[0].replenish_total_price, "10.5");
    }

    #[tokio::test]
    async fn fetch_sku_page_treats_missing_data_as_empty_page() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/sku-list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let items =
            fetch_sku_page(&client, &endpoint(server.uri()), 1, 10, Some("RP001"), Some("P001"))
                .await
                .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn fetch_sku_page_propagates_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/sku-list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let result =
            fetch_sku_page(&client, &endpoint(server.uri()), 1, 10, Some("RP001"), Some("P001"))
                .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_sku_page_ignores_http_status() {
        // 状态码不参与判定, 只要响应体是合法JSON就返回其中的列表
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/supplychain/replenish-preorder/sku-list"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "data": { "list": [] }
            })))
            .mount(&server)
            .await;

        let client = create_client().unwrap();
        let items =
            fetch_sku_page(&client, &endpoint(server.uri()), 1, 10, Some("RP001"), Some("P001"))
                .await
                .unwrap();

        assert!(items.is_empty());
    }
}
