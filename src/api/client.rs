use reqwest::Client;

/// 创建HTTP客户端
///
/// 不设置超时: 卡住的请求只拖住所在的那一轮统计, 不影响后续轮次
pub fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}
