use url::form_urlencoded;

/// 页面URL参数 (hash路由, 查询串位于 # 之后)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewParams {
    pub replenish_preview_order_no: Option<String>,
    pub preview_no: Option<String>,
    pub replenish_list_no: Option<String>,
    pub document_information_page_no: u32,
}

impl PreviewParams {
    /// 从页面URL解析参数
    ///
    /// 缺失的单号原样保留为 None, 由服务端校验;
    /// documentInformationPageNo 缺失或非法时取 1
    pub fn from_url(url: &str) -> Self {
        let hash_part = url.splitn(2, '#').nth(1).unwrap_or("");
        let query = hash_part.splitn(2, '?').nth(1).unwrap_or("");

        let mut order_no = None;
        let mut preview_no = None;
        let mut list_no = None;
        let mut page_no = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "replenishPreviewOrderNo" => &mut order_no,
                "previewNo" => &mut preview_no,
                "replenishListNo" => &mut list_no,
                "documentInformationPageNo" => &mut page_no,
                _ => continue,
            };
            // 同名参数取第一个
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            replenish_preview_order_no: order_no,
            preview_no,
            replenish_list_no: list_no,
            document_information_page_no: page_no
                .and_then(|v: String| v.parse::<u32>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(1),
        }
    }
}
