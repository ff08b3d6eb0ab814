use serde::{Deserialize, Serialize};

/// 补货SKU明细行 (sku-list 接口)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishSkuItem {
    pub supplier_id: i64,
    pub supplier_name: String,
    /// 供应类型, 服务端可能不返回
    #[serde(default)]
    pub supply_type: Option<i32>,
    /// 补货总金额, 十进制字符串
    #[serde(default)]
    pub replenish_total_price: String,
    /// 补货计划数量 (补货箱规), 十进制字符串
    #[serde(default)]
    pub replenish_plan_quantity: String,
}

/// sku-list 接口响应, data/list 均可能缺失
#[derive(Debug, Deserialize)]
pub struct SkuListResponse {
    #[serde(default)]
    pub data: Option<SkuListData>,
}

#[derive(Debug, Deserialize)]
pub struct SkuListData {
    #[serde(default)]
    pub list: Vec<ReplenishSkuItem>,
}

impl SkuListResponse {
    /// 取出明细列表, 任何一层缺失都按空页处理
    pub fn into_items(self) -> Vec<ReplenishSkuItem> {
        self.data.map(|d| d.list).unwrap_or_default()
    }
}

/// order-list 接口响应: data.result.list 逐层可缺失
#[derive(Debug, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub data: Option<OrderListData>,
}

#[derive(Debug, Deserialize)]
pub struct OrderListData {
    #[serde(default)]
    pub result: Option<OrderListResult>,
}

#[derive(Debug, Deserialize)]
pub struct OrderListResult {
    #[serde(default)]
    pub list: Vec<OrderListEntry>,
}

/// 子订单条目, 用于按子单号匹配SKU种数
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListEntry {
    #[serde(default)]
    pub sub_preview_no: Option<String>,
    #[serde(default)]
    pub sku_count: u32,
}

impl OrderListResponse {
    /// 在返回列表中查找目标子单的SKU种数, 未找到返回 None
    pub fn sku_count_for(&self, sub_preview_no: Option<&str>) -> Option<u32> {
        let target = sub_preview_no?;
        self.data
            .as_ref()
            .and_then(|d| d.result.as_ref())
            .and_then(|r| {
                r.list
                    .iter()
                    .find(|entry| entry.sub_preview_no.as_deref() == Some(target))
            })
            .map(|entry| entry.sku_count)
    }
}
