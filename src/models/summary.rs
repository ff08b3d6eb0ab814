use serde::Serialize;

/// 单个供应商的补货汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSummary {
    pub supplier_id: i64,
    pub supplier_name: String,
    /// 取该供应商第一条明细的供应类型, 之后不再更新
    pub supply_type: Option<i32>,
    pub total_price: f64,
    pub total_quantity: f64,
    pub sku_count: u32,
}

/// 全部供应商合计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishTotals {
    pub total_price: f64,
    pub total_quantity: f64,
    pub total_sku_count: u32,
}
