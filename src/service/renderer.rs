use crate::models::{ReplenishTotals, SupplierSummary};

/// 统计进行中的占位提示
pub const LOADING_MARKUP: &str = "<strong> 供应商数据计算中... 请稍等 </strong>";

/// 统计失败时的固定提示
pub const LOAD_FAILED_MARKUP: &str = "数据加载失败，请刷新页面重试";

/// 生成供应商汇总展示内容
///
/// 每个供应商一行, 末尾附全部供应商合计; 金额保留两位小数
pub fn render_summary(summaries: &[SupplierSummary], totals: &ReplenishTotals) -> String {
    let supplier_lines = summaries
        .iter()
        .map(|s| {
            format!(
                "供应类型: {} ,  供应商ID: {} ,  供应商名称: {} ,  补货SKU种数: {} ,  总补货数(补货箱规): {} ,  总金额: ¥{:.2}",
                s.supply_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "未知".to_string()),
                s.supplier_id,
                s.supplier_name,
                s.sku_count,
                s.total_quantity,
                s.total_price,
            )
        })
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        "<div style=\"line-height: 1.5; font-size: 14px;\">\
<div style=\"margin-top: 5px;\"><strong> 展示供应商的补货金额和件数 </strong></div>\
<br>{}<div style=\"margin-top: 5px;\">\
<strong>总金额: ¥{:.2} ,  SKU总种数: {} ,  总补货数: {}</strong>\
</div></div>",
        supplier_lines, totals.total_price, totals.total_sku_count, totals.total_quantity,
    )
}
