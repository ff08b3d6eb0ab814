use crate::models::{ReplenishSkuItem, ReplenishTotals, SupplierSummary};
use indexmap::IndexMap;

/// 解析十进制字符串, 解析失败按 0 计
fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// 按供应商汇总补货明细
///
/// 分组键为 supplierId-supplierName 拼接串; 供应类型取该组首条明细,
/// 之后不再更新。输出按供应类型升序 (缺失按 0), 同类型保持首次出现顺序
pub fn summarize_supplier_data(items: &[ReplenishSkuItem]) -> Vec<SupplierSummary> {
    let mut supplier_map: IndexMap<String, SupplierSummary> = IndexMap::new();

    for item in items {
        let price = parse_decimal(&item.replenish_total_price);
        let quantity = parse_decimal(&item.replenish_plan_quantity);
        let key = format!("{}-{}", item.supplier_id, item.supplier_name);

        match supplier_map.get_mut(&key) {
            Some(summary) => {
                summary.total_price += price;
                summary.total_quantity += quantity;
                summary.sku_count += 1;
            }
            None => {
                supplier_map.insert(
                    key,
                    SupplierSummary {
                        supplier_id: item.supplier_id,
                        supplier_name: item.supplier_name.clone(),
                        supply_type: item.supply_type,
                        total_price: price,
                        total_quantity: quantity,
                        sku_count: 1,
                    },
                );
            }
        }
    }

    let mut summaries: Vec<SupplierSummary> = supplier_map.into_values().collect();
    // 稳定排序, 同类型并列时维持插入顺序
    summaries.sort_by_key(|s| s.supply_type.unwrap_or(0));
    summaries
}

/// 计算全部供应商合计
pub fn compute_totals(summaries: &[SupplierSummary]) -> ReplenishTotals {
    summaries
        .iter()
        .fold(ReplenishTotals::default(), |mut acc, s| {
            acc.total_price += s.total_price;
            acc.total_quantity += s.total_quantity;
            acc.total_sku_count += s.sku_count;
            acc
        })
}
