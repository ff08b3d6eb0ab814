pub mod params;
pub mod sku;
pub mod summary;

pub use params::PreviewParams;
pub use sku::{OrderListResponse, ReplenishSkuItem, SkuListResponse};
pub use summary::{ReplenishTotals, SupplierSummary};
