pub mod aggregator;
pub mod orchestrator;
pub mod panel;
pub mod renderer;

pub use orchestrator::ReplenishPreviewService;
pub use panel::{MemoryPanel, SummaryPanel};
