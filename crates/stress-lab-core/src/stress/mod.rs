pub mod catalog;
pub mod impact;
pub mod summary;

pub use catalog::{lookup, Scenario, ScenarioKind};
pub use impact::{compute_impacts, AssetImpact};
pub use summary::{summarize, BestAsset, PortfolioSummary, WorstAsset};
