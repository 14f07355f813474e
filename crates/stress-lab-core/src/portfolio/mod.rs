pub mod holdings;

pub use holdings::{default_portfolio, portfolio_warnings, total_allocation, AssetHolding};
