pub mod error;
pub mod portfolio;
pub mod types;

#[cfg(feature = "stress")]
pub mod stress;

#[cfg(feature = "recovery")]
pub mod recovery;

#[cfg(all(feature = "stress", feature = "recovery"))]
pub mod analysis;

pub use error::StressLabError;
pub use types::*;

/// Standard result type for all stress-lab operations
pub type StressLabResult<T> = Result<T, StressLabError>;
