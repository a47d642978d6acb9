//! Domain models for the commission engine

pub mod band;
pub mod result;

// Re-exports
pub use band::Band;
pub use result::{BandResult, CommissionResult};
