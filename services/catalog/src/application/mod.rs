//! Application layer

pub mod dto;
pub mod metrics_service;
pub mod outcome;
pub mod product_service;

#[cfg(test)]
mod mocks;

pub use dto::{ProductDraft, ProductInput};
pub use metrics_service::{MetricsOutcome, MetricsService, ProductMetrics};
pub use outcome::ReadOutcome;
pub use product_service::{CategoryPolicy, ProductService};
