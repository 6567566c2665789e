//! # Salient Analytics Engine
//!
//! This crate derives every named sales aggregate from a loaded set of
//! transactions. It is the computational heart of the report.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate knows nothing about files, terminals, or
//!   configuration. It depends only on `core-types` and turns a slice of
//!   `Transaction`s into a `SalesReport` value.
//! - **Stateless Calculation:** The `AnalyticsEngine` holds no state
//!   between calls; identical input always produces an identical report.
//!   Undefined quantities (a mean over zero rows, a growth rate against a
//!   zero month) are `None`, never a silent zero.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The struct that contains the calculation logic.
//! - `SalesReport`: The standardized struct holding all 18 aggregates.
//! - `ReportEnvelope`: A report plus the run id and provenance stamp.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use report::{
    AgeBracketRevenue, CategoryCount, CategoryRevenue, CountryCategoryRank, CountryClv,
    CountryRevenue, CountryShare, CustomerOrders, CustomerSpend, DailyAverage, MonthlyGrowth,
    MonthlyRevenue, PaymentMethodRevenue, PeakDay, ReportEnvelope, SalesReport,
};
