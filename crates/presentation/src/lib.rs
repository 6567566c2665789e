//! # Salient Presentation Crate
//!
//! This crate turns a computed `SalesReport` into something a person can
//! read. The analytics side never formats or prints anything; it hands a
//! report to this crate and this crate decides how it looks.
//!
//! ## Architectural Principles
//!
//! - **Surface Abstraction:** Everything is rendered against the small
//!   `Surface` trait (sections, metrics, tables, charts). The report layout
//!   is written once in `views` and works on any surface implementation.
//! - **Formatting at the Edge:** Values stay numeric until the moment they
//!   are displayed. Currency symbols, thousands separators, and "undefined"
//!   markers exist only here.
//!
//! ## Public API
//!
//! - `render_report`: Lays the full report out on a surface.
//! - `Surface`, `ChartKind`, `ChartPoint`: The rendering contract.
//! - `TerminalSurface`: The comfy-table backed terminal implementation.

// Declare the modules that constitute this crate.
pub mod format;
pub mod surface;
pub mod terminal;
pub mod views;

// Re-export the key components to create a clean, public-facing API.
pub use surface::{ChartKind, ChartPoint, Surface};
pub use terminal::TerminalSurface;
pub use views::render_report;
