//! # basket-report: PDF Summary Report
//!
//! Renders a [`BasketSummary`](basket_core::BasketSummary) as a printable A4
//! document: header, statistics panel, line-item table with a total row, the
//! top-three ranking and a page footer.
//!
//! ## Module Organization
//! ```text
//! basket_report/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── report.rs   ◄─── PdfReport: section layout
//! ├── pdf.rs      ◄─── Canvas over lopdf operations + document writer
//! ├── text.rs     ◄─── WinAnsi encoding, width approximation, wrapping
//! └── error.rs    ◄─── ReportError
//! ```
//!
//! The crate holds no state and takes no locks; callers snapshot the basket
//! first and render outside any critical section.

pub mod error;
mod pdf;
pub mod report;
mod text;

pub use error::{ReportError, ReportResult};
pub use report::{PdfReport, ReportOptions, REPORT_FILE_NAME};
