//! Report adapters. Implement ReportRenderer.

pub mod pdf;

pub use pdf::PdfReportRenderer;
