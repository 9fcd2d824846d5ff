//! Monthly sales report.
//!
//! Read-only aggregation over a fixed sales dataset: totals, rankings, and
//! rule-based stock recommendations. Nothing here mutates the dataset.

pub mod dataset;
pub mod recommendation;
pub mod report;

pub use dataset::monthly_sales;
pub use recommendation::{Recommendation, RecommendationPolicy, RecommendationPolicyError};
pub use report::{ChartPoint, ReportTotals, SalesRecord, SalesReport, SummaryRow};
