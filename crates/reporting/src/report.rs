use serde::{Deserialize, Serialize};

use pescaderia_core::Price;

use crate::dataset::monthly_sales;
use crate::recommendation::{Recommendation, RecommendationPolicy};

/// One product's sales for the month. Not linked to catalog identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub name: String,
    pub quantity: u32,
    pub revenue: Price,
}

impl SalesRecord {
    pub fn new(name: impl Into<String>, quantity: u32, revenue: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            revenue,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub quantity: u64,
    pub revenue: Price,
}

/// Summary table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(flatten)]
    pub record: SalesRecord,
    pub recommendation: Recommendation,
}

/// Bar chart datum (units sold on one axis, revenue on the other).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub quantity: u32,
    pub revenue: f64,
}

/// Aggregations over an immutable sales dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    records: Vec<SalesRecord>,
    policy: RecommendationPolicy,
}

impl SalesReport {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            policy: RecommendationPolicy::default(),
        }
    }

    /// Report over the built-in monthly dataset.
    pub fn monthly() -> Self {
        Self::new(monthly_sales())
    }

    pub fn with_policy(mut self, policy: RecommendationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    pub fn totals(&self) -> ReportTotals {
        ReportTotals {
            quantity: self.records.iter().map(|r| u64::from(r.quantity)).sum(),
            revenue: self.records.iter().map(|r| r.revenue).sum(),
        }
    }

    /// Mean units sold per record, `None` for an empty dataset.
    pub fn mean_quantity(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.totals().quantity as f64 / self.records.len() as f64)
    }

    /// Records by quantity, best seller first. Ties keep dataset order.
    pub fn ranked(&self) -> Vec<&SalesRecord> {
        let mut ranked: Vec<&SalesRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked
    }

    /// The `n` best sellers, best first.
    pub fn top(&self, n: usize) -> Vec<&SalesRecord> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The `n` worst sellers, worst first.
    pub fn bottom(&self, n: usize) -> Vec<&SalesRecord> {
        let ranked = self.ranked();
        let start = ranked.len().saturating_sub(n);
        ranked[start..].iter().rev().copied().collect()
    }

    pub fn best_seller(&self) -> Option<&SalesRecord> {
        self.ranked().into_iter().next()
    }

    /// Stock recommendation for `record` against this dataset's mean.
    ///
    /// An empty dataset has no baseline, so everything is maintained.
    pub fn recommend(&self, record: &SalesRecord) -> Recommendation {
        match self.mean_quantity() {
            Some(mean) => self.policy.recommend(record.quantity, mean),
            None => Recommendation::MaintainStock,
        }
    }

    /// Summary table: every record when `show_all`, otherwise the `n` best
    /// followed by the `n` worst. Datasets too small to split are shown ranked.
    pub fn summary(&self, show_all: bool, n: usize) -> Vec<SummaryRow> {
        let records = if show_all || self.records.len() < n.saturating_mul(2) {
            self.ranked()
        } else {
            let mut rows = self.top(n);
            rows.extend(self.bottom(n));
            rows
        };
        records
            .into_iter()
            .map(|r| SummaryRow {
                record: r.clone(),
                recommendation: self.recommend(r),
            })
            .collect()
    }

    pub fn chart_series(&self, n: usize) -> Vec<ChartPoint> {
        self.top(n)
            .into_iter()
            .map(|r| ChartPoint {
                name: r.name.clone(),
                quantity: r.quantity,
                revenue: r.revenue.as_f64(),
            })
            .collect()
    }

    /// Plain-language plan for next month.
    pub fn advice(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);

        let best = names(&self.top(2));
        if !best.is_empty() {
            lines.push(format!("Increase stock of {best} to meet high demand."));
        }

        let worst = names(&self.bottom(2));
        if self.records.len() > 2 && !worst.is_empty() {
            lines.push(format!("Consider special promotions for {worst} to boost sales."));
        }

        lines.push("Keep a balanced stock of mid-range products.".to_string());
        if !best.is_empty() {
            lines.push("Evaluate introducing new varieties of the best-selling products.".to_string());
        }
        lines
    }
}

fn names(records: &[&SalesRecord]) -> String {
    records
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}
