//! Session-scoped application state and the views rendered from it.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use pescaderia_catalog::{
    Catalog, CatalogQuery, ExpirationStatus, ProductForm, ProductRow, format_display_date, sample_catalog,
};
use pescaderia_core::{DomainResult, Entity, ProductId};
use pescaderia_reporting::{ChartPoint, SalesReport, SummaryRow};
use pescaderia_session::{InMemorySessionStorage, NavLink, Route, Session, SessionStorage};

use crate::config::AppConfig;

/// Product table row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRowView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub ingress_date: String,
    pub expiration_date: String,
    pub status: ExpirationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

impl From<&ProductRow> for ProductRowView {
    fn from(row: &ProductRow) -> Self {
        let p = &row.product;
        Self {
            id: p.id(),
            name: p.name().to_string(),
            quantity: p.quantity(),
            price: p.price().to_string(),
            ingress_date: format_display_date(p.ingress_date()),
            expiration_date: format_display_date(p.expiration_date()),
            status: row.status,
            warning: row.status.warning(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Session>,
    pub nav: [NavLink; 2],
    pub today: NaiveDate,
    pub query: CatalogQuery,
    pub rows: Vec<ProductRowView>,
    /// Rows that are expired or close to expiring.
    pub attention: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub total_quantity: u64,
    pub total_revenue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_seller: Option<String>,
    pub band: StockBand,
    pub summary: Vec<SummaryRow>,
    pub chart: Vec<ChartPoint>,
    pub advice: Vec<String>,
}

/// Factors of the mean quantity outside which stock should change.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StockBand {
    pub reduce_below: f64,
    pub increase_above: f64,
}

/// One user's working state: the current catalog snapshot, the static report,
/// and the session storage.
pub struct App {
    config: AppConfig,
    catalog: Catalog,
    report: SalesReport,
    storage: Arc<dyn SessionStorage>,
}

impl App {
    /// Seeded app; opens a session when the config names a user.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        Self::with_storage(config, Arc::new(InMemorySessionStorage::new()))
    }

    pub fn with_storage(config: AppConfig, storage: Arc<dyn SessionStorage>) -> anyhow::Result<Self> {
        if let Some(user) = config.user.as_deref() {
            Session::login(&*storage, user)?;
        }
        Ok(Self {
            report: SalesReport::monthly().with_policy(config.recommendation.clone()),
            catalog: sample_catalog(),
            config,
            storage,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> Option<Session> {
        Session::load(&*self.storage)
    }

    pub fn logout(&self) -> Route {
        Session::logout(&*self.storage)
    }

    /// Add a product from a submitted form; returns its new id.
    pub fn submit_new(&mut self, form: ProductForm) -> DomainResult<ProductId> {
        let draft = form.into_draft()?;
        let id = self.catalog.next_id();
        self.catalog = self.catalog.add(draft, self.config.today());
        Ok(id)
    }

    /// Apply an edit form. A missing id leaves the catalog as it was.
    pub fn submit_edit(&mut self, id: ProductId, form: ProductForm) -> DomainResult<()> {
        let draft = form.into_draft()?;
        self.catalog = self.catalog.update(id, draft);
        Ok(())
    }

    pub fn delete(&mut self, id: ProductId) {
        self.catalog = self.catalog.remove(id);
    }

    /// Pre-filled edit form for `id`.
    pub fn edit_form(&self, id: ProductId) -> Option<ProductForm> {
        self.catalog.get(id).map(ProductForm::from_product)
    }

    pub fn dashboard(&self, query: &CatalogQuery) -> DashboardView {
        let rows = query.rows(&self.catalog, self.config.now, &self.config.expiration_policy());
        let attention = rows.iter().filter(|r| r.status.needs_attention()).count();
        tracing::debug!(rows = rows.len(), attention, search = %query.search, "dashboard rendered");

        DashboardView {
            user: self.session(),
            nav: Route::nav_links(),
            today: self.config.today(),
            query: query.clone(),
            rows: rows.iter().map(ProductRowView::from).collect(),
            attention,
        }
    }

    pub fn report(&self, show_all: bool) -> ReportView {
        let totals = self.report.totals();
        let n = self.config.summary_size;
        let policy = self.report.policy();
        ReportView {
            total_quantity: totals.quantity,
            total_revenue: totals.revenue.to_string(),
            best_seller: self.report.best_seller().map(|r| r.name.clone()),
            band: StockBand {
                reduce_below: policy.lower(),
                increase_above: policy.upper(),
            },
            summary: self.report.summary(show_all, n),
            chart: self.report.chart_series(n),
            advice: self.report.advice(),
        }
    }
}
