//! Command-line interface of the `pescaderia` binary.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Value as JsonValue, json};

use pescaderia_catalog::{CatalogQuery, SortDirection, SortKey};
use pescaderia_session::Route;

use crate::views::App;

/// Fish shop inventory and monthly sales report, printed as JSON
#[derive(Debug, Parser)]
#[command(name = "pescaderia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List products with their expiration status
    Products {
        /// Case-insensitive text matched against product names
        search: Option<String>,

        /// Column to sort by (id, name, quantity, price, expiration_date, ingress_date, description)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Monthly sales report
    Report {
        /// List every product instead of the best and worst sellers
        #[arg(long)]
        all: bool,
    },

    /// Render the page behind a navigation path (e.g. /dashboard)
    Open {
        path: String,
    },
}

impl Command {
    /// Catalog query described by a `products` invocation.
    pub fn catalog_query(&self) -> Option<CatalogQuery> {
        let Command::Products { search, sort, desc } = self else {
            return None;
        };
        let direction = if *desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let key = sort.unwrap_or(CatalogQuery::default().sort.key);
        Some(
            CatalogQuery::new()
                .with_sort(key, direction)
                .with_search(search.clone().unwrap_or_default()),
        )
    }
}

/// Execute `command` against `app`, producing the JSON document to print.
pub fn run(app: &App, command: &Command) -> anyhow::Result<JsonValue> {
    match command {
        Command::Products { .. } => {
            let query = command.catalog_query().unwrap_or_default();
            Ok(serde_json::to_value(app.dashboard(&query))?)
        }
        Command::Report { all } => Ok(serde_json::to_value(app.report(*all))?),
        Command::Open { path } => {
            let route = Route::from_path(path).with_context(|| format!("no page at {path:?}"))?;
            match route {
                Route::Dashboard => Ok(serde_json::to_value(app.dashboard(&CatalogQuery::new()))?),
                Route::MonthlyReport => Ok(serde_json::to_value(app.report(false))?),
                Route::Login => {
                    let next = app.logout();
                    Ok(json!({ "redirect": next.path() }))
                }
            }
        }
    }
}
