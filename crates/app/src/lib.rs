//! `pescaderia-app` — wires the catalog, report and session crates into the
//! views the presentation layer renders.

pub mod cli;
pub mod config;
pub mod views;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use views::{App, DashboardView, ProductRowView, ReportView, StockBand};
