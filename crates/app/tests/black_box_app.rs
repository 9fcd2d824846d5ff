//! End-to-end checks of the app layer: forms in, views out.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;

use pescaderia_app::{App, AppConfig, Cli, cli};
use pescaderia_catalog::{CatalogQuery, ExpirationStatus, ProductForm, SortDirection, SortKey};
use pescaderia_core::{DomainError, ProductId};
use pescaderia_reporting::{Recommendation, RecommendationPolicy};
use pescaderia_session::{InMemorySessionStorage, Route, SessionStorage, USERNAME_KEY};

fn config(user: Option<&str>) -> AppConfig {
    AppConfig {
        now: NaiveDate::from_ymd_opt(2024, 12, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        near_expiry_days: 5,
        summary_size: 5,
        recommendation: RecommendationPolicy::default(),
        user: user.map(str::to_string),
    }
}

fn id(raw: u64) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn form(name: &str, quantity: &str, price: &str, expiration: &str) -> ProductForm {
    ProductForm {
        name: name.into(),
        quantity: quantity.into(),
        price: price.into(),
        expiration_date: expiration.into(),
        description: String::new(),
    }
}

#[test]
fn dashboard_lists_seeded_products_with_status() {
    let app = App::new(config(Some("marina"))).unwrap();
    let view = app.dashboard(&CatalogQuery::new());

    assert_eq!(view.rows.len(), 12);
    assert_eq!(view.user.as_ref().map(|s| s.display_name()), Some("marina"));
    assert_eq!(view.rows[0].name, "Atún");

    let salmon = view.rows.iter().find(|r| r.name == "Salmón").unwrap();
    assert_eq!(salmon.status, ExpirationStatus::Expired);
    assert_eq!(salmon.expiration_date, "15/12/24");
    assert_eq!(salmon.price, "$15.00");
    assert!(salmon.warning.is_some());

    let atun = &view.rows[0];
    assert_eq!(atun.expiration_date, "20/12/24");
    assert_eq!(atun.status, ExpirationStatus::Expired);

    // Atún (20th, today), Bacalao (18th) and Salmón (15th) are expired;
    // Sardina, Trucha and Merluza are near.
    assert_eq!(view.attention, 6);
}

#[test]
fn add_edit_delete_through_forms() {
    let mut app = App::new(config(None)).unwrap();

    let new_id = app.submit_new(form("Pulpo", "40", "19.90", "2024-12-23")).unwrap();
    assert_eq!(new_id, id(13));
    let pulpo = app.catalog().get(new_id).unwrap();
    assert_eq!(pulpo.ingress_date(), NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());

    let mut edit = app.edit_form(new_id).unwrap();
    edit.quantity = "35".into();
    app.submit_edit(new_id, edit).unwrap();
    let pulpo = app.catalog().get(new_id).unwrap();
    assert_eq!(pulpo.quantity(), 35);
    assert_eq!(pulpo.ingress_date(), NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());

    app.delete(new_id);
    assert!(app.catalog().get(new_id).is_none());
    assert_eq!(app.catalog().len(), 12);
}

#[test]
fn invalid_forms_leave_catalog_untouched() {
    let mut app = App::new(config(None)).unwrap();
    let before = app.catalog().clone();

    let err = app.submit_new(form("", "1", "1", "2024-12-30")).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(app.submit_edit(id(1), form("Salmón", "x", "1", "2024-12-30")).is_err());
    assert_eq!(app.catalog(), &before);
}

#[test]
fn edits_and_deletes_of_unknown_ids_are_ignored() {
    let mut app = App::new(config(None)).unwrap();
    let before = app.catalog().clone();

    app.submit_edit(id(404), form("Fantasma", "1", "1", "2024-12-30")).unwrap();
    app.delete(id(404));
    assert_eq!(app.catalog(), &before);
}

#[test]
fn sorted_search() {
    let app = App::new(config(None)).unwrap();
    let query = CatalogQuery::new()
        .with_sort(SortKey::Quantity, SortDirection::Descending)
        .with_search("RA");
    let names: Vec<String> = app.dashboard(&query).rows.into_iter().map(|r| r.name).collect();
    // Dorada 180, Rape 100
    assert_eq!(names, ["Dorada", "Rape"]);
}

#[test]
fn report_view() {
    let app = App::new(config(None)).unwrap();
    let view = app.report(false);

    assert_eq!(view.total_quantity, 2155);
    assert_eq!(view.total_revenue, "$28000.00");
    assert_eq!(view.best_seller.as_deref(), Some("Salmón"));
    assert_eq!(view.summary.len(), 10);
    assert_eq!(view.summary[0].recommendation, Recommendation::IncreaseStock);
    assert_eq!(view.chart.len(), 5);
    assert_eq!(view.advice.len(), 4);
    assert_eq!(view.band.reduce_below, 0.8);
    assert_eq!(view.band.increase_above, 1.2);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["summary"][0]["name"], "Salmón");
    assert_eq!(json["summary"][0]["recommendation"], "increase_stock");
}

#[test]
fn session_lifecycle_over_shared_storage() {
    let storage = Arc::new(InMemorySessionStorage::new());
    let app = App::with_storage(config(Some("marina")), storage.clone()).unwrap();
    assert_eq!(storage.get(USERNAME_KEY).as_deref(), Some("marina"));

    assert_eq!(app.logout(), Route::Login);
    assert!(app.session().is_none());
    assert!(app.dashboard(&CatalogQuery::new()).user.is_none());
}

#[test]
fn configured_band_drives_recommendations() {
    let mut config = config(None);
    config.recommendation = RecommendationPolicy::new(0.5, 3.0).unwrap();
    let view = App::new(config).unwrap().report(false);

    assert_eq!(view.band.increase_above, 3.0);
    assert!(
        view.summary
            .iter()
            .all(|row| row.recommendation != Recommendation::IncreaseStock)
    );
}

fn run(app: &App, args: &[&str]) -> anyhow::Result<serde_json::Value> {
    let cli = Cli::try_parse_from(std::iter::once("pescaderia").chain(args.iter().copied()))?;
    cli::run(app, &cli.command)
}

#[test]
fn cli_commands_render_views() {
    let app = App::new(config(Some("marina"))).unwrap();

    let products = run(&app, &["products", "a", "--sort", "price", "--desc"]).unwrap();
    assert_eq!(products["rows"][0]["name"], "Lenguado");
    assert_eq!(products["query"]["sort"]["key"], "price");

    let report = run(&app, &["report", "--all"]).unwrap();
    assert_eq!(report["summary"].as_array().map(Vec::len), Some(10));
}

#[test]
fn open_dispatches_on_route_path() {
    let storage = Arc::new(InMemorySessionStorage::new());
    let app = App::with_storage(config(Some("marina")), storage.clone()).unwrap();

    let dashboard = run(&app, &["open", "/dashboard/"]).unwrap();
    assert_eq!(dashboard["rows"].as_array().map(Vec::len), Some(12));

    let report = run(&app, &["open", "/reporte-mensual"]).unwrap();
    assert_eq!(report["best_seller"], "Salmón");

    let login = run(&app, &["open", "/login"]).unwrap();
    assert_eq!(login["redirect"], "/login");
    assert!(storage.get(USERNAME_KEY).is_none());

    let err = run(&app, &["open", "/inventario"]).unwrap_err();
    assert!(err.to_string().contains("/inventario"));
}
