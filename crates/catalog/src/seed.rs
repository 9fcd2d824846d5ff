//! Sample inventory the shop starts with.

use chrono::NaiveDate;

use pescaderia_core::Price;

use crate::product::ProductDraft;
use crate::store::Catalog;

// (name, quantity, price in cents, expiration, ingress)
const SAMPLE: [(&str, u32, u64, (i32, u32, u32), (i32, u32, u32)); 12] = [
    ("Salmón", 500, 1500, (2024, 12, 15), (2024, 1, 1)),
    ("Atún", 450, 1300, (2024, 12, 20), (2024, 1, 2)),
    ("Bacalao", 300, 1100, (2024, 12, 18), (2024, 1, 3)),
    ("Trucha", 250, 1250, (2024, 12, 22), (2024, 1, 4)),
    ("Merluza", 200, 1000, (2024, 12, 25), (2024, 1, 5)),
    ("Dorada", 180, 1450, (2024, 12, 28), (2024, 1, 6)),
    ("Lubina", 220, 1600, (2024, 12, 30), (2024, 1, 7)),
    ("Rodaballo", 150, 1800, (2024, 12, 31), (2024, 1, 8)),
    ("Rape", 100, 2000, (2024, 12, 29), (2024, 1, 9)),
    ("Lenguado", 120, 2200, (2024, 12, 27), (2024, 1, 10)),
    ("Boquerón", 600, 800, (2024, 12, 26), (2024, 1, 11)),
    ("Sardina", 550, 750, (2024, 12, 24), (2024, 1, 12)),
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// The twelve products the catalog is seeded with, ids 1 through 12.
pub fn sample_catalog() -> Catalog {
    SAMPLE
        .into_iter()
        .fold(Catalog::new(), |catalog, (name, quantity, cents, expiration, ingress)| {
            let ingress = ymd(ingress);
            let draft = ProductDraft::new(name, quantity, Price::from_cents(cents), ymd(expiration))
                .with_ingress_date(ingress);
            catalog.add(draft, ingress)
        })
}
