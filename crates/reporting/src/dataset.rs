use pescaderia_core::Price;

use crate::report::SalesRecord;

/// Sales figures for the reported month.
pub fn monthly_sales() -> Vec<SalesRecord> {
    [
        ("Salmón", 500, 7500),
        ("Atún", 450, 5850),
        ("Bacalao", 300, 3300),
        ("Trucha", 250, 3125),
        ("Merluza", 200, 2000),
        ("Sardinas", 150, 900),
        ("Lenguado", 100, 2000),
        ("Dorada", 80, 1200),
        ("Lubina", 75, 1125),
        ("Rodaballo", 50, 1000),
    ]
    .into_iter()
    .map(|(name, quantity, revenue)| SalesRecord::new(name, quantity, Price::from_units(revenue)))
    .collect()
}
