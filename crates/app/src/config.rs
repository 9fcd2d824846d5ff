//! Configuration from environment variables.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};

use pescaderia_catalog::ExpirationPolicy;
use pescaderia_reporting::RecommendationPolicy;

pub const ENV_TODAY: &str = "PESCADERIA_TODAY";
pub const ENV_NEAR_EXPIRY_DAYS: &str = "PESCADERIA_NEAR_EXPIRY_DAYS";
pub const ENV_SUMMARY_SIZE: &str = "PESCADERIA_SUMMARY_SIZE";
pub const ENV_REDUCE_BELOW: &str = "PESCADERIA_REDUCE_BELOW";
pub const ENV_INCREASE_ABOVE: &str = "PESCADERIA_INCREASE_ABOVE";
pub const ENV_USER: &str = "PESCADERIA_USER";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Reference reading of the wall clock for expiration classification.
    pub now: NaiveDateTime,
    pub near_expiry_days: u32,
    /// `n` for the top/bottom report summaries and the chart.
    pub summary_size: usize,
    /// Band around the mean quantity used for stock recommendations.
    pub recommendation: RecommendationPolicy,
    pub user: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let now = match var(ENV_TODAY) {
            Some(raw) => parse_reference(&raw)
                .with_context(|| format!("{ENV_TODAY} must be YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got {raw:?}"))?,
            None => chrono::Local::now().naive_local(),
        };

        let near_expiry_days = match var(ENV_NEAR_EXPIRY_DAYS) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{ENV_NEAR_EXPIRY_DAYS} must be a non-negative integer, got {raw:?}"))?,
            None => ExpirationPolicy::default().near_window_days,
        };

        let summary_size = match var(ENV_SUMMARY_SIZE) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{ENV_SUMMARY_SIZE} must be a non-negative integer, got {raw:?}"))?,
            None => 5,
        };

        let default_band = RecommendationPolicy::default();
        let factor = |key: &str, default: f64| -> anyhow::Result<f64> {
            match var(key) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("{key} must be a decimal factor, got {raw:?}")),
                None => Ok(default),
            }
        };
        let recommendation = RecommendationPolicy::new(
            factor(ENV_REDUCE_BELOW, default_band.lower())?,
            factor(ENV_INCREASE_ABOVE, default_band.upper())?,
        )
        .with_context(|| format!("invalid {ENV_REDUCE_BELOW}/{ENV_INCREASE_ABOVE} band"))?;

        let user = var(ENV_USER);
        if user.is_none() {
            tracing::warn!("{ENV_USER} not set; running without a session");
        }

        Ok(Self {
            now,
            near_expiry_days,
            summary_size,
            recommendation,
            user,
        })
    }

    /// Calendar day of `now`; stamped as ingress date on new products.
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn expiration_policy(&self) -> ExpirationPolicy {
        ExpirationPolicy::new(self.near_expiry_days)
    }
}

fn parse_reference(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").or_else(|_| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::default()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.near_expiry_days, 5);
        assert_eq!(config.summary_size, 5);
        assert_eq!(config.recommendation, RecommendationPolicy::default());
        assert_eq!(config.user, None);
    }

    #[test]
    fn explicit_values() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_TODAY, "2024-12-20"),
            (ENV_NEAR_EXPIRY_DAYS, "3"),
            (ENV_SUMMARY_SIZE, " 4 "),
            (ENV_REDUCE_BELOW, "0.5"),
            (ENV_INCREASE_ABOVE, "1.5"),
            (ENV_USER, "marina"),
        ]))
        .unwrap();
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
        assert_eq!(config.expiration_policy(), ExpirationPolicy::new(3));
        assert_eq!(config.summary_size, 4);
        assert_eq!(config.recommendation, RecommendationPolicy::new(0.5, 1.5).unwrap());
        assert_eq!(config.user.as_deref(), Some("marina"));
    }

    #[test]
    fn reference_time_of_day() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_TODAY, "2024-12-20T23:15:00")])).unwrap();
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
        assert_eq!(config.now.format("%H:%M").to_string(), "23:15");
    }

    #[test]
    fn malformed_values_fail_with_context() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_TODAY, "20/12/2024")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TODAY));

        let err = AppConfig::from_lookup(lookup(&[(ENV_NEAR_EXPIRY_DAYS, "-1")])).unwrap_err();
        assert!(err.to_string().contains(ENV_NEAR_EXPIRY_DAYS));

        let err = AppConfig::from_lookup(lookup(&[(ENV_REDUCE_BELOW, "2.0")])).unwrap_err();
        assert!(err.to_string().contains(ENV_REDUCE_BELOW));
    }

    #[test]
    fn blank_user_counts_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_USER, "  ")])).unwrap();
        assert_eq!(config.user, None);
    }
}
