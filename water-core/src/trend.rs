//! Synthetic monthly usage history for the trend chart.
//!
//! There is no stored history: each render draws twelve month-end values
//! scattered around the current annual usage with normally distributed
//! noise (10% standard deviation). None of these numbers feed back into the
//! calculations. Use [`DemoTrendGenerator::from_seed`] for reproducible
//! output.

use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// Number of monthly points in a generated trend.
pub const TREND_MONTHS: usize = 12;

/// Standard deviation of the noise, relative to the current usage.
pub const RELATIVE_NOISE: f64 = 0.1;

/// One point of the demo trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month_end: NaiveDate,
    pub volume_gallons: f64,
}

/// Generator of non-authoritative demo history.
pub struct DemoTrendGenerator {
    rng: ChaCha8Rng,
}

impl DemoTrendGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy; every run draws a different series.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Twelve month-end points, oldest first, the last one being the latest
    /// month end on or before `end`.
    pub fn generate(
        &mut self,
        current_volume_gallons: f64,
        end: NaiveDate,
    ) -> Vec<TrendPoint> {
        let mut month_end = last_month_end_on_or_before(end);
        let mut dates = Vec::with_capacity(TREND_MONTHS);
        for _ in 0..TREND_MONTHS {
            dates.push(month_end);
            month_end = first_of_month(month_end) - Days::new(1);
        }
        dates.reverse();

        dates
            .into_iter()
            .map(|month_end| TrendPoint {
                month_end,
                volume_gallons: current_volume_gallons
                    * (1.0 + RELATIVE_NOISE * self.rng.sample::<f64, _>(StandardNormal)),
            })
            .collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn last_month_end_on_or_before(date: NaiveDate) -> NaiveDate {
    if (date + Days::new(1)).day() == 1 {
        date
    } else {
        first_of_month(date) - Days::new(1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generate_returns_twelve_month_ends_ending_before_date() {
        let points = DemoTrendGenerator::from_seed(7).generate(1_000_000.0, date(2026, 10, 19));

        assert_eq!(points.len(), TREND_MONTHS);
        assert_eq!(points[0].month_end, date(2025, 10, 31));
        assert_eq!(points[4].month_end, date(2026, 2, 28));
        assert_eq!(points[11].month_end, date(2026, 9, 30));
    }

    #[test]
    fn generate_includes_end_date_when_it_is_a_month_end() {
        let points = DemoTrendGenerator::from_seed(7).generate(1_000_000.0, date(2024, 2, 29));

        assert_eq!(points[11].month_end, date(2024, 2, 29));
        assert_eq!(points[0].month_end, date(2023, 3, 31));
    }

    #[test]
    fn same_seed_gives_same_series() {
        let end = date(2026, 6, 1);
        let a = DemoTrendGenerator::from_seed(42).generate(30_000_000.0, end);
        let b = DemoTrendGenerator::from_seed(42).generate(30_000_000.0, end);

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_series() {
        let end = date(2026, 6, 1);
        let a = DemoTrendGenerator::from_seed(1).generate(30_000_000.0, end);
        let b = DemoTrendGenerator::from_seed(2).generate(30_000_000.0, end);

        assert!(a != b);
    }

    #[test]
    fn values_scatter_around_current_usage() {
        let points = DemoTrendGenerator::from_seed(3).generate(30_000_000.0, date(2026, 6, 1));

        assert!(points.iter().all(|p| (p.volume_gallons - 30_000_000.0).abs() < 18_000_000.0));
        assert!(points.iter().any(|p| p.volume_gallons != 30_000_000.0));
    }

    #[test]
    fn zero_usage_stays_zero() {
        let points = DemoTrendGenerator::from_seed(9).generate(0.0, date(2026, 6, 1));

        assert!(points.iter().all(|p| p.volume_gallons == 0.0));
    }
}
