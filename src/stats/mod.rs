//! Aggregation engine
//!
//! Derives dashboard statistics (distributions, averages, extremes and
//! time-bucketed trends) from the stored problems and solutions.

pub mod engine;
pub mod memory;
pub mod pg;
pub mod snapshot;
pub mod store;
pub mod trend;

pub use engine::StatisticsEngine;
pub use memory::InMemoryStatsStore;
pub use pg::PgStatsStore;
pub use snapshot::*;
pub use store::StatsStore;

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.5), 1.5);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.125), 0.13);
    }
}
