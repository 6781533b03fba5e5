//! Timeline Estimator - Whole weeks needed to deliver the effective work.

use crate::domain::foundation::ceil_stable;

/// Derives completion time from work and base capacity.
pub struct TimelineEstimator;

impl TimelineEstimator {
    /// Returns the number of whole weeks needed.
    ///
    /// # Edge Cases
    /// - No work: 0 weeks
    /// - Any work at all: at least 1 week
    /// - Zero capacity: 0 weeks (validated catalogs never produce it)
    pub fn completion_weeks(effective_work: f64, base_capacity: f64) -> u32 {
        if effective_work <= 0.0 {
            return 0;
        }
        if base_capacity <= 0.0 {
            tracing::warn!(effective_work, "Zero capacity in timeline estimate");
            return 0;
        }

        let raw_weeks = effective_work / base_capacity;
        ceil_stable(raw_weeks).max(1.0) as u32
    }
}
