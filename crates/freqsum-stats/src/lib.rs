//! Frequency-distribution and descriptive-statistics engine.
//!
//! This crate is the computational core behind the tables and charts:
//!
//! - **Frequency distributions**: partition a sample set into contiguous
//!   classes of a fixed width and tabulate frequency, cumulative frequency,
//!   and relative frequency
//! - **Descriptive statistics**: mean, median, mode, range, variance, and
//!   standard deviation, computed either directly from raw samples or
//!   estimated from a grouped frequency distribution
//!
//! All derived values are immutable snapshots; every numeric output is
//! rounded to two decimal places as a final presentation step.
//!
//! # Modules
//!
//! - [`distribution`]: class intervals and frequency tabulation
//! - [`statistics`]: summary statistics for raw and grouped data
//!
//! # Examples
//!
//! ## Building a frequency distribution
//!
//! ```
//! use freqsum_stats::distribution::FrequencyDistribution;
//!
//! let samples = [68.0, 73.0, 95.0, 71.0];
//! let dist = FrequencyDistribution::from_samples(&samples, 5.0);
//! assert_eq!(dist.total_frequency, 4);
//! assert_eq!(dist.classes[0].lower_bound, 65.0);
//! ```
//!
//! ## Summarizing raw samples
//!
//! ```
//! use freqsum_stats::statistics::Statistics;
//!
//! let stats = Statistics::from_samples(&[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.median, 2.5);
//! assert_eq!(stats.mode, None);
//! ```

pub mod distribution;
pub mod statistics;

/// Rounds to two decimal places. Applied to every derived value as the
/// last step, after all arithmetic.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
