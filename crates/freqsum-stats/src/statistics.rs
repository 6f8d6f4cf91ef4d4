use serde::{Deserialize, Serialize};

use crate::{distribution::FrequencyDistribution, round2};

/// Summary statistics for a dataset, raw or grouped.
///
/// Every numeric field is rounded to two decimal places; rounding happens
/// after all arithmetic, never in between. `mode` is `None` when no value
/// repeats in the raw case; grouped estimation always yields a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value of the sorted data, or the interpolated grouped estimate.
    pub median: f64,
    /// Most frequent value, `None` when nothing repeats.
    pub mode: Option<f64>,
    /// `max - min` for raw data; the span of the class intervals for grouped.
    pub range: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Population variance (divisor `n`, not `n - 1`).
    pub variance: f64,
    /// Smallest value (first lower bound for grouped data).
    pub min: f64,
    /// Largest value (last upper bound for grouped data).
    pub max: f64,
    /// Number of samples, or the total frequency for grouped data.
    pub count: u64,
}

impl Statistics {
    /// The all-zero summary produced for empty input. Empty data is not an
    /// error anywhere in this crate.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            mean: 0.0,
            median: 0.0,
            mode: None,
            range: 0.0,
            std_dev: 0.0,
            variance: 0.0,
            min: 0.0,
            max: 0.0,
            count: 0,
        }
    }

    /// Computes summary statistics directly from raw samples.
    ///
    /// Values are expected to be finite; the input parser guarantees this.
    /// The median averages the two central elements for even counts. The
    /// mode is the smallest of the most frequent values, and absent when
    /// every value occurs exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqsum_stats::statistics::Statistics;
    ///
    /// let stats = Statistics::from_samples(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.variance, 1.25);
    /// assert_eq!(stats.mode, None);
    ///
    /// let stats = Statistics::from_samples(&[1.0, 2.0, 2.0, 3.0, 3.0]);
    /// assert_eq!(stats.mode, Some(2.0));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_samples(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        let mode = mode_of_sorted(&sorted);

        let min = sorted[0];
        let max = sorted[count - 1];
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Self {
            mean: round2(mean),
            median: round2(median),
            mode: mode.map(round2),
            range: round2(max - min),
            std_dev: round2(std_dev),
            variance: round2(variance),
            min: round2(min),
            max: round2(max),
            count: count as u64,
        }
    }

    /// Estimates summary statistics from a grouped frequency distribution.
    ///
    /// Uses the textbook grouped-data formulas over class midpoints:
    ///
    /// - mean: `Σ(f · midpoint) / N`
    /// - median: `L + ((N/2 - CF) / f) · h` within the first class whose
    ///   cumulative frequency reaches half the total
    /// - mode: `L + ((f1 - f0) / (2·f1 - f0 - f2)) · h` when the modal class
    ///   is a strict peak over its neighbors, otherwise the modal class
    ///   midpoint (non-peaked distributions would divide by zero)
    ///
    /// A distribution with no classes or zero total frequency yields
    /// [`Statistics::empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use freqsum_stats::{distribution::FrequencyDistribution, statistics::Statistics};
    ///
    /// let dist = FrequencyDistribution::from_classes([(61.0, 68.0, 7), (69.0, 76.0, 9)]);
    /// let stats = Statistics::from_distribution(&dist);
    /// assert_eq!(stats.mean, 69.0);
    /// assert_eq!(stats.median, 69.78);
    /// assert_eq!(stats.mode, Some(70.27));
    /// assert_eq!(stats.count, 16);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_distribution(distribution: &FrequencyDistribution) -> Self {
        let classes = &distribution.classes;
        if classes.is_empty() || distribution.total_frequency == 0 {
            return Self::empty();
        }
        let n = distribution.total_frequency as f64;

        let mean = classes
            .iter()
            .map(|c| c.frequency as f64 * c.midpoint)
            .sum::<f64>()
            / n;

        // The cumulative frequency of the last class equals the total, so
        // the search always finds a class.
        let half = n / 2.0;
        let median_idx = classes
            .iter()
            .position(|c| c.cumulative_frequency as f64 >= half)
            .unwrap_or(classes.len() - 1);
        let median_class = &classes[median_idx];
        let cf_before = if median_idx > 0 {
            classes[median_idx - 1].cumulative_frequency as f64
        } else {
            0.0
        };
        let h = median_class.upper_bound - median_class.lower_bound;
        let median =
            median_class.lower_bound + (half - cf_before) / median_class.frequency as f64 * h;

        // First class with the strictly maximum frequency.
        let mut modal_idx = 0;
        for (idx, class) in classes.iter().enumerate() {
            if class.frequency > classes[modal_idx].frequency {
                modal_idx = idx;
            }
        }
        let modal = &classes[modal_idx];
        let f1 = modal.frequency as f64;
        let f0 = if modal_idx > 0 {
            classes[modal_idx - 1].frequency as f64
        } else {
            0.0
        };
        let f2 = classes.get(modal_idx + 1).map_or(0.0, |c| c.frequency as f64);
        let mode = if f1 > f0 && f1 > f2 {
            let mode_h = modal.upper_bound - modal.lower_bound;
            modal.lower_bound + (f1 - f0) / (2.0 * f1 - f0 - f2) * mode_h
        } else {
            modal.midpoint
        };

        let variance = classes
            .iter()
            .map(|c| c.frequency as f64 * (c.midpoint - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        let min = classes[0].lower_bound;
        let max = classes[classes.len() - 1].upper_bound;

        Self {
            mean: round2(mean),
            median: round2(median),
            mode: Some(round2(mode)),
            range: round2(max - min),
            std_dev: round2(std_dev),
            variance: round2(variance),
            min: round2(min),
            max: round2(max),
            count: distribution.total_frequency,
        }
    }
}

/// Most frequent value in sorted data, `None` when nothing repeats.
///
/// Runs of equal values are scanned in ascending order and only a strictly
/// longer run replaces the current best, so ties resolve to the smallest
/// value.
#[expect(clippy::float_cmp)]
fn mode_of_sorted(sorted_values: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut idx = 0;
    while idx < sorted_values.len() {
        let value = sorted_values[idx];
        let mut run_end = idx + 1;
        while run_end < sorted_values.len() && sorted_values[run_end] == value {
            run_end += 1;
        }
        let run_len = run_end - idx;
        if best.is_none_or(|(_, best_len)| run_len > best_len) {
            best = Some((value, run_len));
        }
        idx = run_end;
    }
    best.filter(|&(_, len)| len > 1).map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_zeroed_statistics() {
        let stats = Statistics::from_samples(&[]);
        assert_eq!(stats, Statistics::empty());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mode, None);
    }

    #[test]
    fn median_of_even_count_averages_central_pair() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn median_of_odd_count_is_central_element() {
        let stats = Statistics::from_samples(&[3.0, 1.0, 2.0]);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn mode_is_absent_without_repeats() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.mode, None);
    }

    #[test]
    fn mode_ties_resolve_to_smallest_value() {
        // 2 and 4 both occur twice; the smaller wins.
        let stats = Statistics::from_samples(&[4.0, 2.0, 4.0, 2.0, 1.0]);
        assert_eq!(stats.mode, Some(2.0));
    }

    #[test]
    fn population_variance_uses_divisor_n() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.variance, 1.25);
        assert_eq!(stats.std_dev, 1.12);
    }

    #[test]
    fn raw_summary_of_known_dataset() {
        let stats = Statistics::from_samples(&[68.0, 73.0, 95.0, 71.0]);
        assert_eq!(stats.mean, 76.75);
        assert_eq!(stats.median, 72.0);
        assert_eq!(stats.range, 27.0);
        assert_eq!(stats.min, 68.0);
        assert_eq!(stats.max, 95.0);
        assert_eq!(stats.count, 4);
    }

    #[test]
    fn grouped_summary_of_textbook_distribution() {
        let dist = FrequencyDistribution::from_classes([(61.0, 68.0, 7), (69.0, 76.0, 9)]);
        let stats = Statistics::from_distribution(&dist);
        assert_eq!(stats.mean, 69.0);
        // 69 + ((8 - 7) / 9) * 7
        assert_eq!(stats.median, 69.78);
        // 69 + ((9 - 7) / (18 - 7 - 0)) * 7
        assert_eq!(stats.mode, Some(70.27));
        assert_eq!(stats.variance, 15.75);
        assert_eq!(stats.std_dev, 3.97);
        assert_eq!(stats.range, 15.0);
        assert_eq!(stats.min, 61.0);
        assert_eq!(stats.max, 76.0);
        assert_eq!(stats.count, 16);
    }

    #[test]
    fn grouped_mode_falls_back_to_midpoint_when_not_peaked() {
        // Equal frequencies: no strict peak, so the first class is modal and
        // its midpoint is the estimate.
        let dist = FrequencyDistribution::from_classes([(0.0, 10.0, 5), (10.0, 20.0, 5)]);
        let stats = Statistics::from_distribution(&dist);
        assert_eq!(stats.mode, Some(5.0));
    }

    #[test]
    fn grouped_median_interpolates_within_middle_class() {
        let dist = FrequencyDistribution::from_classes([
            (0.0, 10.0, 2),
            (10.0, 20.0, 6),
            (20.0, 30.0, 2),
        ]);
        let stats = Statistics::from_distribution(&dist);
        // L = 10, N/2 = 5, CF = 2, f = 6, h = 10 -> 10 + 30/6 = 15
        assert_eq!(stats.median, 15.0);
    }

    #[test]
    fn grouped_empty_distribution_yields_zeroed_statistics() {
        let stats = Statistics::from_distribution(&FrequencyDistribution::default());
        assert_eq!(stats, Statistics::empty());
    }

    #[test]
    fn single_sample_statistics() {
        let stats = Statistics::from_samples(&[42.0]);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.mode, None);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn statistics_serialize_mode_as_null_when_absent() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0]);
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["mode"].is_null());
        assert_eq!(json["count"], 3);
    }
}
