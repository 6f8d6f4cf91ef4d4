use serde::{Deserialize, Serialize};

use crate::round2;

/// A single class interval within a frequency distribution.
///
/// Each class covers the half-open interval `[lower_bound, upper_bound)`;
/// the final class of a generated distribution is closed so the maximum
/// sample is always counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyClass {
    /// Inclusive lower boundary of the interval.
    pub lower_bound: f64,
    /// Upper boundary of the interval.
    pub upper_bound: f64,
    /// Average of the two boundaries, the representative value used by
    /// grouped estimation.
    pub midpoint: f64,
    /// Number of samples falling in this interval.
    pub frequency: u64,
    /// Running total of frequencies from the first class through this one.
    pub cumulative_frequency: u64,
    /// This class's share of the total frequency, as a percentage.
    pub relative_frequency: f64,
}

/// An ordered sequence of class intervals with their tabulated frequencies.
///
/// Distributions are produced either by [`FrequencyDistribution::from_samples`]
/// (contiguous classes generated from raw data) or from pre-grouped input via
/// [`FrequencyDistribution::from_classes`] (class order supplied by the caller
/// and preserved as-is).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    /// The class intervals, in ascending order for generated distributions.
    pub classes: Vec<FrequencyClass>,
    /// Sum of all class frequencies.
    pub total_frequency: u64,
}

impl FrequencyDistribution {
    /// Partitions raw samples into contiguous classes of width `class_width`.
    ///
    /// Class boundaries are anchored to multiples of the width at or below
    /// the minimum sample (`floor(min / w) * w`), which lands the intervals
    /// on readable numbers instead of starting exactly at the minimum. Every
    /// interval is half-open except the last, which is closed so that the
    /// maximum sample is counted. When all samples are equal, exactly one
    /// class is produced.
    ///
    /// The width must be positive; the configuration layer validates it
    /// before calling in.
    ///
    /// # Panics
    ///
    /// Panics if `class_width` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqsum_stats::distribution::FrequencyDistribution;
    ///
    /// let dist = FrequencyDistribution::from_samples(&[68.0, 73.0, 95.0, 71.0], 5.0);
    ///
    /// // Anchored below the minimum: classes start at floor(68 / 5) * 5 = 65.
    /// assert_eq!(dist.classes.len(), 6);
    /// assert_eq!(dist.classes[0].lower_bound, 65.0);
    /// assert_eq!(dist.classes[0].frequency, 1);
    /// assert_eq!(dist.classes[1].frequency, 2);
    ///
    /// // The final interval [90, 95] is closed, so 95 is counted.
    /// assert_eq!(dist.classes[5].frequency, 1);
    /// assert_eq!(dist.total_frequency, 4);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_samples(values: &[f64], class_width: f64) -> Self {
        assert!(class_width > 0.0, "class width must be positive");

        if values.is_empty() {
            return Self::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let start = (min / class_width).floor() * class_width;
        // max == min on a width boundary would otherwise yield zero classes.
        let num_classes = ((((max - start) / class_width).ceil()) as usize).max(1);

        let mut counts = vec![0_u64; num_classes];
        for &value in values {
            // Clamping to the last index closes the final interval.
            let idx = ((((value - start) / class_width).floor()) as usize).min(num_classes - 1);
            counts[idx] += 1;
        }

        Self::from_classes(counts.iter().enumerate().map(|(i, &frequency)| {
            let lower = start + (i as f64) * class_width;
            (lower, lower + class_width, frequency)
        }))
    }

    /// Builds a distribution from `(lower, upper, frequency)` triples,
    /// computing midpoints, cumulative frequencies, and relative frequencies.
    ///
    /// Classes are kept in the order given; cumulative frequency is the
    /// running sum in that order. Callers supplying pre-grouped input are
    /// trusted on ordering and contiguity, but not on class spans: every
    /// upper bound must strictly exceed its lower bound.
    ///
    /// # Panics
    ///
    /// Panics if any class has `upper <= lower`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqsum_stats::distribution::FrequencyDistribution;
    ///
    /// let dist = FrequencyDistribution::from_classes([(61.0, 68.0, 7), (69.0, 76.0, 9)]);
    /// assert_eq!(dist.total_frequency, 16);
    /// assert_eq!(dist.classes[0].midpoint, 64.5);
    /// assert_eq!(dist.classes[1].cumulative_frequency, 16);
    /// assert_eq!(dist.classes[0].relative_frequency, 43.75);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_classes<I>(classes: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, u64)>,
    {
        let mut classes = classes
            .into_iter()
            .map(|(lower, upper, frequency)| {
                assert!(upper > lower, "class upper bound must exceed lower bound");
                FrequencyClass {
                    lower_bound: round2(lower),
                    upper_bound: round2(upper),
                    midpoint: round2((lower + upper) / 2.0),
                    frequency,
                    cumulative_frequency: 0,
                    relative_frequency: 0.0,
                }
            })
            .collect::<Vec<_>>();

        let total_frequency = classes.iter().map(|c| c.frequency).sum::<u64>();

        let mut cumulative = 0;
        for class in &mut classes {
            cumulative += class.frequency;
            class.cumulative_frequency = cumulative;
            class.relative_frequency = if total_frequency == 0 {
                0.0
            } else {
                round2(class.frequency as f64 / total_frequency as f64 * 100.0)
            };
        }

        Self {
            classes,
            total_frequency,
        }
    }
}
