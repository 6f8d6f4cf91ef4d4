//! Lenient text parsers for raw and grouped input.
//!
//! Both parsers follow the same recovery policy: anything that does not
//! match is skipped silently. Free-form user input routinely contains
//! stray labels, units, or blank lines, and dropping those must never
//! abort the rest of the batch. Empty or all-garbage input produces an
//! empty result, not an error.

use std::sync::LazyLock;

use freqsum_stats::distribution::FrequencyDistribution;
use regex::Regex;

/// One grouped-frequency line: `61-68: 7`, `61 – 68, 7`, or `61-68 7`.
/// Bounds may be decimal; the separator is a hyphen or en-dash; the
/// frequency is a non-negative integer.
static GROUPED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*)\s*[-–]\s*(\d+\.?\d*)\s*[,:;]?\s*(\d+)")
        .expect("grouped line pattern is valid")
});

/// Parses free text into a sample set.
///
/// Tokens are split on any run of commas, whitespace, or newlines, and
/// each token must parse as a finite floating-point number; everything
/// else is dropped. Duplicates are preserved and order is irrelevant.
///
/// # Examples
///
/// ```
/// use freqsum_analysis::parse::parse_raw;
///
/// assert_eq!(parse_raw("1, 2, abc, 3"), vec![1.0, 2.0, 3.0]);
/// assert_eq!(parse_raw("4.5\n6.25  7"), vec![4.5, 6.25, 7.0]);
/// assert!(parse_raw("no numbers here").is_empty());
/// ```
#[must_use]
pub fn parse_raw(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}

/// Parses grouped-frequency text, one class per line.
///
/// Classes are kept in the textual line order given; the parser never
/// re-sorts and does not check that classes are contiguous or
/// non-overlapping, so cumulative frequency follows the user's ordering
/// exactly. Lines that do not match the pattern are skipped, as are lines
/// whose upper bound does not exceed the lower bound (a class without a
/// positive span would corrupt the grouped estimators).
///
/// Returns `None` when no line parses successfully.
///
/// # Examples
///
/// ```
/// use freqsum_analysis::parse::parse_grouped;
///
/// let dist = parse_grouped("61-68: 7\nnot a class\n69-76: 9").unwrap();
/// assert_eq!(dist.classes.len(), 2);
/// assert_eq!(dist.total_frequency, 16);
/// assert_eq!(dist.classes[1].cumulative_frequency, 16);
///
/// assert!(parse_grouped("just noise").is_none());
/// ```
#[must_use]
pub fn parse_grouped(text: &str) -> Option<FrequencyDistribution> {
    let classes = text
        .lines()
        .filter_map(|line| {
            let caps = GROUPED_LINE.captures(line)?;
            let lower = caps[1].parse::<f64>().ok()?;
            let upper = caps[2].parse::<f64>().ok()?;
            let frequency = caps[3].parse::<u64>().ok()?;
            (upper > lower).then_some((lower, upper, frequency))
        })
        .collect::<Vec<_>>();

    if classes.is_empty() {
        return None;
    }
    Some(FrequencyDistribution::from_classes(classes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_splits_on_commas_whitespace_and_newlines() {
        assert_eq!(
            parse_raw("1,2 3\n4,,  5"),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn raw_drops_malformed_tokens_silently() {
        assert_eq!(parse_raw("1, 2, abc, 3"), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn raw_drops_non_finite_tokens() {
        assert_eq!(parse_raw("1 inf -inf NaN 2"), vec![1.0, 2.0]);
    }

    #[test]
    fn raw_preserves_duplicates() {
        assert_eq!(parse_raw("7 7 7"), vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn raw_empty_input_yields_empty_set() {
        assert!(parse_raw("").is_empty());
        assert!(parse_raw("  ,\n ,").is_empty());
    }

    #[test]
    fn grouped_parses_colon_separated_lines() {
        let dist = parse_grouped("61-68: 7\n69-76: 9").unwrap();
        assert_eq!(dist.classes.len(), 2);
        assert_eq!(dist.total_frequency, 16);
        let cumulative = dist
            .classes
            .iter()
            .map(|c| c.cumulative_frequency)
            .collect::<Vec<_>>();
        assert_eq!(cumulative, vec![7, 16]);
    }

    #[test]
    fn grouped_accepts_comma_semicolon_and_bare_whitespace() {
        let dist = parse_grouped("0-10, 1\n10-20; 2\n20-30 3").unwrap();
        let freqs = dist.classes.iter().map(|c| c.frequency).collect::<Vec<_>>();
        assert_eq!(freqs, vec![1, 2, 3]);
    }

    #[test]
    fn grouped_accepts_en_dash_and_padded_separators() {
        let dist = parse_grouped("61 – 68: 7").unwrap();
        assert_eq!(dist.classes[0].lower_bound, 61.0);
        assert_eq!(dist.classes[0].upper_bound, 68.0);
    }

    #[test]
    fn grouped_accepts_decimal_bounds() {
        let dist = parse_grouped("1.5-2.5: 4").unwrap();
        assert_eq!(dist.classes[0].midpoint, 2.0);
    }

    #[test]
    fn grouped_skips_unmatched_lines() {
        let dist = parse_grouped("header\n61-68: 7\n\ntrailing note").unwrap();
        assert_eq!(dist.classes.len(), 1);
    }

    #[test]
    fn grouped_skips_classes_without_positive_span() {
        assert!(parse_grouped("7-7: 3").is_none());
        let dist = parse_grouped("7-7: 3\n0-10: 2").unwrap();
        assert_eq!(dist.classes.len(), 1);
        assert_eq!(dist.classes[0].frequency, 2);
    }

    #[test]
    fn grouped_preserves_user_line_order() {
        // Out-of-order classes are trusted as-is; cumulative frequency
        // follows the textual order.
        let dist = parse_grouped("69-76: 9\n61-68: 7").unwrap();
        assert_eq!(dist.classes[0].lower_bound, 69.0);
        assert_eq!(dist.classes[0].cumulative_frequency, 9);
        assert_eq!(dist.classes[1].cumulative_frequency, 16);
    }

    #[test]
    fn grouped_returns_none_for_empty_or_garbage_input() {
        assert!(parse_grouped("").is_none());
        assert!(parse_grouped("nothing\nto see").is_none());
    }

    #[test]
    fn grouped_computes_relative_frequencies() {
        let dist = parse_grouped("61-68: 7\n69-76: 9").unwrap();
        assert_eq!(dist.classes[0].relative_frequency, 43.75);
        assert_eq!(dist.classes[1].relative_frequency, 56.25);
    }
}
