//! Tabular rendering of statistics and frequency distributions.

use freqsum_stats::{distribution::FrequencyDistribution, statistics::Statistics};

/// Print the summary statistics panel.
pub(super) fn print_statistics(statistics: &Statistics) {
    println!("Summary Statistics");
    println!("  {}", "-".repeat(24));
    println!("  {:<12} {:>10}", "Count", statistics.count);
    println!("  {:<12} {:>10.2}", "Mean", statistics.mean);
    println!("  {:<12} {:>10.2}", "Median", statistics.median);
    let mode = statistics
        .mode
        .map_or_else(|| "N/A".to_string(), |m| format!("{m:.2}"));
    println!("  {:<12} {:>10}", "Mode", mode);
    println!("  {:<12} {:>10.2}", "Range", statistics.range);
    println!("  {:<12} {:>10.2}", "Std Dev", statistics.std_dev);
    println!("  {:<12} {:>10.2}", "Variance", statistics.variance);
    println!("  {:<12} {:>10.2}", "Min", statistics.min);
    println!("  {:<12} {:>10.2}", "Max", statistics.max);
}

/// Print the frequency distribution table: one row per class with
/// midpoint, frequency, cumulative frequency, and relative frequency.
pub(super) fn print_frequency_table(distribution: &FrequencyDistribution) {
    println!("Frequency Distribution");
    println!(
        "  {:<16} {:>10} {:>10} {:>12} {:>11}",
        "Class", "Midpoint", "Freq", "Cumulative", "Relative%"
    );
    println!("  {}", "-".repeat(64));
    for class in &distribution.classes {
        let interval = format!("{} - {}", class.lower_bound, class.upper_bound);
        println!(
            "  {:<16} {:>10.2} {:>10} {:>12} {:>10.2}%",
            interval,
            class.midpoint,
            class.frequency,
            class.cumulative_frequency,
            class.relative_frequency
        );
    }
    println!("  {}", "-".repeat(64));
    println!(
        "  {:<16} {:>10} {:>10}",
        "Total", "", distribution.total_frequency
    );
}
