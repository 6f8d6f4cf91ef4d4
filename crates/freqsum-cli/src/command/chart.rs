//! Text charts for frequency distributions.
//!
//! The thinnest stand-in for a real chart renderer: horizontal bars scaled
//! to the widest row. One renderer per graph kind the core defines;
//! the reserved kinds fail instead of rendering.

use anyhow::bail;
use freqsum_analysis::config::GraphKind;
use freqsum_stats::distribution::FrequencyDistribution;

const MAX_BAR_WIDTH: usize = 50;

/// Checks that `kind` has a renderer. Called before any input is read so
/// a reserved kind fails up front instead of after the tables have
/// already been printed.
pub(super) fn ensure_renderable(kind: GraphKind) -> anyhow::Result<()> {
    match kind {
        GraphKind::FrequencyPolygon | GraphKind::Histogram | GraphKind::Ogive => Ok(()),
        GraphKind::BarChart | GraphKind::PieChart => {
            bail!("graph kind '{kind}' is reserved and has no renderer")
        }
    }
}

pub(super) fn print_chart(
    kind: GraphKind,
    distribution: &FrequencyDistribution,
) -> anyhow::Result<()> {
    match kind {
        GraphKind::Histogram => {
            println!("Histogram");
            let scale = bar_scale(distribution.classes.iter().map(|c| c.frequency));
            for class in &distribution.classes {
                let interval = format!("{} - {}", class.lower_bound, class.upper_bound);
                println!(
                    "  {:<16} | {} {}",
                    interval,
                    bar(class.frequency, scale),
                    class.frequency
                );
            }
        }
        GraphKind::FrequencyPolygon => {
            println!("Frequency Polygon");
            let scale = bar_scale(distribution.classes.iter().map(|c| c.frequency));
            for class in &distribution.classes {
                let label = format!("{:.2}", class.midpoint);
                println!(
                    "  {label:<16} | {} {}",
                    bar(class.frequency, scale),
                    class.frequency
                );
            }
        }
        GraphKind::Ogive => {
            println!("Ogive");
            let scale = bar_scale(
                distribution
                    .classes
                    .iter()
                    .map(|c| c.cumulative_frequency),
            );
            for class in &distribution.classes {
                let label = format!("<= {}", class.upper_bound);
                println!(
                    "  {label:<16} | {} {}",
                    bar(class.cumulative_frequency, scale),
                    class.cumulative_frequency
                );
            }
        }
        GraphKind::BarChart | GraphKind::PieChart => ensure_renderable(kind)?,
    }
    Ok(())
}

/// Glyphs per unit of frequency, so the widest row spans `MAX_BAR_WIDTH`.
#[expect(clippy::cast_precision_loss)]
fn bar_scale(values: impl Iterator<Item = u64>) -> f64 {
    match values.max() {
        Some(max) if max > 0 => MAX_BAR_WIDTH as f64 / max as f64,
        _ => 0.0,
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn bar(value: u64, scale: f64) -> String {
    "#".repeat((value as f64 * scale).round() as usize)
}
