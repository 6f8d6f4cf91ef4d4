//! Configuration surface consumed by the presentation layer.
//!
//! Everything here is validated before it reaches the computational core:
//! the distribution builder panics on a non-positive class width, so
//! [`ClassWidth`] is the only way to hand one in.

use std::str::FromStr;

use serde::Serialize;

/// How the input text should be interpreted.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free-form numbers separated by commas, whitespace, or newlines.
    #[default]
    #[display("raw")]
    Raw,
    /// One pre-grouped class per line, e.g. `61-68: 7`.
    #[display("grouped")]
    Grouped,
}

/// Chart rendered alongside the tables.
///
/// `BarChart` and `PieChart` are listed in the type domain but have no
/// renderer; they are reserved and rejected when requested.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GraphKind {
    /// Frequency per class midpoint.
    #[default]
    #[display("frequency-polygon")]
    FrequencyPolygon,
    /// Frequency per class interval.
    #[display("histogram")]
    Histogram,
    /// Cumulative frequency curve.
    #[display("ogive")]
    Ogive,
    /// Reserved, no renderer yet.
    #[display("bar-chart")]
    BarChart,
    /// Reserved, no renderer yet.
    #[display("pie-chart")]
    PieChart,
}

/// Error returned when a graph kind name is not recognized.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown graph kind '{kind}'")]
pub struct UnknownGraphKindError {
    kind: String,
}

impl FromStr for GraphKind {
    type Err = UnknownGraphKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frequency-polygon" => Ok(Self::FrequencyPolygon),
            "histogram" => Ok(Self::Histogram),
            "ogive" => Ok(Self::Ogive),
            "bar-chart" => Ok(Self::BarChart),
            "pie-chart" => Ok(Self::PieChart),
            _ => Err(UnknownGraphKindError { kind: s.to_owned() }),
        }
    }
}

/// A validated class interval width.
///
/// Widths must be positive and finite; anything else is rejected here,
/// before the distribution builder can see it. The configuration panel of
/// the reference UI offers the presets in [`ClassWidth::PRESETS`] with a
/// default of `5`, but any positive width is accepted.
///
/// # Examples
///
/// ```
/// use freqsum_analysis::config::ClassWidth;
///
/// assert_eq!(ClassWidth::default().get(), 5.0);
/// assert_eq!(ClassWidth::new(2.5).unwrap().get(), 2.5);
/// assert!(ClassWidth::new(0.0).is_err());
/// assert!(ClassWidth::new(-3.0).is_err());
/// assert!(ClassWidth::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, Serialize)]
#[display("{_0}")]
pub struct ClassWidth(f64);

/// Error returned for class widths that are missing, non-numeric, or not
/// positive.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ClassWidthError {
    /// The text did not parse as a number at all.
    #[display("class width is not a number: '{text}'")]
    NotANumber { text: String },
    /// The width parsed but is zero, negative, or not finite.
    #[display("class width must be a positive finite number, got {width}")]
    NotPositive { width: f64 },
}

impl ClassWidth {
    /// Preset widths offered by the configuration panel.
    pub const PRESETS: [f64; 5] = [3.0, 5.0, 8.0, 10.0, 15.0];

    /// Validates `width`, rejecting non-positive and non-finite values.
    pub fn new(width: f64) -> Result<Self, ClassWidthError> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(ClassWidthError::NotPositive { width })
        }
    }

    /// The validated width.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ClassWidth {
    fn default() -> Self {
        Self(5.0)
    }
}

impl FromStr for ClassWidth {
    type Err = ClassWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ClassWidthError::NotANumber { text: s.to_owned() })?;
        Self::new(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_mode_parses_case_insensitively() {
        assert_eq!("raw".parse::<InputMode>().unwrap(), InputMode::Raw);
        assert_eq!("Grouped".parse::<InputMode>().unwrap(), InputMode::Grouped);
        assert!("columnar".parse::<InputMode>().is_err());
    }

    #[test]
    fn graph_kind_round_trips_through_display() {
        for kind in [
            GraphKind::FrequencyPolygon,
            GraphKind::Histogram,
            GraphKind::Ogive,
            GraphKind::BarChart,
            GraphKind::PieChart,
        ] {
            assert_eq!(kind.to_string().parse::<GraphKind>().unwrap(), kind);
        }
    }

    #[test]
    fn graph_kind_rejects_unknown_names() {
        assert!("scatter".parse::<GraphKind>().is_err());
    }

    #[test]
    fn class_width_rejects_invalid_values() {
        assert!(ClassWidth::new(0.0).is_err());
        assert!(ClassWidth::new(-1.0).is_err());
        assert!(ClassWidth::new(f64::INFINITY).is_err());
        assert!(ClassWidth::new(f64::NAN).is_err());
    }

    #[test]
    fn class_width_parses_from_text() {
        assert_eq!("8".parse::<ClassWidth>().unwrap().get(), 8.0);
        assert_eq!(" 2.5 ".parse::<ClassWidth>().unwrap().get(), 2.5);
        assert!("wide".parse::<ClassWidth>().is_err());
        assert!("-4".parse::<ClassWidth>().is_err());
    }

    #[test]
    fn presets_are_all_valid_widths() {
        for preset in ClassWidth::PRESETS {
            assert!(ClassWidth::new(preset).is_ok());
        }
    }
}
