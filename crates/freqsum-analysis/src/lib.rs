//! Input parsing, configuration, and derivation snapshots for the
//! statistics engine.
//!
//! This crate sits between free-form user text and the computational core
//! in `freqsum-stats`. It covers three concerns:
//!
//! - [`parse`]: lenient parsers for raw number lists and grouped
//!   frequency lines; malformed tokens and lines are skipped, never errors
//! - [`config`]: the configuration surface consumed from outside the core
//!   (input mode, class width, graph kind)
//! - [`snapshot`]: the atomic parse → distribution → statistics derivation
//!   recomputed as a unit whenever the source text or configuration changes
//!
//! # Examples
//!
//! ## Analyzing raw text end to end
//!
//! ```
//! use freqsum_analysis::{
//!     config::{ClassWidth, InputMode},
//!     snapshot::AnalysisSnapshot,
//! };
//!
//! let snapshot = AnalysisSnapshot::compute(
//!     "78, 85, 92, 68, 73",
//!     InputMode::Raw,
//!     ClassWidth::default(),
//! );
//! assert_eq!(snapshot.statistics.count, 5);
//! assert!(snapshot.distribution.is_some());
//! ```
//!
//! ## Parsing grouped frequency lines
//!
//! ```
//! use freqsum_analysis::parse;
//!
//! let dist = parse::parse_grouped("61-68: 7\n69-76: 9").unwrap();
//! assert_eq!(dist.total_frequency, 16);
//! ```

pub mod config;
pub mod parse;
pub mod snapshot;
