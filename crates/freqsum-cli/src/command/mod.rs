use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use freqsum_analysis::{
    config::{ClassWidth, GraphKind, InputMode},
    snapshot::AnalysisSnapshot,
};

use crate::util;

mod chart;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// File containing the data to analyze; reads stdin when omitted
    input: Option<PathBuf>,

    /// How to interpret the input text (raw | grouped)
    #[arg(long, default_value_t)]
    mode: InputMode,

    /// Width of each class interval (presets: 3, 5, 8, 10, 15)
    #[arg(long, default_value_t)]
    class_width: ClassWidth,

    /// Chart to render below the tables
    #[arg(long, default_value_t)]
    graph: GraphKind,

    /// Emit the full analysis snapshot as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the JSON snapshot to this file instead of stdout (implies --json)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let emit_json = args.json || args.output.is_some();
    // A reserved graph kind fails here, before any input is read or
    // anything is computed or printed.
    if !emit_json {
        chart::ensure_renderable(args.graph)?;
    }

    let text = read_input(args.input.as_deref())?;
    let snapshot = AnalysisSnapshot::compute(&text, args.mode, args.class_width);

    if emit_json {
        return util::save_json(&snapshot, args.output.as_deref());
    }

    table::print_statistics(&snapshot.statistics);
    if let Some(distribution) = &snapshot.distribution {
        println!();
        table::print_frequency_table(distribution);
        println!();
        chart::print_chart(args.graph, distribution)?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
