//! Demo: run the engine over two canned scenarios and print every view.

use anyhow::{Context, Result};
use rs_seqalign::{
    align::Alignment,
    config::{AlignConfig, OpCosts},
    equal::StructuralEq,
    fill,
    mode::AlignMode,
    render::{self, Aligned},
    task::AlignTask,
};

fn row_to_string(row: &[Option<char>]) -> String {
    row.iter().map(|symbol| symbol.unwrap_or('-')).collect()
}

fn print_alignment(aligned: &Aligned<char>) {
    println!("{}", row_to_string(&aligned.seq1));
    println!("{}", row_to_string(&aligned.seq2));
    let codes: String = aligned.actions.iter().map(|op| op.code()).collect();
    println!("{codes}");
}

fn print_table(table: &[Vec<String>]) {
    for row in table {
        println!("{}", row.join(" "));
    }
}

fn main() -> Result<()> {
    // Global run with full alignment output.
    let seq1: Vec<char> = "vine".chars().collect();
    let seq2: Vec<char> = "vin".chars().collect();

    let config = AlignConfig {
        task: AlignTask::Path,
        ..AlignConfig::default()
    };
    let result = Alignment::run(config.clone(), &seq1, &seq2)?;

    println!("GLOBAL SCORE");
    println!("{}", result.score);
    println!("\nALIGNMENT TABLE");
    let aligned = result.aligned.context("path task renders an alignment")?;
    print_alignment(&aligned);

    println!("\nBACKTRACE DIRECTIONS");
    let dp = fill::fill(&seq1, &seq2, &config.costs, config.mode, &StructuralEq);
    print_table(&render::backtrace_table(&dp.ties));

    // Score-only rerun: same number, two rows of memory.
    let score_only = Alignment::run(AlignConfig::default(), &seq1, &seq2)?;
    println!("\nGLOBAL SCORE (score-only fill)");
    println!("{}", score_only.score);

    // Local run: only the highest-scoring substring pair is aligned.
    let seq1: Vec<char> = "pqraxabcstvq".chars().collect();
    let seq2: Vec<char> = "xyaxbacsll".chars().collect();
    let config = AlignConfig {
        mode: AlignMode::Local,
        task: AlignTask::Path,
        costs: OpCosts::new(-1, -1, -1, 2),
    };
    let result = Alignment::run(config, &seq1, &seq2)?;

    println!("\nLOCAL SCORE");
    println!("{}", result.score);
    println!("\nALIGNMENT TABLE");
    let aligned = result.aligned.context("path task renders an alignment")?;
    print_alignment(&aligned);

    Ok(())
}
