//! Text output of the CLI: banner, tables and charts.
//!
//! Everything writes to a generic [`Write`] so reports can be captured in tests.

use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::array::format_array;
use crate::benchmark::{BenchmarkRow, BenchmarkTable};
use crate::{Algorithm, SortError};

const CHART_WIDTH: usize = 50;
const TABLE_RULE: &str = "+-----------------+-----------------+";
const BENCH_RULE: &str =
    "+----------+---------------+---------------+---------------+---------------+";

/// Colour of an algorithm in charts and live frames.
pub fn category_color(algorithm: Algorithm) -> Color {
    match algorithm {
        Algorithm::Selection => Color::Yellow,
        Algorithm::Bubble => Color::Green,
        Algorithm::Merge => Color::Blue,
        Algorithm::Quick => Color::Magenta,
    }
}

pub fn write_header<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    let banner = [
        "╔══════════════════════════════════════════════════════╗",
        "║                                                      ║",
        "║      SORTING ALGORITHM VISUALIZER                    ║",
        "║      ============================                    ║",
        "║                                                      ║",
        "╚══════════════════════════════════════════════════════╝",
    ];

    for line in banner {
        writeln!(w, "{}", line.cyan().bold())?;
    }

    Ok(())
}

/// Draws `[=====>    ] 30%` and returns the cursor to the start of the line.
pub fn write_progress_bar<W: Write + ?Sized>(
    w: &mut W,
    progress: f32,
    width: usize,
) -> io::Result<()> {
    let progress = progress.clamp(0.0, 1.0);
    let pos = (width as f32 * progress) as usize;

    let bar: String = (0..width)
        .map(|i| match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '>',
            std::cmp::Ordering::Greater => ' ',
        })
        .collect();

    write!(w, "[{bar}] {}%\r", (progress * 100.0) as u32)?;
    w.flush()
}

/// Prints the first `limit` elements as `[ 42]` cells on one line.
pub fn write_sample<W: Write + ?Sized>(w: &mut W, v: &[i32], limit: usize) -> io::Result<()> {
    let shown = &v[..v.len().min(limit)];

    writeln!(w, "Sample array (first {} elements):", shown.len())?;
    for val in shown {
        write!(w, "[{}] ", format!("{val:3}").green())?;
    }
    writeln!(w, "\n")
}

pub fn write_array<W: Write + ?Sized>(w: &mut W, v: &[i32]) -> io::Result<()> {
    write!(w, "{}", format_array(v))
}

pub fn write_results_table<W: Write + ?Sized>(w: &mut W, row: &BenchmarkRow) -> io::Result<()> {
    writeln!(w, "\n{}", "RESULTS SUMMARY".bold())?;
    writeln!(w, "{TABLE_RULE}")?;
    writeln!(w, "| Algorithm       | Time (seconds)  |")?;
    writeln!(w, "{TABLE_RULE}")?;
    for timing in row.timings() {
        let name = format!("{} Sort", timing.label());
        writeln!(w, "| {name:<15} | {:15.6} |", timing.seconds())?;
    }
    writeln!(w, "{TABLE_RULE}\n")
}

/// Length of a chart bar, shorter means slower. Always at least one column.
pub fn chart_bar_len(seconds: f64, max_seconds: f64, width: usize) -> usize {
    if max_seconds <= 0.0 {
        return width.max(1);
    }

    let scaled = ((seconds / max_seconds) * width as f64) as usize;
    width.saturating_sub(scaled).max(1)
}

pub fn write_comparison_chart<W: Write + ?Sized>(w: &mut W, row: &BenchmarkRow) -> io::Result<()> {
    writeln!(w, "\n{}", "PERFORMANCE COMPARISON CHART:".bold())?;
    writeln!(w, "(Bar length represents relative speed)\n")?;

    let max_seconds = row
        .timings()
        .iter()
        .map(|t| t.seconds())
        .fold(0.0_f64, f64::max);

    for timing in row.timings() {
        let len = chart_bar_len(timing.seconds(), max_seconds, CHART_WIDTH);
        let line = format!("{} {:12.6} seconds", "█".repeat(len), timing.seconds());
        writeln!(
            w,
            "{:<12}: {}",
            timing.label(),
            line.color(category_color(timing.algorithm()))
        )?;
    }

    write_analysis(w, row)
}

/// Fastest, slowest and the speed ratio between them.
pub fn write_analysis<W: Write + ?Sized>(w: &mut W, row: &BenchmarkRow) -> io::Result<()> {
    writeln!(w, "\n{}", "Analysis:".bold())?;

    match row.summary() {
        Ok(summary) => {
            writeln!(
                w,
                "• Fastest: {} Sort ({:.6} seconds)",
                summary.fastest.label(),
                summary.fastest.seconds()
            )?;
            writeln!(
                w,
                "• Slowest: {} Sort ({:.6} seconds)",
                summary.slowest.label(),
                summary.slowest.seconds()
            )?;
            writeln!(w, "• Speed ratio (Slowest/Fastest): {:.2}x", summary.ratio)
        }
        Err(SortError::DivideByZero { algorithm }) => writeln!(
            w,
            "• Speed ratio (Slowest/Fastest): indeterminate ratio ({algorithm} Sort ran below clock resolution)"
        ),
        Err(err) => writeln!(w, "• {err}"),
    }
}

pub fn write_benchmark_header<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{BENCH_RULE}")?;
    writeln!(
        w,
        "| Size     | Selection     | Bubble        | Merge         | Quick         |"
    )?;
    writeln!(w, "{BENCH_RULE}")
}

pub fn write_benchmark_row<W: Write + ?Sized>(w: &mut W, row: &BenchmarkRow) -> io::Result<()> {
    let [selection, bubble, merge, quick] = row.timings();
    writeln!(
        w,
        "| {:8} | {:13.6} | {:13.6} | {:13.6} | {:13.6} |",
        row.size(),
        selection.seconds(),
        bubble.seconds(),
        merge.seconds(),
        quick.seconds()
    )
}

pub fn write_benchmark_footer<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{BENCH_RULE}")
}

pub fn write_benchmark_table<W: Write + ?Sized>(
    w: &mut W,
    table: &BenchmarkTable,
) -> io::Result<()> {
    write_benchmark_header(w)?;
    for row in table.rows() {
        write_benchmark_row(w, row)?;
    }
    write_benchmark_footer(w)
}
