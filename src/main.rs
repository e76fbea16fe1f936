use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_viz_rs::array::{copy_into, validate_len};
use sort_viz_rs::benchmark::{compare_all_with, CompareEvent};
use sort_viz_rs::config::{
    analysis_sizes, COMPARE_VALUE_RANGE, PREVIEW_LEN, VISUAL_MAX_LEN, VISUAL_VALUE_RANGE,
};
use sort_viz_rs::patterns::{new_seeded_rng, random_uniform};
use sort_viz_rs::report;
use sort_viz_rs::{
    run_benchmark, Algorithm, SortError, SortResult, TerminalRenderer, VisualizerConfig,
};

/// Sorting algorithm visualizer and comparator
#[derive(Parser)]
#[command(name = "sort-viz")]
#[command(version)]
#[command(about = "Visualize and benchmark selection, bubble, merge and quick sort", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the generated arrays (defaults to SORT_VIZ_SEED, then entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Time all four algorithms on one random array
    Compare {
        /// Number of elements
        #[arg(short = 'n', long, default_value_t = 1_000)]
        size: usize,
    },

    /// Animate one algorithm, or all of them in sequence
    Visualize {
        #[arg(value_enum, default_value_t = AlgorithmArg::All)]
        algorithm: AlgorithmArg,

        /// Number of elements (capped at 30)
        #[arg(short = 'n', long, default_value_t = 20)]
        size: usize,

        /// Delay between frames in microseconds (1-100000)
        #[arg(long, default_value_t = 50_000)]
        delay_us: u64,

        /// Skip the animation and only print the arrays
        #[arg(long)]
        no_animation: bool,
    },

    /// Time all algorithms over growing array sizes
    Analyze {
        /// Largest size to run, the first size always runs
        #[arg(short = 'n', long, default_value_t = 10_000)]
        max_size: usize,
    },

    /// Start the interactive menu
    Menu,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Selection,
    Bubble,
    Merge,
    Quick,
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Selection => vec![Algorithm::Selection],
            AlgorithmArg::Bubble => vec![Algorithm::Bubble],
            AlgorithmArg::Merge => vec![Algorithm::Merge],
            AlgorithmArg::Quick => vec![Algorithm::Quick],
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// State that outlives a single menu action.
struct Session {
    config: VisualizerConfig,
    rng: StdRng,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => new_seeded_rng(),
    };
    let mut session = Session {
        config: VisualizerConfig::default(),
        rng,
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Compare { size } => compare(&mut session, size),
        Commands::Visualize {
            algorithm,
            size,
            delay_us,
            no_animation,
        } => session
            .config
            .set_delay_micros(delay_us)
            .and_then(|()| {
                session.config.enabled = !no_animation;
                visualize(&mut session, &algorithm.algorithms(), size)
            }),
        Commands::Analyze { max_size } => analyze(&mut session, max_size),
        Commands::Menu => run_menu(&mut session),
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn clear_screen() -> SortResult<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    report::write_header(&mut out)?;
    Ok(())
}

fn compare(session: &mut Session, n: usize) -> SortResult<()> {
    validate_len(n)?;
    let original = random_uniform(n, COMPARE_VALUE_RANGE, &mut session.rng);

    clear_screen()?;
    let mut out = io::stdout().lock();
    writeln!(out, "\n{}", "COMPARING ALL SORTING ALGORITHMS".cyan().bold())?;
    writeln!(out, "==================================\n")?;
    report::write_sample(&mut out, &original, PREVIEW_LEN)?;

    let progress = [0.1, 0.3, 0.6, 0.9];
    let row = compare_all_with(&original, |event| {
        match event {
            CompareEvent::Started(algorithm) => {
                writeln!(out, "{}", format!("➤ {algorithm} Sort:").yellow())?;
                report::write_progress_bar(&mut out, progress[algorithm as usize], 50)?;
            }
            CompareEvent::Finished(timing) => writeln!(
                out,
                " Completed in {} seconds",
                format!("{:.6}", timing.seconds()).green()
            )?,
        }
        Ok(())
    })?;

    report::write_results_table(&mut out, &row)?;
    report::write_comparison_chart(&mut out, &row)?;

    Ok(())
}

fn visualize(session: &mut Session, algorithms: &[Algorithm], n: usize) -> SortResult<()> {
    validate_len(n)?;
    let n = n.min(VISUAL_MAX_LEN);
    let original = random_uniform(n, VISUAL_VALUE_RANGE, &mut session.rng);

    clear_screen()?;
    println!("\nInitial array ({n} elements):");
    report::write_array(&mut io::stdout(), &original)?;
    println!();

    let mut arr = original.clone();

    for (i, &algorithm) in algorithms.iter().enumerate() {
        if i > 0 {
            thread::sleep(Duration::from_secs(1));
        }

        copy_into(&original, &mut arr);
        let title = format!("VISUALIZING {}", algorithm.title());
        println!("{}", title.color(report::category_color(algorithm)).bold());
        println!("{}\n", "=".repeat(title.chars().count()));

        let mut renderer = TerminalRenderer::stdout(session.config.clone());
        algorithm.sort(&mut arr, &mut renderer)?;
        debug!("{} drew {} frames", algorithm.name(), renderer.frames());
    }

    println!("\n\n{}", "✓ Sorting completed!".green().bold());
    println!("\nSorted array:");
    report::write_array(&mut io::stdout(), &arr)?;

    Ok(())
}

fn analyze(session: &mut Session, n: usize) -> SortResult<()> {
    validate_len(n)?;
    let sizes = analysis_sizes(n);

    clear_screen()?;
    println!("\n{}", "PERFORMANCE ANALYSIS MODE".cyan().bold());
    println!("============================\n");
    println!("Testing with different array sizes:");

    let table = run_benchmark(&sizes, &mut session.rng)?;
    report::write_benchmark_table(&mut io::stdout(), &table)?;

    Ok(())
}

fn run_menu(session: &mut Session) -> SortResult<()> {
    let mut lines = io::stdin().lock().lines();

    loop {
        clear_screen()?;
        println!("\n\n{}", "SORTING ALGORITHM VISUALIZER AND COMPARATOR".bold());
        println!("============================================\n");
        println!("1. Compare all sorting algorithms");
        println!("2. Visualize individual algorithm");
        println!("3. Performance analysis mode");
        println!("4. Configure settings");
        println!("5. Exit");

        let choice: u32 = match prompt(&mut lines, "\nEnter your choice: ") {
            Ok(Some(choice)) => choice,
            Ok(None) => return Ok(()),
            Err(err) => {
                report_error(&err);
                thread::sleep(Duration::from_secs(1));
                continue;
            }
        };

        let result = match choice {
            1..=3 => dispatch(session, &mut lines, choice),
            4 => {
                if let Err(err) = configure(session, &mut lines) {
                    report_error(&err);
                    thread::sleep(Duration::from_secs(1));
                }
                continue;
            }
            5 => return Ok(()),
            other => Err(SortError::invalid_input(format!(
                "no menu entry {other}"
            ))),
        };

        match result {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(err) => report_error(&err),
        }

        print!("\n\n{}", "Press Enter to continue...".bold());
        io::stdout().flush()?;
        if lines.next().is_none() {
            return Ok(());
        }
    }
}

/// Runs one menu action, returns `false` when input ran out.
fn dispatch<L>(session: &mut Session, lines: &mut L, choice: u32) -> SortResult<bool>
where
    L: Iterator<Item = io::Result<String>>,
{
    let Some(n) = prompt::<usize, _>(
        lines,
        "\nEnter the number of elements (10-50 for visualization, 1000+ for comparison): ",
    )?
    else {
        return Ok(false);
    };

    match choice {
        1 => compare(session, n)?,
        2 => {
            println!("\nSelect algorithm to visualize:");
            println!("1. {}", "Selection Sort".yellow());
            println!("2. {}", "Bubble Sort".green());
            println!("3. {}", "Merge Sort".blue());
            println!("4. {}", "Quick Sort".magenta());
            println!("5. View all algorithms");

            let Some(pick) = prompt::<String, _>(lines, "\nEnter choice: ")? else {
                return Ok(false);
            };
            let algorithms = match pick.trim() {
                "5" | "all" => Algorithm::ALL.to_vec(),
                other => vec![Algorithm::from_str(other)?],
            };
            visualize(session, &algorithms, n)?;
        }
        _ => analyze(session, n)?,
    }

    Ok(true)
}

fn configure<L>(session: &mut Session, lines: &mut L) -> SortResult<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let config = &mut session.config;

    println!("\n{}", "Configuration Menu".bold());
    println!("===================");
    println!(
        "1. Enable/Disable Visualization (Currently: {})",
        if config.enabled { "Enabled" } else { "Disabled" }
    );
    println!(
        "2. Set Visualization Speed (Currently: {})",
        config.delay_micros()
    );
    println!("3. Return to main menu");

    match prompt::<u32, _>(lines, "Enter choice: ")? {
        Some(1) => {
            let enabled = config.toggle();
            println!(
                "Visualization {}",
                if enabled { "Enabled" } else { "Disabled" }
            );
            thread::sleep(Duration::from_secs(1));
        }
        Some(2) => {
            if let Some(micros) =
                prompt(lines, "Enter visualization speed (1-100000 microseconds): ")?
            {
                config.set_delay_micros(micros)?;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Prints `message` and parses the next input line. `None` means stdin is exhausted.
fn prompt<T, L>(lines: &mut L, message: &str) -> SortResult<Option<T>>
where
    T: FromStr,
    L: Iterator<Item = io::Result<String>>,
{
    print!("{message}");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let line = line?;

    line.trim()
        .parse()
        .map(Some)
        .map_err(|_| SortError::invalid_input(format!("'{}' is not a valid choice", line.trim())))
}

fn report_error(err: &SortError) {
    eprintln!("{} {err}", "error:".red().bold());
}
