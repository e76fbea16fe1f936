use std::io::{self, Stdout, Write};
use std::thread;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::warn;

use crate::config::VisualizerConfig;
use crate::report::{category_color, write_header};
use crate::{StepEvent, StepKind, StepObserver};

/// Redraws the whole array as a horizontal bar chart for every step it observes.
///
/// Each frame clears the screen, highlights the two indices of the event and then sleeps for the
/// configured delay. A disabled config turns the renderer into a no-op. The first write error
/// disables the renderer for the rest of the run.
pub struct TerminalRenderer<W: Write> {
    config: VisualizerConfig,
    out: W,
    frames: usize,
    failed: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(config: VisualizerConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(config: VisualizerConfig, out: W) -> Self {
        Self {
            config,
            out,
            frames: 0,
            failed: false,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, event: &StepEvent<'_, i32>) -> io::Result<()> {
        let color = category_color(event.category);

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        write_header(&mut self.out)?;

        let title = match event.kind {
            StepKind::Done => event.label.to_string(),
            _ => format!("{} IN PROGRESS", event.label),
        };
        writeln!(self.out, "\n{}", title.color(color).bold())?;
        writeln!(self.out, "====================================\n")?;

        let max_val = event.snapshot.iter().copied().max().unwrap_or(0);

        for (i, &val) in event.snapshot.iter().enumerate() {
            let cell = format!(
                "{} {val:3}",
                "█".repeat(bar_len(val, max_val, self.config.bar_width))
            );
            if event.is_highlighted(i) {
                writeln!(self.out, "{}", cell.red().bold())?;
            } else {
                writeln!(self.out, "{}", cell.color(color))?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write> StepObserver<i32> for TerminalRenderer<W> {
    fn observe(&mut self, event: StepEvent<'_, i32>) {
        if !self.config.enabled || self.failed {
            return;
        }

        if let Err(err) = self.draw(&event) {
            warn!("terminal renderer disabled after write error: {err}");
            self.failed = true;
            return;
        }
        self.frames += 1;

        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
    }
}

/// Bar length of `val` scaled against the largest value, at least one column.
pub fn bar_len(val: i32, max_val: i32, width: usize) -> usize {
    if max_val <= 0 || val <= 0 {
        return 1;
    }

    let scaled = i64::from(val) * width as i64 / i64::from(max_val);
    (scaled as usize).max(1)
}
