//! Thin reporting layer over the engine's output: fixed-width console
//! summaries, text charts for the outcome tally and bankroll trajectories, and
//! JSON for machine consumers.

use crate::bankroll::{GenerationResult, OutcomeTally};
use crate::generation::GenerationSet;
use std::fmt::Display;
use std::io::{self, Write};

const WIDTH: usize = 80;
const TEXT_WIDTH: usize = "aggregate rounds played".len() + 20;
const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

/// One generation's numbers, formatted in the fixed-width console style.
pub struct GenerationSummary<'a> {
    label: &'a str,
    result: &'a GenerationResult,
}

impl<'a> GenerationSummary<'a> {
    pub fn new(label: &'a str, result: &'a GenerationResult) -> Self {
        GenerationSummary { label, result }
    }
}

impl Display for GenerationSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tally = &self.result.tally;
        let total = tally.total().max(1);
        writeln!(f, "{:-^WIDTH$}", self.label)?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}",
            "final bankroll", self.result.final_bankroll
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "rounds played", self.result.rounds_played
        )?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "wins", tally.wins)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "losses", tally.losses)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "pushes", tally.pushes)?;
        write!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}",
            "win percentage",
            tally.wins as f64 / total as f64
        )
    }
}

/// Writes the run overview: aggregate counts across every generation, then the
/// best and worst generations in full.
pub fn write_summary(set: &GenerationSet, mut writer: impl Write) -> io::Result<()> {
    let aggregate = set.aggregate_tally();
    let rounds: u64 = set
        .results()
        .iter()
        .map(|result| result.rounds_played as u64)
        .sum();

    writeln!(writer, "{}", "-".repeat(WIDTH))?;
    writeln!(
        writer,
        "{:-^WIDTH$}",
        format!("{} generations", set.results().len())
    )?;
    writeln!(
        writer,
        "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
        "aggregate wins", aggregate.wins
    )?;
    writeln!(
        writer,
        "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
        "aggregate losses", aggregate.losses
    )?;
    writeln!(
        writer,
        "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
        "aggregate pushes", aggregate.pushes
    )?;
    writeln!(
        writer,
        "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
        "aggregate rounds played", rounds
    )?;
    writeln!(
        writer,
        "{}",
        GenerationSummary::new(
            &format!("best (generation #{})", set.best_index() + 1),
            set.best()
        )
    )?;
    writeln!(
        writer,
        "{}",
        GenerationSummary::new(
            &format!("worst (generation #{})", set.worst_index() + 1),
            set.worst()
        )
    )?;
    writeln!(writer, "{}", "-".repeat(WIDTH))?;
    Ok(())
}

/// Writes a horizontal bar chart of the aggregate outcome tally.
pub fn write_tally_chart(tally: &OutcomeTally, mut writer: impl Write) -> io::Result<()> {
    const BAR_WIDTH: usize = 60;
    let max = tally.wins.max(tally.losses).max(tally.pushes).max(1) as usize;

    writeln!(writer, "{:-^WIDTH$}", "outcomes")?;
    for (label, count) in [
        ("win", tally.wins),
        ("loss", tally.losses),
        ("push", tally.pushes),
    ] {
        let bar = "#".repeat(count as usize * BAR_WIDTH / max);
        writeln!(writer, "{:>5} |{:<BAR_WIDTH$}| {}", label, bar, count)?;
    }
    Ok(())
}

/// Writes a down-sampled text rendering of the best and worst bankroll
/// trajectories. `*` marks the best generation, `o` the worst, and the row
/// nearest the initial bankroll is dashed as a reference line.
pub fn write_bankroll_chart(
    best: &GenerationResult,
    worst: &GenerationResult,
    initial_bankroll: f64,
    mut writer: impl Write,
) -> io::Result<()> {
    const COLS: usize = 64;
    const ROWS: usize = 16;

    let mut lo = initial_bankroll;
    let mut hi = initial_bankroll;
    for value in best.history.iter().chain(&worst.history) {
        lo = lo.min(*value);
        hi = hi.max(*value);
    }
    if hi - lo < f64::EPSILON {
        hi = lo + 1.0;
    }

    let level = |value: f64| -> usize {
        let scaled = (value - lo) / (hi - lo) * (ROWS - 1) as f64;
        scaled.round() as usize
    };
    let sample = |history: &[f64], col: usize| -> f64 {
        history[col * (history.len() - 1) / (COLS - 1)]
    };

    let reference_level = level(initial_bankroll);
    writeln!(writer, "{:-^WIDTH$}", "bankroll trajectory")?;
    for row in (0..ROWS).rev() {
        let mut line: Vec<u8> = if row == reference_level {
            vec![b'-'; COLS]
        } else {
            vec![b' '; COLS]
        };
        for col in 0..COLS {
            if level(sample(&worst.history, col)) == row {
                line[col] = b'o';
            }
            if level(sample(&best.history, col)) == row {
                line[col] = b'*';
            }
        }
        let edge = match row {
            r if r == ROWS - 1 => format!("{hi:>10.2}"),
            0 => format!("{lo:>10.2}"),
            r if r == reference_level => format!("{initial_bankroll:>10.2}"),
            _ => " ".repeat(10),
        };
        writeln!(
            writer,
            "{} |{}",
            edge,
            String::from_utf8_lossy(&line)
        )?;
    }
    writeln!(
        writer,
        "{:>10} best: '*'  worst: 'o'  reference: '-'",
        ""
    )?;
    Ok(())
}

/// Serializes the full result set as pretty-printed JSON.
pub fn write_json(set: &GenerationSet, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, set)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationConfig;
    use crate::generation::GenerationRunner;

    fn small_set() -> GenerationSet {
        let config = GenerationConfig::new()
            .n_generations(4)
            .n_hands_per_generation(100)
            .initial_bankroll(1000.0)
            .seed(5)
            .build();
        GenerationRunner::new(config).unwrap().run().unwrap()
    }

    #[test]
    fn summary_mentions_every_generation_and_the_extremes() {
        let set = small_set();
        let mut out = Vec::new();
        write_summary(&set, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("4 generations"));
        assert!(text.contains("best"));
        assert!(text.contains("worst"));
        assert!(text.contains("aggregate wins"));
    }

    #[test]
    fn tally_chart_scales_bars_to_the_largest_count() {
        let tally = OutcomeTally {
            wins: 30,
            losses: 60,
            pushes: 0,
        };
        let mut out = Vec::new();
        write_tally_chart(&tally, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let loss_line = text.lines().find(|l| l.contains("loss")).unwrap();
        let win_line = text.lines().find(|l| l.contains("win")).unwrap();
        let push_line = text.lines().find(|l| l.contains("push")).unwrap();
        assert_eq!(loss_line.matches('#').count(), 60);
        assert_eq!(win_line.matches('#').count(), 30);
        assert_eq!(push_line.matches('#').count(), 0);
    }

    #[test]
    fn bankroll_chart_renders_both_series_and_the_reference_line() {
        let set = small_set();
        let mut out = Vec::new();
        write_bankroll_chart(set.best(), set.worst(), 1000.0, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('*'));
        assert!(text.contains("1000.00"));
        // header + 16 chart rows + legend
        assert_eq!(text.lines().count(), 18);
    }

    #[test]
    fn json_round_trips_through_serde() {
        let set = small_set();
        let mut out = Vec::new();
        write_json(&set, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert!(value["best"].is_u64());
        assert!(value["worst"].is_u64());
    }
}
