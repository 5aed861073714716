//! Output formatting helpers for the CLI

use std::io::{self, Write};

use crate::{
    predictor::Performance,
    rps::Move,
    session::{RoundReport, Scoreboard},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a fraction in `[0, 1]` as a percentage with one decimal
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// One line per move: `rock 0.667  paper 0.500  scissors 0.500`
pub fn format_performance(perf: &Performance) -> String {
    Move::ALL
        .into_iter()
        .map(|mv| format!("{mv} {:.3}", perf.get(mv)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Write the result of an interactive round the way the game screen shows it
pub fn write_round_report<W: Write>(out: &mut W, report: &RoundReport) -> io::Result<()> {
    writeln!(
        out,
        "You: {:8} Computer: {:8} Result: {}",
        report.round.player, report.round.opponent, report.outcome
    )?;
    writeln!(
        out,
        "Win rate  you {}%  computer {}%",
        report.player_win_rate, report.computer_win_rate
    )?;
    if let Some(streak) = report.lose_streak {
        writeln!(out, "You have lost {streak} in a row")?;
    }
    Ok(())
}

/// Write the final tally of a session
pub fn write_scoreboard<W: Write>(out: &mut W, scoreboard: &Scoreboard) -> io::Result<()> {
    writeln!(
        out,
        "Rounds: {}  Wins: {}  Losses: {}  Ties: {}",
        scoreboard.rounds, scoreboard.player_wins, scoreboard.computer_wins, scoreboard.ties
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::Outcome;

    #[test]
    fn performance_line_lists_all_moves() {
        let line = format_performance(&Performance::new([2.0 / 3.0, 0.5, 0.5]));
        assert_eq!(line, "rock 0.667  paper 0.500  scissors 0.500");
    }

    #[test]
    fn report_mentions_streak_only_when_visible() {
        let mut report = RoundReport {
            round_num: 0,
            round: "rp".parse().unwrap(),
            outcome: Outcome::Loss,
            player_win_rate: 0,
            computer_win_rate: 100,
            lose_streak: None,
        };
        let mut buf = Vec::new();
        write_round_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Result: lose"));
        assert!(!text.contains("in a row"));

        report.lose_streak = Some(2);
        let mut buf = Vec::new();
        write_round_report(&mut buf, &report).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("lost 2 in a row"));
    }
}
