//! Display functions for command results

use super::formatters::{cell_text, create_progress_bar, word_bounds};
use crate::commands::{AutoplayResult, BenchResult};
use crate::core::Position;
use crate::interaction::Completion;
use crate::puzzle::{CellStatus, Puzzle};
use colored::Colorize;

/// Print the grid, cropped to the placed words
///
/// Correct guesses are green, wrong ones red. Cells of completed words are bold.
pub fn print_grid(puzzle: &Puzzle, reveal: bool) {
    let Some((top_left, bottom_right)) = word_bounds(puzzle, 1) else {
        println!("{}", "(empty grid)".bright_black());
        return;
    };

    println!(
        "{}",
        format!(
            "Grid {} (showing x {}..={}, y {}..={})",
            puzzle.dimensions(),
            top_left.x,
            bottom_right.x,
            top_left.y,
            bottom_right.y
        )
        .bright_black()
    );

    for y in top_left.y..=bottom_right.y {
        let mut line = String::new();
        for x in top_left.x..=bottom_right.x {
            let view = puzzle.cell_view(Position::new(x, y));
            let text = cell_text(view.as_ref(), reveal);
            let styled = match &view {
                None => text.bright_black(),
                Some(_) if reveal => text.bright_white(),
                Some(v) => {
                    let cell = match v.status {
                        CellStatus::Empty => text.white(),
                        CellStatus::Correct => text.green(),
                        CellStatus::Wrong => text.red(),
                    };
                    if v.completed { cell.bold() } else { cell }
                }
            };
            line.push_str(&styled.to_string());
        }
        println!("  {line}");
    }
}

/// Print every clue in registry order, solved ones ticked
pub fn print_clues(puzzle: &Puzzle) {
    println!("\n{}", "Clues:".bright_cyan().bold());
    for word in puzzle.registry().all() {
        let line = word.clue_line();
        if puzzle.registry().is_notified(word.id()) {
            println!("  {} {}", "✓".green(), line.bright_black());
        } else {
            println!("    {line}");
        }
    }
}

/// Print what a completion did
pub fn print_completion(completion: &Completion) {
    match &completion.placed {
        Ok(word) => println!(
            "{} word {} solved, placed {} {} at {}",
            "✓".green().bold(),
            completion.word_id,
            word.text().as_str().bright_yellow().bold(),
            word.direction(),
            word.anchor()
        ),
        Err(err) => println!(
            "{} word {} solved, {}",
            "✓".green().bold(),
            completion.word_id,
            err.to_string().bright_black()
        ),
    }
}

/// Print the result of an autoplay run
pub fn print_autoplay_result(result: &AutoplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_grid(&result.puzzle, false);

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!("   Words solved:     {}", result.solved);
    println!(
        "   Words placed:     {}",
        result.placed.len().to_string().bright_yellow().bold()
    );
    println!(
        "   No crossing:      {}",
        result.failures.len().to_string().yellow()
    );
    println!(
        "   Success rate:     [{}] {:.1}%",
        create_progress_bar(result.placement_rate(), 1.0, 30).green(),
        result.placement_rate() * 100.0
    );
    println!("   Corpus left:      {}", result.puzzle.corpus().len());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    if !result.placed.is_empty() {
        println!("\n📝 {}", "Placed words:".bright_cyan().bold());
        for word in &result.placed {
            println!(
                "   {:>3}. {:<10} {:<6} at {}",
                word.id(),
                word.text().as_str(),
                word.direction().label(),
                word.anchor()
            );
        }
    }
}

/// Print the result of a bench run
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Sessions:         {}", result.sessions);
    println!(
        "   Average placed:   {}",
        format!("{:.2}", result.average_placed)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        result.min_placed.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        result.max_placed.to_string().green()
    );
    println!("   No crossing:      {}", result.total_failures);
    if let Some((word, count)) = &result.top_first_word {
        println!("   Top first word:   {} ({count}x)", word.bright_white().bold());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    if result.sessions == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable_by_key(|(placed, _)| **placed);
    for (placed, &count) in counts {
        let pct = (count as f64 / result.sessions as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {placed:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
