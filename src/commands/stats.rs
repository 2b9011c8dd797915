//! Stats command: print saved statistics

use crate::output::histogram_bar;
use crate::stats::Stats;
use colored::Colorize;

const BAR_WIDTH: usize = 24;

/// Print the persisted statistics with a guess distribution histogram
pub fn print_stats(stats: &Stats) {
    println!("\n{}", " STATISTIQUES ".black().on_bright_cyan().bold());
    println!();
    println!("  Parties jouées     {}", stats.games_played);
    println!("  Parties gagnées    {}", stats.games_won);
    println!("  Victoires          {}%", stats.win_percentage());
    println!("  Série en cours     {}", stats.current_streak);
    println!("  Meilleure série    {}", stats.max_streak);
    println!();

    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    println!("  Répartition des victoires :");
    for (i, &count) in stats.distribution.iter().enumerate() {
        println!(
            "    {} {} {}",
            (i + 1).to_string().bright_black(),
            histogram_bar(count, max, BAR_WIDTH),
            count.to_string().bright_cyan()
        );
    }
    println!();
}
