use colored::*;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub struct ConsoleUI;

impl ConsoleUI {
    pub fn print_header(title: &str) {
        let min_width = 48;
        let title_width = UnicodeWidthStr::width(title);
        let width = min_width.max(title_width + 2);
        let padding_total = width.saturating_sub(title_width);
        let padding_left = padding_total / 2;
        let padding_right = padding_total - padding_left;
        let horizontal = "═".repeat(width);
        println!("{}", format!("╔{}╗", horizontal).bright_cyan());
        println!(
            "║{}{}{}║",
            " ".repeat(padding_left),
            title.bright_yellow().bold(),
            " ".repeat(padding_right)
        );
        println!("{}", format!("╚{}╝", horizontal).bright_cyan());
    }

    pub fn print_count(word: &str, count: usize) {
        println!(
            "  {} {} {}",
            word.bright_white().bold(),
            "»".bright_cyan(),
            count.to_string().bright_green().bold()
        );
    }

    pub fn print_top(entries: &[String]) {
        if entries.is_empty() {
            Self::print_info("no words found");
            return;
        }
        let rank_width = entries.len().to_string().len();
        for (rank, entry) in entries.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("[{:>width$}]", rank + 1, width = rank_width).bright_blue().bold(),
                "»".bright_cyan(),
                entry.bright_white()
            );
        }
    }

    pub fn print_elapsed(elapsed: Duration) {
        Self::print_info(&format!("done in {:.2}s", elapsed.as_secs_f64()));
    }

    pub fn print_error(message: &str) {
        eprintln!("\n  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    pub fn print_info(message: &str) {
        println!(
            "  {} {}",
            "[ℹ]".bright_cyan().bold(),
            message.truecolor(180, 180, 180)
        );
    }
}
