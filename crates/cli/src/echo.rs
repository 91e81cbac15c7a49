use glean_core::{AnalysisResult, DisplayColor, HeadingMap, formatters::text::headings_outline};
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Glean".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Extract text from web pages and PDFs\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Paint a value in one of the metric colours
fn paint(value: &str, color: DisplayColor) -> String {
    match color {
        DisplayColor::Green => value.green().bold().to_string(),
        DisplayColor::Orange => value.truecolor(255, 165, 0).bold().to_string(),
        DisplayColor::Red => value.red().bold().to_string(),
        DisplayColor::Blue => value.blue().bold().to_string(),
    }
}

/// Print the content analysis with the sentiment and band colours
pub fn print_analysis(analysis: &AnalysisResult) {
    let sentiment = &analysis.sentiment;
    let readability = &analysis.readability;

    println!("{}", "Content Analysis".bold().cyan());
    println!(
        "  {} {} {}",
        "Sentiment:".dimmed(),
        paint(&sentiment.label.to_string(), sentiment.label.color()),
        format!("(Polarity: {:.2})", sentiment.polarity).dimmed()
    );
    println!(
        "  {} {}",
        "Word Count:".dimmed(),
        paint(&analysis.word_count.to_string(), DisplayColor::Green)
    );
    println!(
        "  {} {}",
        "Readability Score:".dimmed(),
        paint(&format!("{:.2}", readability.score), DisplayColor::Orange)
    );
    println!(
        "  {} {}",
        "Interpretation:".dimmed(),
        paint(readability.band.label(), readability.band.color())
    );
}

/// Print the heading outline under a styled title
pub fn print_headings(headings: &HeadingMap) {
    let outline = headings_outline(headings);
    let mut lines = outline.lines();

    if let Some(title) = lines.next() {
        println!("{}", title.bold().cyan());
    }
    for line in lines {
        println!("{}", line);
    }
}

/// Format byte size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
