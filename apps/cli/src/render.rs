use console::style;
use tubeseo_core::{ContentMetrics, GenerationResult, Section};

pub fn print_header() {
    println!(
        "\n{}  {}\n",
        style("tubeseo").cyan().bold(),
        style("YouTube Content Generator").dim()
    );
}

pub fn print_metrics(metrics: &ContentMetrics) {
    println!("{}", style("Content Analysis").bold().underlined());
    println!(
        "{} {}   {} {}   {} {} min   {} {}",
        style("Words:").dim(),
        metrics.word_count,
        style("Characters:").dim(),
        metrics.char_count,
        style("Reading time:").dim(),
        metrics.reading_time_minutes,
        style("Top keywords:").dim(),
        metrics.top_keywords.len()
    );
    if !metrics.top_keywords.is_empty() {
        let keywords = metrics
            .top_keywords
            .iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}", style(keywords).dim());
    }
    println!();
}

pub fn print_panels(result: &GenerationResult) {
    for panel in result.panels() {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}\n", style(panel.heading).cyan().bold());
        match panel.section {
            Section::Tags if result.tags.is_categorized() => {
                print_tag_row("All", &result.tags.all);
                print_tag_row("Primary", &result.tags.primary);
                print_tag_row("Secondary", &result.tags.secondary);
                print_tag_row("Trending", &result.tags.trending);
            }
            _ => println!("{}", panel.body),
        }
        println!();
    }
}

fn print_tag_row(label: &str, tags: &[String]) {
    println!("{} {}", style(format!("{label}:")).yellow(), tags.join(", "));
}
