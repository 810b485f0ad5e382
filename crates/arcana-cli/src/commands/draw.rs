use std::path::Path;

use arcana_quotes::draw_reading;
use colored::Colorize;

pub fn run(
    spread: &str,
    seed: Option<f64>,
    json: bool,
    quotes: Option<&Path>,
) -> Result<(), String> {
    let layout = arcana_core::spread(spread).map_err(|e| e.to_string())?;
    let selector = super::load_selector(quotes)?;
    let seed = super::resolve_seed(seed);

    let reading = draw_reading(&selector, layout, seed);

    if json {
        let text = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        layout.name.bold(),
        format!("seed={}", reading.seed).dimmed()
    );
    println!();

    for (i, drawn) in reading.cards.iter().enumerate() {
        let card = if drawn.orientation.is_reversed() {
            format!("{} (reversed)", drawn.card.name).red()
        } else {
            drawn.card.name.as_str().green()
        };
        println!("  {}. {} {}", i + 1, drawn.position.label.bold(), card);
        println!("     {}", drawn.position.meaning.dimmed());
        if let Some(quote) = drawn.quote {
            println!("     \u{201c}{}\u{201d}", quote.text);
            println!("       {} {}", "—".dimmed(), quote.source.italic());
        }
        println!();
    }

    println!(
        "  {} of {} reversed",
        reading.reversed_count(),
        reading.cards.len()
    );

    Ok(())
}
