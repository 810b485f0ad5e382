use std::path::Path;

use arcana_core::{Card, CardKey, Orientation};
use colored::Colorize;

pub fn run(
    card: &str,
    seed: Option<f64>,
    reversed: bool,
    count: usize,
    json: bool,
    quotes: Option<&Path>,
) -> Result<(), String> {
    // Numeric keys go straight to the store, even outside the deck.
    let key = match card.trim().parse::<u32>() {
        Ok(n) => CardKey(n),
        Err(_) => Card::find(card).map_err(|e| e.to_string())?.key,
    };
    let name = Card::from_key(key).map_or_else(|| format!("Card {key}"), |c| c.name);

    let selector = super::load_selector(quotes)?;
    let seed = super::resolve_seed(seed);
    let orientation = Orientation::from_reversed(reversed);
    let picked = selector.select(key, seed, orientation, count);

    if json {
        let out = serde_json::json!({
            "card": key,
            "name": name,
            "orientation": orientation,
            "seed": seed,
            "quotes": picked,
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {}",
        format!("{name} ({orientation})").bold(),
        format!("seed={seed}").dimmed()
    );
    println!();

    if picked.is_empty() {
        println!("  No quotes found.");
        return Ok(());
    }

    for quote in picked {
        println!("  \u{201c}{}\u{201d}", quote.text);
        println!("    {} {}", "—".dimmed(), quote.source.italic());
        println!();
    }

    Ok(())
}
